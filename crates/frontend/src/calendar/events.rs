//! Derivation of calendar events from the order list.
//!
//! Pure and order-preserving: each order yields exactly two events, one for
//! the delivery date and one for the pickup date, colored by the order's
//! status flags.

use chrono::NaiveDate;
use contracts::domain::order::Order;

pub const COLOR_PAID: &str = "#4CAF50";
pub const COLOR_DELIVERED: &str = "#2196F3";
pub const COLOR_PENDING: &str = "#FFC107";
pub const COLOR_PICKED_UP: &str = "#8BC34A";
pub const COLOR_NOT_PICKED_UP: &str = "#F44336";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Delivery,
    Pickup,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub kind: EventKind,
    pub title: String,
    /// Day the event falls on; `None` when the order carries an
    /// unparseable date (the event still exists, it just cannot be placed).
    pub date: Option<NaiveDate>,
    pub color: &'static str,
    /// Back-reference to the source order for the detail popup.
    pub order: Order,
}

fn delivery_event(order: &Order) -> CalendarEvent {
    let color = if order.paid {
        COLOR_PAID
    } else if order.delivered {
        COLOR_DELIVERED
    } else {
        COLOR_PENDING
    };
    CalendarEvent {
        kind: EventKind::Delivery,
        title: format!("📦 Consegna - {}", order.customer_name),
        date: order.delivery_day(),
        color,
        order: order.clone(),
    }
}

fn pickup_event(order: &Order) -> CalendarEvent {
    let color = if order.picked_up {
        COLOR_PICKED_UP
    } else {
        COLOR_NOT_PICKED_UP
    };
    CalendarEvent {
        kind: EventKind::Pickup,
        title: format!("🔁 Ritiro - {}", order.customer_name),
        date: order.pickup_day(),
        color,
        order: order.clone(),
    }
}

pub fn derive_events(orders: &[Order]) -> Vec<CalendarEvent> {
    orders
        .iter()
        .flat_map(|order| [delivery_event(order), pickup_event(order)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: i64, delivered: bool, picked_up: bool, paid: bool) -> Order {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "cliente": format!("Cliente {id}"),
            "data_consegna": "2024-03-15",
            "data_ritiro": "2024-03-17",
            "consegnato": delivered,
            "ritirato": picked_up,
            "pagato": paid,
        }))
        .unwrap()
    }

    #[test]
    fn two_events_per_order_referencing_the_same_source() {
        let orders = vec![order(1, false, false, false), order(2, true, true, true)];
        let events = derive_events(&orders);

        assert_eq!(events.len(), 2 * orders.len());
        for (pair, source) in events.chunks(2).zip(&orders) {
            assert_eq!(pair[0].kind, EventKind::Delivery);
            assert_eq!(pair[1].kind, EventKind::Pickup);
            assert_eq!(pair[0].order, *source);
            assert_eq!(pair[1].order, *source);
        }
    }

    #[test]
    fn delivery_color_prefers_paid_over_delivered() {
        let events = derive_events(&[order(1, true, false, true)]);
        assert_eq!(events[0].color, COLOR_PAID);

        let events = derive_events(&[order(1, true, false, false)]);
        assert_eq!(events[0].color, COLOR_DELIVERED);

        let events = derive_events(&[order(1, false, false, false)]);
        assert_eq!(events[0].color, COLOR_PENDING);
    }

    #[test]
    fn pickup_color_follows_the_flag() {
        let events = derive_events(&[order(1, false, true, false)]);
        assert_eq!(events[1].color, COLOR_PICKED_UP);

        let events = derive_events(&[order(1, false, false, false)]);
        assert_eq!(events[1].color, COLOR_NOT_PICKED_UP);
    }

    #[test]
    fn input_order_is_preserved_and_rederivation_is_stable() {
        let orders: Vec<Order> = (1..=5).map(|id| order(id, false, false, false)).collect();
        let first = derive_events(&orders);
        let second = derive_events(&orders);
        assert_eq!(first, second);
        let ids: Vec<i64> = first.iter().map(|e| e.order.id).collect();
        assert_eq!(ids, vec![1, 1, 2, 2, 3, 3, 4, 4, 5, 5]);
    }

    #[test]
    fn unparseable_dates_produce_unplaced_events() {
        let mut bad = order(9, false, false, false);
        bad.delivery_date = "domani".into();
        let events = derive_events(&[bad]);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].date, None);
        assert!(events[1].date.is_some());
    }
}
