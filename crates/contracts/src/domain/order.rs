use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::numeric::opt_flexible_f64;
use crate::shared::validation::ValidationError;

/// A rental order as returned by `GET /ordini`.
///
/// The backend denormalizes the row: it carries the customer name, the
/// shipping address captured at order time, and a single top-level
/// material/quantity pair alongside the order's own fields. The total is
/// computed server-side and read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(rename = "cliente_id", default)]
    pub customer_id: Option<i64>,
    #[serde(rename = "cliente", default)]
    pub customer_name: String,
    #[serde(rename = "materiale", default)]
    pub material_name: Option<String>,
    #[serde(rename = "materiale_id", default)]
    pub material_id: Option<i64>,
    #[serde(rename = "quantita", default)]
    pub quantity: Option<i64>,
    #[serde(rename = "data_consegna", default)]
    pub delivery_date: String,
    #[serde(rename = "data_ritiro", default)]
    pub pickup_date: String,
    #[serde(default)]
    pub km: i64,
    #[serde(rename = "totale", default, deserialize_with = "opt_flexible_f64")]
    pub total: Option<f64>,
    #[serde(rename = "indirizzo_spedizione", default)]
    pub shipping_address: Option<String>,
    #[serde(rename = "consegnato", default)]
    pub delivered: bool,
    #[serde(rename = "ritirato", default)]
    pub picked_up: bool,
    #[serde(rename = "pagato", default)]
    pub paid: bool,
}

impl Order {
    /// Server-computed total; missing or non-numeric totals count as zero.
    pub fn total_value(&self) -> f64 {
        self.total.unwrap_or(0.0)
    }

    pub fn delivery_day(&self) -> Option<NaiveDate> {
        parse_day(&self.delivery_date)
    }

    pub fn pickup_day(&self) -> Option<NaiveDate> {
        parse_day(&self.pickup_date)
    }

    /// Zero-based calendar month (0–11) of the delivery date, ignoring the
    /// year. Used by the monthly profit buckets.
    pub fn delivery_month_index(&self) -> Option<usize> {
        self.delivery_day().map(|d| {
            use chrono::Datelike;
            d.month0() as usize
        })
    }
}

/// Dates arrive either as plain `YYYY-MM-DD` or with a datetime suffix.
fn parse_day(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// One (material, quantity) line of an order create/update body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    #[serde(rename = "materiale_id")]
    pub material_id: i64,
    #[serde(rename = "quantita")]
    pub quantity: i64,
}

/// Body shared by `POST /ordini` and `PUT /ordini/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    #[serde(rename = "cliente_id")]
    pub customer_id: i64,
    #[serde(rename = "materiali")]
    pub lines: Vec<OrderLineRequest>,
    #[serde(rename = "data_consegna")]
    pub delivery_date: String,
    #[serde(rename = "data_ritiro")]
    pub pickup_date: String,
    pub km: i64,
}

/// Body of `PATCH /ordini/{id}/stato` — only the three status flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    #[serde(rename = "consegnato")]
    pub delivered: bool,
    #[serde(rename = "ritirato")]
    pub picked_up: bool,
    #[serde(rename = "pagato")]
    pub paid: bool,
}

impl From<&Order> for OrderStatusUpdate {
    fn from(order: &Order) -> Self {
        Self {
            delivered: order.delivered,
            picked_up: order.picked_up,
            paid: order.paid,
        }
    }
}

/// One editable material row of the order form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderLineDraft {
    pub material_id: String,
    pub quantity: String,
}

impl OrderLineDraft {
    /// A line is kept only when a material is chosen and the quantity is a
    /// positive integer; everything else is silently filtered out.
    fn parse(&self) -> Option<OrderLineRequest> {
        let material_id = self.material_id.trim().parse::<i64>().ok()?;
        let quantity = self.quantity.trim().parse::<i64>().ok()?;
        (quantity > 0).then_some(OrderLineRequest {
            material_id,
            quantity,
        })
    }
}

/// Typed form state for the order form.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub customer_id: String,
    pub delivery_date: String,
    pub pickup_date: String,
    pub km: String,
    pub lines: Vec<OrderLineDraft>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        // The form always starts with one empty line row.
        Self {
            customer_id: String::new(),
            delivery_date: String::new(),
            pickup_date: String::new(),
            km: String::new(),
            lines: vec![OrderLineDraft::default()],
        }
    }
}

impl OrderDraft {
    /// Seed the form for editing an existing order.
    ///
    /// Reconstructs a single line from the order's top-level
    /// `materiale_id`/`quantita` pair, as the backend does not echo the full
    /// line list. Multi-line orders therefore cannot be faithfully
    /// re-edited; pending product clarification this mirrors the current
    /// behavior instead of inventing a representation.
    pub fn from_order(order: &Order) -> Self {
        Self {
            customer_id: order
                .customer_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            delivery_date: order.delivery_date.clone(),
            pickup_date: order.pickup_date.clone(),
            km: order.km.to_string(),
            lines: vec![OrderLineDraft {
                material_id: order
                    .material_id
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
                quantity: order.quantity.map(|q| q.to_string()).unwrap_or_default(),
            }],
        }
    }

    /// Validate and assemble the request body.
    ///
    /// Callers submit only on `Ok`; a validation failure must not issue any
    /// network call.
    pub fn validate(&self) -> Result<OrderRequest, ValidationError> {
        let customer_id = self.customer_id.trim().parse::<i64>().ok();
        if customer_id.is_none()
            || self.delivery_date.trim().is_empty()
            || self.pickup_date.trim().is_empty()
            || self.km.trim().is_empty()
        {
            return Err(ValidationError::new("Tutti i campi sono obbligatori."));
        }
        let km = self
            .km
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::new("Tutti i campi sono obbligatori."))?;

        let lines: Vec<OrderLineRequest> =
            self.lines.iter().filter_map(OrderLineDraft::parse).collect();
        if lines.is_empty() {
            return Err(ValidationError::new(
                "Aggiungi almeno un materiale con quantità valida.",
            ));
        }

        Ok(OrderRequest {
            customer_id: customer_id.unwrap_or_default(),
            lines,
            delivery_date: self.delivery_date.clone(),
            pickup_date: self.pickup_date.clone(),
            km,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        serde_json::from_str(
            r#"{
                "id": 7,
                "cliente_id": 2,
                "cliente": "Mario Rossi",
                "materiale": "Sedia",
                "materiale_id": 4,
                "quantita": 20,
                "data_consegna": "2024-03-15",
                "data_ritiro": "2024-03-17",
                "km": 12,
                "totale": "100.50",
                "indirizzo_spedizione": "Via Roma 1",
                "consegnato": false,
                "ritirato": false,
                "pagato": true
            }"#,
        )
        .unwrap()
    }

    fn valid_draft() -> OrderDraft {
        OrderDraft {
            customer_id: "2".into(),
            delivery_date: "2024-03-15".into(),
            pickup_date: "2024-03-17".into(),
            km: "12".into(),
            lines: vec![OrderLineDraft {
                material_id: "4".into(),
                quantity: "20".into(),
            }],
        }
    }

    #[test]
    fn decodes_string_totals() {
        let order = sample_order();
        assert_eq!(order.total_value(), 100.5);
        assert_eq!(order.delivery_month_index(), Some(2));
    }

    #[test]
    fn missing_required_fields_fail_validation() {
        let mut draft = valid_draft();
        draft.delivery_date.clear();
        assert!(draft.validate().is_err());

        let mut draft = valid_draft();
        draft.customer_id.clear();
        assert!(draft.validate().is_err());

        let mut draft = valid_draft();
        draft.km = "dodici".into();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn invalid_lines_are_filtered_and_empty_line_set_is_rejected() {
        let mut draft = valid_draft();
        draft.lines.push(OrderLineDraft {
            material_id: String::new(),
            quantity: "3".into(),
        });
        draft.lines.push(OrderLineDraft {
            material_id: "5".into(),
            quantity: "0".into(),
        });
        let request = draft.validate().unwrap();
        assert_eq!(
            request.lines,
            vec![OrderLineRequest {
                material_id: 4,
                quantity: 20
            }]
        );

        // All lines invalid: validation fails, nothing gets submitted.
        draft.lines = vec![OrderLineDraft::default()];
        assert!(draft.validate().is_err());
    }

    #[test]
    fn edit_then_save_preserves_customer_dates_and_km() {
        let order = sample_order();
        let request = OrderDraft::from_order(&order).validate().unwrap();
        assert_eq!(request.customer_id, 2);
        assert_eq!(request.delivery_date, order.delivery_date);
        assert_eq!(request.pickup_date, order.pickup_date);
        assert_eq!(request.km, order.km);
        assert_eq!(
            request.lines,
            vec![OrderLineRequest {
                material_id: 4,
                quantity: 20
            }]
        );
    }

    #[test]
    fn status_update_serializes_only_the_flags() {
        let update = OrderStatusUpdate::from(&sample_order());
        let json = serde_json::to_value(update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"consegnato": false, "ritirato": false, "pagato": true})
        );
    }
}
