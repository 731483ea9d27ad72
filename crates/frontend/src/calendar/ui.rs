use chrono::{Datelike, Duration, Months, NaiveDate, Utc};
use contracts::domain::order::{Order, OrderStatusUpdate};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::events::derive_events;
use crate::domain::order::api;
use crate::shared::date_utils::format_date;
use crate::shared::dialog::alert;

const MONTH_NAMES: [&str; 12] = [
    "Gennaio",
    "Febbraio",
    "Marzo",
    "Aprile",
    "Maggio",
    "Giugno",
    "Luglio",
    "Agosto",
    "Settembre",
    "Ottobre",
    "Novembre",
    "Dicembre",
];

const WEEKDAY_NAMES: [&str; 7] = ["Lun", "Mar", "Mer", "Gio", "Ven", "Sab", "Dom"];

fn month_start(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// The 42 days (6 Monday-first weeks) shown for a month, including the
/// leading/trailing days of the neighbouring months.
fn month_grid(first_of_month: NaiveDate) -> Vec<NaiveDate> {
    let offset = first_of_month.weekday().num_days_from_monday() as i64;
    let start = first_of_month - Duration::days(offset);
    (0..42).map(|i| start + Duration::days(i)).collect()
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    let (orders, set_orders) = signal::<Vec<Order>>(Vec::new());
    let (current, set_current) = signal(month_start(Utc::now().date_naive()));
    let (saving, set_saving) = signal(false);
    // The popup edits a copy of the order; flags reach the backend only on
    // save, via the partial status endpoint.
    let popup = RwSignal::new(Option::<Order>::None);

    let load = move || {
        spawn_local(async move {
            match api::list().await {
                Ok(v) => set_orders.set(v),
                Err(e) => log::error!("failed to load orders: {}", e),
            }
        });
    };

    let prev_month = move || {
        set_current.update(|c| {
            if let Some(prev) = c.checked_sub_months(Months::new(1)) {
                *c = prev;
            }
        });
    };

    let next_month = move || {
        set_current.update(|c| {
            if let Some(next) = c.checked_add_months(Months::new(1)) {
                *c = next;
            }
        });
    };

    let save_status = move || {
        let Some(order) = popup.get_untracked() else {
            return;
        };
        set_saving.set(true);
        spawn_local(async move {
            let update = OrderStatusUpdate::from(&order);
            match api::update_status(order.id, &update).await {
                Ok(()) => {
                    load();
                    popup.set(None);
                }
                Err(e) => {
                    log::error!("failed to update order {} status: {}", order.id, e);
                    alert("Errore nel salvataggio: controlla il backend.");
                }
            }
            set_saving.set(false);
        });
    };

    load();

    view! {
        <div class="page">
            <h1 class="page__title">"📅 Calendario Ordini"</h1>

            <div class="card calendar-card">
                <div class="calendar-toolbar">
                    <button class="btn btn-secondary" on:click=move |_| prev_month()>
                        "‹"
                    </button>
                    <h2>
                        {move || {
                            let month = current.get();
                            format!("{} {}", MONTH_NAMES[month.month0() as usize], month.year())
                        }}
                    </h2>
                    <button class="btn btn-secondary" on:click=move |_| next_month()>
                        "›"
                    </button>
                </div>

                <table class="calendar-grid">
                    <thead>
                        <tr>
                            {WEEKDAY_NAMES
                                .into_iter()
                                .map(|name| view! { <th>{name}</th> })
                                .collect::<Vec<_>>()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let first = current.get();
                            let events = derive_events(&orders.get());
                            let grid = month_grid(first);
                            grid.chunks(7)
                                .map(|week| {
                                    let cells = week
                                        .iter()
                                        .map(|day| {
                                            let day = *day;
                                            let in_month = day.month() == first.month();
                                            let day_events = events
                                                .iter()
                                                .filter(|e| e.date == Some(day))
                                                .map(|e| {
                                                    let order = e.order.clone();
                                                    let style = format!("background: {};", e.color);
                                                    view! {
                                                        <div
                                                            class="calendar-event"
                                                            style=style
                                                            on:click=move |_| popup.set(Some(order.clone()))
                                                        >
                                                            {e.title.clone()}
                                                        </div>
                                                    }
                                                })
                                                .collect::<Vec<_>>();
                                            view! {
                                                <td class=if in_month {
                                                    "calendar-cell"
                                                } else {
                                                    "calendar-cell calendar-cell--dim"
                                                }>
                                                    <div class="calendar-cell__day">{day.day()}</div>
                                                    {day_events}
                                                </td>
                                            }
                                        })
                                        .collect::<Vec<_>>();
                                    view! { <tr>{cells}</tr> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>

            {move || {
                popup
                    .get()
                    .map(|order| {
                        view! {
                            <div class="popup-overlay">
                                <div class="popup">
                                    <button class="popup__close" on:click=move |_| popup.set(None)>
                                        "✖"
                                    </button>
                                    <h2>"Dettagli Ordine"</h2>
                                    <p>
                                        <strong>"Cliente: "</strong>
                                        {order.customer_name.clone()}
                                    </p>
                                    <p>
                                        <strong>"Materiale: "</strong>
                                        {order.material_name.clone().unwrap_or_default()}
                                    </p>
                                    <p>
                                        <strong>"Quantità: "</strong>
                                        {order.quantity.map(|q| q.to_string()).unwrap_or_default()}
                                    </p>
                                    <p>
                                        <strong>"Consegna: "</strong>
                                        {format_date(&order.delivery_date)}
                                    </p>
                                    <p>
                                        <strong>"Ritiro: "</strong>
                                        {format_date(&order.pickup_date)}
                                    </p>
                                    <p>
                                        <strong>"Km: "</strong>
                                        {order.km}
                                    </p>
                                    <p>
                                        <strong>"Totale: "</strong>
                                        {format!("€ {:.2}", order.total_value())}
                                    </p>

                                    <div class="popup__flags">
                                        <label>
                                            <input
                                                type="checkbox"
                                                prop:checked=order.delivered
                                                on:change=move |_| {
                                                    popup
                                                        .update(|o| {
                                                            if let Some(o) = o {
                                                                o.delivered = !o.delivered;
                                                            }
                                                        })
                                                }
                                            />
                                            " Consegnato"
                                        </label>
                                        <label>
                                            <input
                                                type="checkbox"
                                                prop:checked=order.picked_up
                                                on:change=move |_| {
                                                    popup
                                                        .update(|o| {
                                                            if let Some(o) = o {
                                                                o.picked_up = !o.picked_up;
                                                            }
                                                        })
                                                }
                                            />
                                            " Ritirato"
                                        </label>
                                        <label>
                                            <input
                                                type="checkbox"
                                                prop:checked=order.paid
                                                on:change=move |_| {
                                                    popup
                                                        .update(|o| {
                                                            if let Some(o) = o {
                                                                o.paid = !o.paid;
                                                            }
                                                        })
                                                }
                                            />
                                            " Pagato"
                                        </label>
                                    </div>

                                    <button
                                        class="btn btn-primary popup__save"
                                        disabled=move || saving.get()
                                        on:click=move |_| save_status()
                                    >
                                        {move || {
                                            if saving.get() { "💾 Salvataggio..." } else { "💾 Salva modifiche" }
                                        }}
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_six_monday_first_weeks() {
        let first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let grid = month_grid(first);
        assert_eq!(grid.len(), 42);
        assert_eq!(grid[0].weekday(), chrono::Weekday::Mon);
        // March 2024 starts on a Friday: four leading February days.
        assert_eq!(grid[0], NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
        assert!(grid.contains(&first));
        assert!(grid.contains(&NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
    }

    #[test]
    fn month_start_clamps_to_day_one() {
        let day = NaiveDate::from_ymd_opt(2024, 7, 19).unwrap();
        assert_eq!(month_start(day), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
    }
}
