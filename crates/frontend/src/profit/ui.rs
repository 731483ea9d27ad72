use contracts::domain::order::Order;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::monthly::{aggregate_monthly, MONTH_LABELS};
use crate::domain::order::api;

const CHART_HEIGHT_PX: f64 = 300.0;

#[component]
pub fn ProfitPage() -> impl IntoView {
    let (orders, set_orders) = signal::<Vec<Order>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match api::list().await {
            Ok(v) => set_orders.set(v),
            Err(e) => {
                log::error!("failed to load orders: {}", e);
                set_error.set(Some("Errore nel caricamento dati.".into()));
            }
        }
    });

    view! {
        <div class="page">
            <h1 class="page__title">"📊 Profitti Mensili"</h1>

            {move || error.get().map(|e| view! { <p class="error">{e}</p> })}

            {move || {
                let profit = aggregate_monthly(&orders.get());
                let max = profit
                    .buckets
                    .iter()
                    .copied()
                    .fold(0.0_f64, f64::max)
                    .max(1.0);
                let bars = profit
                    .buckets
                    .iter()
                    .zip(MONTH_LABELS)
                    .map(|(&total, label)| {
                        let bar_style = format!(
                            "height: {:.0}px;",
                            total / max * CHART_HEIGHT_PX,
                        );
                        view! {
                            <div class="chart__column">
                                <span class="chart__value">
                                    {if total > 0.0 { format!("{:.2}", total) } else { String::new() }}
                                </span>
                                <div class="chart__bar" style=bar_style></div>
                                <span class="chart__label">{label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>();

                view! {
                    <div class="card">
                        <div class="chart">{bars}</div>
                        <h2 class="chart__total">
                            {format!("💰 Totale annuale: € {:.2}", profit.grand_total)}
                        </h2>
                    </div>
                }
            }}
        </div>
    }
}
