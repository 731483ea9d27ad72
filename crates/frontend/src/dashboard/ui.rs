use contracts::domain::order::Order;
use contracts::domain::stats::MaterialUsage;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::domain::order::api as order_api;
use crate::shared::date_utils::format_date;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (orders, set_orders) = signal::<Vec<Order>>(Vec::new());
    let (stats, set_stats) = signal::<Vec<MaterialUsage>>(Vec::new());

    spawn_local(async move {
        match order_api::list().await {
            Ok(v) => set_orders.set(v),
            Err(e) => log::error!("failed to load orders: {}", e),
        }
        match api::material_stats().await {
            Ok(v) => set_stats.set(v),
            Err(e) => log::error!("failed to load material stats: {}", e),
        }
    });

    view! {
        <div class="page">
            <h1 class="page__title">"📊 Dashboard Amministratore"</h1>

            <section class="card">
                <h2>"Ordini Recenti"</h2>
                {move || {
                    let rows = orders.get();
                    if rows.is_empty() {
                        view! { <p>"Nessun ordine presente."</p> }.into_any()
                    } else {
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Cliente"</th>
                                        <th>"Materiale"</th>
                                        <th>"Quantità"</th>
                                        <th>"Data Consegna"</th>
                                        <th>"Data Ritiro"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows
                                        .into_iter()
                                        .map(|order| {
                                            view! {
                                                <tr>
                                                    <td>{order.id}</td>
                                                    <td>{order.customer_name.clone()}</td>
                                                    <td>{order.material_name.clone().unwrap_or_default()}</td>
                                                    <td>
                                                        {order.quantity.map(|q| q.to_string()).unwrap_or_default()}
                                                    </td>
                                                    <td>{format_date(&order.delivery_date)}</td>
                                                    <td>
                                                        {if order.pickup_date.is_empty() {
                                                            "-".to_string()
                                                        } else {
                                                            format_date(&order.pickup_date)
                                                        }}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                }}
            </section>

            <section class="card">
                <h2>"Statistiche Materiali"</h2>
                {move || {
                    let usage = stats.get();
                    if usage.is_empty() {
                        view! { <p>"Nessun dato disponibile."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="stats-list">
                                {usage
                                    .into_iter()
                                    .map(|s| {
                                        view! {
                                            <li>{format!("{}: {} ordini", s.name, s.order_count)}</li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}
