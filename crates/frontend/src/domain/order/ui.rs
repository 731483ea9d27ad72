use contracts::domain::customer::Customer;
use contracts::domain::material::Material;
use contracts::domain::order::{Order, OrderDraft, OrderLineDraft};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::domain::{customer, material};
use crate::shared::date_utils::format_date;
use crate::shared::dialog::{alert, confirm};

#[component]
pub fn OrdersPage() -> impl IntoView {
    let (customers, set_customers) = signal::<Vec<Customer>>(Vec::new());
    let (materials, set_materials) = signal::<Vec<Material>>(Vec::new());
    let (orders, set_orders) = signal::<Vec<Order>>(Vec::new());
    let (editing_id, set_editing_id) = signal::<Option<i64>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let draft = RwSignal::new(OrderDraft::default());

    // Every successful mutation refetches all three collections: the client
    // only holds a volatile snapshot of the last server response.
    let refresh_all = move || {
        spawn_local(async move {
            match customer::api::list().await {
                Ok(v) => set_customers.set(v),
                Err(e) => log::error!("failed to load customers: {}", e),
            }
            match material::api::list().await {
                Ok(v) => set_materials.set(v),
                Err(e) => log::error!("failed to load materials: {}", e),
            }
            match api::list().await {
                Ok(v) => set_orders.set(v),
                Err(e) => log::error!("failed to load orders: {}", e),
            }
        });
    };

    let reset_form = move || {
        draft.set(OrderDraft::default());
        set_editing_id.set(None);
        set_error.set(None);
    };

    let submit = move || {
        // Validation failures render inline and never reach the network.
        let request = match draft.get().validate() {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        spawn_local(async move {
            let editing = editing_id.get_untracked();
            let result = match editing {
                Some(id) => api::update(id, &request).await,
                None => api::create(&request).await,
            };
            match result {
                Ok(()) => {
                    if editing.is_some() {
                        alert("✏️ Ordine modificato con successo!");
                    } else {
                        alert("✅ Ordine creato con successo!");
                    }
                    reset_form();
                    refresh_all();
                }
                Err(e) => {
                    log::error!("failed to save order: {}", e);
                    set_error.set(Some(
                        "Errore durante la creazione o modifica dell'ordine.".into(),
                    ));
                }
            }
        });
    };

    let delete = move |id: i64| {
        if !confirm("Sei sicuro di voler eliminare questo ordine?") {
            return;
        }
        spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => {
                    alert("🗑️ Ordine eliminato con successo!");
                    refresh_all();
                }
                Err(e) => {
                    log::error!("failed to delete order {}: {}", id, e);
                    alert("Errore durante l'eliminazione dell'ordine.");
                }
            }
        });
    };

    let begin_edit = move |order: &Order| {
        set_editing_id.set(Some(order.id));
        draft.set(OrderDraft::from_order(order));
        set_error.set(None);
        if let Some(win) = web_sys::window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }
    };

    let add_line = move || {
        draft.update(|d| d.lines.push(OrderLineDraft::default()));
    };

    refresh_all();

    view! {
        <div class="page">
            <h1 class="page__title">"🏗️ Gestione Noleggio"</h1>

            <div class="card form-card">
                <h2>
                    {move || if editing_id.get().is_some() { "✏️ Modifica ordine" } else { "➕ Crea nuovo ordine" }}
                </h2>

                <div class="form-group">
                    <label>"Cliente:"</label>
                    <select
                        prop:value=move || draft.get().customer_id
                        on:change=move |ev| {
                            draft.update(|d| d.customer_id = event_target_value(&ev))
                        }
                    >
                        <option value="">"-- Seleziona cliente --"</option>
                        {move || {
                            customers
                                .get()
                                .into_iter()
                                .map(|c| {
                                    view! { <option value=c.id.to_string()>{c.name.clone()}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>

                <div class="form-group">
                    <label>"Data consegna:"</label>
                    <input
                        type="date"
                        prop:value=move || draft.get().delivery_date
                        on:input=move |ev| {
                            draft.update(|d| d.delivery_date = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label>"Data ritiro:"</label>
                    <input
                        type="date"
                        prop:value=move || draft.get().pickup_date
                        on:input=move |ev| {
                            draft.update(|d| d.pickup_date = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label>"Km totali:"</label>
                    <input
                        type="number"
                        prop:value=move || draft.get().km
                        on:input=move |ev| draft.update(|d| d.km = event_target_value(&ev))
                    />
                </div>

                <h3>"🧱 Materiali"</h3>
                // Rows keyed by index so typing does not recreate the inputs;
                // only the add-line button changes the row count.
                {move || {
                    let line_count = draft.with(|d| d.lines.len());
                    (0..line_count)
                        .map(|i| {
                            view! {
                                <div class="line-row">
                                    <select
                                        prop:value=move || {
                                            draft
                                                .with(|d| {
                                                    d.lines.get(i).map(|l| l.material_id.clone()).unwrap_or_default()
                                                })
                                        }
                                        on:change=move |ev| {
                                            let value = event_target_value(&ev);
                                            draft
                                                .update(|d| {
                                                    if let Some(line) = d.lines.get_mut(i) {
                                                        line.material_id = value;
                                                    }
                                                });
                                        }
                                    >
                                        <option value="">"-- Seleziona materiale --"</option>
                                        {move || {
                                            materials
                                                .get()
                                                .into_iter()
                                                .map(|m| {
                                                    view! { <option value=m.id.to_string()>{m.name.clone()}</option> }
                                                })
                                                .collect::<Vec<_>>()
                                        }}
                                    </select>
                                    <input
                                        type="number"
                                        placeholder="Quantità"
                                        prop:value=move || {
                                            draft
                                                .with(|d| {
                                                    d.lines.get(i).map(|l| l.quantity.clone()).unwrap_or_default()
                                                })
                                        }
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            draft
                                                .update(|d| {
                                                    if let Some(line) = d.lines.get_mut(i) {
                                                        line.quantity = value;
                                                    }
                                                });
                                        }
                                    />
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button class="btn btn-secondary" on:click=move |_| add_line()>
                    "➕ Aggiungi materiale"
                </button>

                {move || error.get().map(|e| view! { <p class="error">{e}</p> })}

                <div class="form-actions">
                    <button
                        class=move || {
                            if editing_id.get().is_some() { "btn btn-edit" } else { "btn btn-primary" }
                        }
                        on:click=move |_| submit()
                    >
                        {move || if editing_id.get().is_some() { "💾 Salva modifiche" } else { "📦 Salva ordine" }}
                    </button>
                    <Show when=move || editing_id.get().is_some()>
                        <button class="btn btn-secondary" on:click=move |_| reset_form()>
                            "Annulla"
                        </button>
                    </Show>
                </div>
            </div>

            <h2>"📋 Ordini recenti"</h2>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Cliente"</th>
                        <th>"Materiale"</th>
                        <th>"Quantità"</th>
                        <th>"Data consegna"</th>
                        <th>"Data ritiro"</th>
                        <th>"Km"</th>
                        <th>"Totale (€)"</th>
                        <th>"Indirizzo"</th>
                        <th>"Azioni"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = orders.get();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="9" class="table__empty">"Nessun ordine presente"</td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            rows.into_iter()
                                .map(|order| {
                                    let id = order.id;
                                    let total = order
                                        .total
                                        .map(|t| format!("{:.2}", t))
                                        .unwrap_or_else(|| "-".to_string());
                                    let edit_target = order.clone();
                                    view! {
                                        <tr>
                                            <td>{order.customer_name.clone()}</td>
                                            <td>{order.material_name.clone().unwrap_or_default()}</td>
                                            <td>{order.quantity.map(|q| q.to_string()).unwrap_or_default()}</td>
                                            <td>{format_date(&order.delivery_date)}</td>
                                            <td>{format_date(&order.pickup_date)}</td>
                                            <td>{order.km}</td>
                                            <td>{total}</td>
                                            <td>
                                                {order.shipping_address.clone().unwrap_or_else(|| "-".to_string())}
                                            </td>
                                            <td class="table__actions">
                                                <button
                                                    class="btn btn-edit"
                                                    on:click=move |_| begin_edit(&edit_target)
                                                >
                                                    "✏️"
                                                </button>
                                                <button class="btn btn-delete" on:click=move |_| delete(id)>
                                                    "🗑️"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
