use contracts::domain::customer::{Customer, CustomerDraft};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::shared::dialog::{alert, confirm};

#[component]
pub fn CustomersPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Customer>>(Vec::new());
    let (editing_id, set_editing_id) = signal::<Option<i64>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let draft = RwSignal::new(CustomerDraft::default());

    let fetch = move || {
        spawn_local(async move {
            match api::list().await {
                Ok(v) => set_items.set(v),
                Err(e) => log::error!("failed to load customers: {}", e),
            }
        });
    };

    let reset_form = move || {
        draft.set(CustomerDraft::default());
        set_editing_id.set(None);
        set_error.set(None);
    };

    let save = move || {
        let request = match draft.get().validate() {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        spawn_local(async move {
            let result = match editing_id.get_untracked() {
                Some(id) => api::update(id, &request).await,
                None => api::create(&request).await,
            };
            match result {
                Ok(()) => {
                    reset_form();
                    fetch();
                }
                Err(e) => {
                    log::error!("failed to save customer: {}", e);
                    set_error.set(Some("Errore durante il salvataggio del cliente.".into()));
                }
            }
        });
    };

    let begin_edit = move |customer: &Customer| {
        draft.set(CustomerDraft::from_customer(customer));
        set_editing_id.set(Some(customer.id));
        set_error.set(None);
    };

    let delete = move |id: i64| {
        if !confirm("Sei sicuro di voler eliminare questo cliente?") {
            return;
        }
        spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => fetch(),
                Err(e) if e.is_constraint() => {
                    log::error!("failed to delete customer {}: {}", id, e);
                    alert("❌ Impossibile eliminare il cliente. Potrebbe avere ordini associati.");
                }
                Err(e) => {
                    log::error!("failed to delete customer {}: {}", id, e);
                    alert("Errore di rete durante l'eliminazione. Riprova.");
                }
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <h1 class="page__title">"👥 Gestione Clienti"</h1>

            <div class="card form-card">
                <h2>
                    {move || if editing_id.get().is_some() { "✏️ Modifica Cliente" } else { "➕ Aggiungi Cliente" }}
                </h2>

                <div class="form-grid">
                    <input
                        type="text"
                        placeholder="Nome Cliente"
                        prop:value=move || draft.get().name
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Telefono"
                        prop:value=move || draft.get().phone
                        on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Indirizzo di Spedizione"
                        prop:value=move || draft.get().shipping_address
                        on:input=move |ev| {
                            draft.update(|d| d.shipping_address = event_target_value(&ev))
                        }
                    />
                </div>

                {move || error.get().map(|e| view! { <p class="error">{e}</p> })}

                <button class="btn btn-primary" on:click=move |_| save()>
                    {move || if editing_id.get().is_some() { "💾 Salva Modifiche" } else { "➕ Aggiungi Cliente" }}
                </button>
                <Show when=move || editing_id.get().is_some()>
                    <button class="btn btn-secondary" on:click=move |_| reset_form()>
                        "Annulla"
                    </button>
                </Show>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Nome"</th>
                        <th>"Telefono"</th>
                        <th>"Indirizzo"</th>
                        <th>"Azioni"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let customers = items.get();
                        if customers.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="4" class="table__empty">"Nessun cliente presente"</td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            customers
                                .into_iter()
                                .map(|customer| {
                                    let id = customer.id;
                                    let edit_target = customer.clone();
                                    view! {
                                        <tr>
                                            <td>{customer.name.clone()}</td>
                                            <td>{customer.phone.clone().unwrap_or_default()}</td>
                                            <td>{customer.shipping_address.clone().unwrap_or_default()}</td>
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
