use contracts::domain::material::{Material, MaterialDraft};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::shared::dialog::{alert, confirm};

/// Availability indicator color: red when nearly out, orange when low,
/// green otherwise.
fn availability_color(percent: f64) -> &'static str {
    if percent <= 10.0 {
        "#e74c3c"
    } else if percent <= 30.0 {
        "#f39c12"
    } else {
        "#2ecc71"
    }
}

#[component]
pub fn MaterialsPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Material>>(Vec::new());
    let (editing_id, set_editing_id) = signal::<Option<i64>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let draft = RwSignal::new(MaterialDraft::default());

    let fetch = move || {
        spawn_local(async move {
            match api::list().await {
                Ok(v) => set_items.set(v),
                Err(e) => log::error!("failed to load materials: {}", e),
            }
        });
    };

    let reset_form = move || {
        draft.set(MaterialDraft::default());
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
                    log::error!("failed to save material: {}", e);
                    set_error.set(Some("Errore durante il salvataggio del materiale.".into()));
                }
            }
        });
    };

    let begin_edit = move |material: &Material| {
        draft.set(MaterialDraft::from_material(material));
        set_editing_id.set(Some(material.id));
        set_error.set(None);
    };

    let delete = move |id: i64| {
        if !confirm("Sei sicuro di voler eliminare questo materiale?") {
            return;
        }
        spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => fetch(),
                Err(e) if e.is_constraint() => {
                    log::error!("failed to delete material {}: {}", id, e);
                    alert(
                        "❌ Impossibile eliminare il materiale. Potrebbe essere usato in ordini attivi.",
                    );
                }
                Err(e) => {
                    log::error!("failed to delete material {}: {}", id, e);
                    alert("Errore di rete durante l'eliminazione. Riprova.");
                }
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <h1 class="page__title">"📦 Gestione Materiali"</h1>

            <div class="card form-card">
                <h2>
                    {move || if editing_id.get().is_some() { "✏️ Modifica Materiale" } else { "➕ Aggiungi Materiale" }}
                </h2>

                <div class="form-grid">
                    <input
                        type="text"
                        placeholder="Nome materiale"
                        prop:value=move || draft.get().name
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                    <input
                        type="number"
                        placeholder="Quantità disponibile"
                        prop:value=move || draft.get().quantity_available
                        on:input=move |ev| {
                            draft.update(|d| d.quantity_available = event_target_value(&ev))
                        }
                    />
                    <input
                        type="number"
                        placeholder="Prezzo per weekend (€)"
                        prop:value=move || draft.get().price_weekend
                        on:input=move |ev| {
                            draft.update(|d| d.price_weekend = event_target_value(&ev))
                        }
                    />
                </div>

                {move || error.get().map(|e| view! { <p class="error">{e}</p> })}

                <button class="btn btn-primary" on:click=move |_| save()>
                    {move || if editing_id.get().is_some() { "💾 Salva Modifiche" } else { "➕ Aggiungi Materiale" }}
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
                        <th>"Prezzo Weekend (€)"</th>
                        <th>"Disponibilità"</th>
                        <th>"Azioni"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let materials = items.get();
                        if materials.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="4" class="table__empty">"Nessun materiale presente"</td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            materials
                                .into_iter()
                                .map(|material| {
                                    let id = material.id;
                                    let percent = material.availability_percent();
                                    let bar_style = format!(
                                        "width: {:.0}%; background: {}; height: 100%; border-radius: 5px;",
                                        percent.min(100.0),
                                        availability_color(percent),
                                    );
                                    let edit_target = material.clone();
                                    view! {
                                        <tr>
                                            <td>{material.name.clone()}</td>
                                            <td>{format!("{:.2} €", material.price_value())}</td>
                                            <td class="availability-cell">
                                                <div class="availability-bar">
                                                    <div style=bar_style></div>
                                                </div>
                                                <small>
                                                    {format!("{} disponibili", material.quantity_available)}
                                                </small>
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

#[cfg(test)]
mod tests {
    use super::availability_color;

    #[test]
    fn color_thresholds_match_the_indicator() {
        assert_eq!(availability_color(0.0), "#e74c3c");
        assert_eq!(availability_color(10.0), "#e74c3c");
        assert_eq!(availability_color(10.1), "#f39c12");
        assert_eq!(availability_color(30.0), "#f39c12");
        assert_eq!(availability_color(75.0), "#2ecc71");
    }
}
