use leptos::prelude::*;

use crate::context::use_app_context;
use crate::state::FreightDraft;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// Name, property picker and the list of properties attached so far
#[component]
pub fn CreateFreightForm(
    draft: RwSignal<FreightDraft>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    let selected = RwSignal::new(None::<i64>);
    let value = RwSignal::new(String::new());

    let add = move |_| {
        let property = selected
            .get_untracked()
            .and_then(|id| store.properties().with_untracked(|all| all.iter().find(|p| p.id == id).cloned()));
        let typed = value.get_untracked();
        match draft.try_update(|d| d.attach(property.as_ref(), &typed)) {
            Some(Err(err)) => ctx.error(err.to_string()),
            _ => {
                selected.set(None);
                value.set(String::new());
            }
        }
    };

    view! {
        <div class="card create-freight">
            <h3>"Novo Frete"</h3>
            <label>
                "Nome do Frete"
                <input
                    type="text"
                    placeholder="Nome do frete"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
            </label>

            <div class="attach-row">
                <select
                    prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
                    on:change=move |ev| selected.set(event_target_value(&ev).parse::<i64>().ok())
                >
                    <option value="">"Selecione uma propriedade"</option>
                    {move || {
                        store
                            .properties()
                            .get()
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <option value=p.id.to_string()>{format!("{} - {}", p.name, p.kind)}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                <input
                    type="text"
                    placeholder="Valor"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button class="btn outline" on:click=add>"Adicionar Propriedade"</button>
            </div>

            <Show when=move || draft.with(|d| !d.attachments().is_empty())>
                <ul class="attachments">
                    <For
                        each=move || draft.with(|d| d.attachments().to_vec())
                        key=|a| (a.property_id, a.value.clone())
                        children=move |attachment| {
                            let property_id = attachment.property_id;
                            view! {
                                <li>
                                    <span>
                                        {format!(
                                            "{} ({}): {}",
                                            attachment.property_name,
                                            attachment.property_type,
                                            attachment.value,
                                        )}
                                    </span>
                                    <button
                                        class="btn danger small"
                                        title="Remover"
                                        on:click=move |_| draft.update(|d| d.detach(property_id))
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            <div class="form-actions">
                <button class="btn primary" on:click=move |_| on_save.run(())>"Salvar Frete"</button>
                <button class="btn outline" on:click=move |_| on_cancel.run(())>"Cancelar"</button>
            </div>
        </div>
    }
}
