use leptos::prelude::*;

use crate::api::ValuesQuery;
use crate::components::{PageSizeSelect, PaginationBar, SearchBar};
use crate::state::{FreightViewState, ViewMode};

/// One freight's values. Editable (name, row values, unlink) in `Edit` mode.
#[component]
pub fn FreightDetail(
    view_state: RwSignal<FreightViewState>,
    load_values: Callback<(i64, ValuesQuery)>,
    on_back: Callback<()>,
    on_save_name: Callback<String>,
    on_save_value: Callback<(i64, String)>,
    on_unlink: Callback<i64>,
) -> impl IntoView {
    let editable = view_state.with_untracked(|s| s.mode == ViewMode::Edit);
    let fetch = move |next: Option<(i64, ValuesQuery)>| {
        if let Some(query) = next {
            load_values.run(query);
        }
    };

    let name = Memo::new(move |_| view_state.with(|s| s.selected.as_ref().map(|f| f.name.clone()).unwrap_or_default()));
    let created = Memo::new(move |_| {
        view_state.with(|s| s.selected.as_ref().map(|f| f.created_at_display()).unwrap_or_default())
    });
    let name_editing = Memo::new(move |_| view_state.with(|s| s.name_edit.is_some()));

    let search = Signal::derive(move || view_state.with(|s| s.search_input.clone()));
    let page = Signal::derive(move || view_state.with(|s| s.query.page));
    let size = Signal::derive(move || view_state.with(|s| s.query.size));
    let can_previous = Signal::derive(move || view_state.with(|s| s.can_go_previous()));
    let can_next = Signal::derive(move || view_state.with(|s| s.can_go_next()));
    let is_empty = move || view_state.with(|s| s.values.is_empty());
    let columns = if editable { "5" } else { "4" };

    let title = move || {
        view! {
            <Show
                when=move || name_editing.get()
                fallback=move || {
                    view! {
                        <h2>{move || name.get()}</h2>
                        <Show when=move || editable>
                            <button
                                class="btn outline small"
                                on:click=move |_| view_state.update(|s| s.begin_name_edit())
                            >
                                "Editar"
                            </button>
                        </Show>
                    }
                }
            >
                <input
                    type="text"
                    class="inline-edit"
                    prop:value=move || view_state.with(|s| s.name_edit.clone().unwrap_or_default())
                    on:input=move |ev| view_state.update(|s| s.name_edit = Some(event_target_value(&ev)))
                />
                <button
                    class="btn primary small"
                    on:click=move |_| {
                        if let Some(draft) = view_state.with_untracked(|s| s.name_edit.clone()) {
                            on_save_name.run(draft);
                        }
                    }
                >
                    "Salvar"
                </button>
                <button class="btn outline small" on:click=move |_| view_state.update(|s| s.cancel_name_edit())>
                    "Cancelar"
                </button>
            </Show>
        }
    };

    view! {
        <section class="page">
            <div class="page-header">
                <button class="btn outline" on:click=move |_| on_back.run(())>"← Voltar"</button>
                {title}
            </div>
            <p class="muted">{move || format!("Criado em: {}", created.get())}</p>

            <div class="table-tools">
                <SearchBar
                    value=search
                    on_input=Callback::new(move |text: String| view_state.update(|s| s.search_input = text))
                    on_submit=Callback::new(move |_| fetch(view_state.try_update(|s| s.submit_search()).flatten()))
                />
                <PageSizeSelect
                    size=size
                    on_change=Callback::new(move |size: u32| {
                        fetch(view_state.try_update(|s| s.set_page_size(size)).flatten())
                    })
                />
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Nome da Propriedade"</th>
                        <th>"Tipo"</th>
                        <th>"Valor"</th>
                        <Show when=move || editable>
                            <th>"Ações"</th>
                        </Show>
                    </tr>
                </thead>
                <tbody>
                    <Show when=is_empty>
                        <tr>
                            <td colspan=columns class="empty">
                                "Nenhum valor encontrado"
                            </td>
                        </tr>
                    </Show>
                    <For
                        each=move || view_state.with(|s| s.values.clone())
                        key=|v| (v.id, v.value.clone())
                        children=move |row| {
                            let id = row.id;
                            let property_id = row.property_id;
                            let editing = Memo::new(move |_| view_state.with(|s| s.is_editing_value(id)));
                            let property_name = row.property_name.clone();
                            let kind = row.kind.clone();
                            let shown = row.value.clone();
                            let value_cell = move || {
                                let shown = shown.clone();
                                view! {
                                    <Show when=move || editing.get() fallback=move || shown.clone()>
                                        <input
                                            type="text"
                                            class="inline-edit"
                                            prop:value=move || {
                                                view_state
                                                    .with(|s| s.value_edit.as_ref().map(|(_, v)| v.clone()).unwrap_or_default())
                                            }
                                            on:input=move |ev| {
                                                let text = event_target_value(&ev);
                                                view_state
                                                    .update(|s| {
                                                        if let Some((_, draft)) = s.value_edit.as_mut() {
                                                            *draft = text;
                                                        }
                                                    })
                                            }
                                        />
                                    </Show>
                                }
                            };
                            let actions = move || {
                                let row = row.clone();
                                view! {
                                    <Show
                                        when=move || editing.get()
                                        fallback=move || {
                                            let row = row.clone();
                                            view! {
                                                <button
                                                    class="btn outline small"
                                                    on:click=move |_| view_state.update(|s| s.begin_value_edit(&row))
                                                >
                                                    "Editar"
                                                </button>
                                                <button
                                                    class="btn danger small"
                                                    on:click=move |_| on_unlink.run(property_id)
                                                >
                                                    "Excluir"
                                                </button>
                                            }
                                        }
                                    >
                                        <button
                                            class="btn primary small"
                                            on:click=move |_| {
                                                let draft = view_state
                                                    .with_untracked(|s| s.value_edit.as_ref().map(|(_, v)| v.clone()));
                                                if let Some(draft) = draft {
                                                    on_save_value.run((property_id, draft));
                                                }
                                            }
                                        >
                                            "Salvar"
                                        </button>
                                        <button
                                            class="btn outline small"
                                            on:click=move |_| view_state.update(|s| s.cancel_value_edit())
                                        >
                                            "Cancelar"
                                        </button>
                                    </Show>
                                }
                            };
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{property_name}</td>
                                    <td>{kind}</td>
                                    <td>{value_cell}</td>
                                    <Show when=move || editable>
                                        <td class="actions">{actions.clone()}</td>
                                    </Show>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <PaginationBar
                page=page
                can_previous=can_previous
                can_next=can_next
                on_previous=Callback::new(move |_| fetch(view_state.try_update(|s| s.previous_page()).flatten()))
                on_next=Callback::new(move |_| fetch(view_state.try_update(|s| s.next_page()).flatten()))
            />
        </section>
    }
}
