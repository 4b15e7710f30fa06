//! Properties Page
//!
//! Table of the customer's property definitions with inline rename, a
//! new-property row and confirmed deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Loading;
use crate::context::use_app_context;
use crate::models::{Property, PropertyRequest};
use crate::session::{use_navigator, use_session_guard};
use crate::state::PropertyEditor;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use crate::validation::{check_new_property, check_property_name};

#[component]
pub fn Properties() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let Some(session) = use_session_guard(use_navigator()) else {
        return view! { <Loading /> }.into_any();
    };
    let session = StoredValue::new(session);

    let (loading, set_loading) = signal(true);
    let editor = RwSignal::new(PropertyEditor::default());

    let load = move || {
        let session = session.get_value();
        spawn_local(async move {
            match session.client().list_properties(session.customer_id).await {
                Ok(list) => store.properties().set(list),
                Err(err) => ctx.error(err.message()),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    // ========================
    // Actions
    // ========================

    let save_create = move |_| {
        let (name, kind) = match editor.with(|e| check_new_property(e.name(), e.kind())) {
            Ok(fields) => fields,
            Err(message) => {
                ctx.validation_error(message);
                return;
            }
        };
        let session = session.get_value();
        spawn_local(async move {
            let request = PropertyRequest { customer_id: session.customer_id, name, kind };
            match session.client().create_property(&request).await {
                Ok(_) => ctx.success_then("Propriedade criada com sucesso!", move || {
                    editor.update(|e| e.reset());
                    load();
                }),
                Err(err) => ctx.error(err.message()),
            }
        });
    };

    let save_edit = move |id: i64| {
        let name = match editor.with(|e| check_property_name(e.name())) {
            Ok(name) => name,
            Err(message) => {
                ctx.validation_error(message);
                return;
            }
        };
        let session = session.get_value();
        spawn_local(async move {
            match session.client().update_property(id, &name).await {
                Ok(_) => ctx.success_then("Propriedade atualizada com sucesso!", move || {
                    editor.update(|e| e.reset());
                    load();
                }),
                Err(err) => ctx.error(err.message()),
            }
        });
    };

    let delete = move |id: i64| {
        ctx.confirm_delete("Tem certeza que deseja excluir esta propriedade?", "Confirmar", move || {
            let session = session.get_value();
            spawn_local(async move {
                match session.client().delete_property(id).await {
                    Ok(()) => ctx.success_then("Propriedade excluída com sucesso!", load),
                    Err(err) => ctx.error(err.message()),
                }
            });
        });
    };

    // ========================
    // Rows
    // ========================

    let row = move |property: Property| {
        let id = property.id;
        let editing = Memo::new(move |_| editor.with(|e| e.editing_id() == Some(id)));
        let current_name = property.name.clone();

        let name_cell = move || {
            if editing.get() {
                view! {
                    <input
                        type="text"
                        prop:value=move || editor.with(|e| e.name().to_string())
                        on:input=move |ev| editor.update(|e| e.set_name(event_target_value(&ev)))
                    />
                }
                .into_any()
            } else {
                view! { <span>{current_name.clone()}</span> }.into_any()
            }
        };

        let name_for_edit = property.name.clone();
        let actions = move || {
            if editing.get() {
                view! {
                    <button class="btn primary small" on:click=move |_| save_edit(id)>"Salvar"</button>
                    <button class="btn outline small" on:click=move |_| editor.update(|e| e.reset())>
                        "Cancelar"
                    </button>
                }
                .into_any()
            } else {
                let name = name_for_edit.clone();
                view! {
                    <button
                        class="btn outline small"
                        disabled=move || editor.with(|e| matches!(e, PropertyEditor::Creating { .. }))
                        on:click=move |_| editor.update(|e| e.start_edit(id, &name))
                    >
                        "Editar"
                    </button>
                    <button
                        class="btn destructive small"
                        disabled=move || !editor.with(|e| e.is_idle())
                        on:click=move |_| delete(id)
                    >
                        "Excluir"
                    </button>
                }
                .into_any()
            }
        };

        view! {
            <tr>
                <td>{id}</td>
                <td>{name_cell}</td>
                <td>{property.kind.clone()}</td>
                <td class="actions">{actions}</td>
            </tr>
        }
    };

    let creating = Memo::new(move |_| editor.with(|e| matches!(e, PropertyEditor::Creating { .. })));

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
            <section class="page">
                <div class="page-header">
                    <div>
                        <h2>"Propriedades"</h2>
                        <p class="muted">"Gerencie suas propriedades"</p>
                    </div>
                    <button
                        class="btn primary"
                        disabled=move || !editor.with(|e| e.is_idle())
                        on:click=move |_| editor.update(|e| e.start_create())
                    >
                        "+ Nova Propriedade"
                    </button>
                </div>

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Nome"</th>
                            <th>"Tipo"</th>
                            <th class="actions">"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || creating.get()>
                            <tr class="new-row">
                                <td>"-"</td>
                                <td>
                                    <input
                                        type="text"
                                        placeholder="Nome da propriedade"
                                        prop:value=move || editor.with(|e| e.name().to_string())
                                        on:input=move |ev| editor.update(|e| e.set_name(event_target_value(&ev)))
                                    />
                                </td>
                                <td>
                                    <input
                                        type="text"
                                        placeholder="Tipo"
                                        prop:value=move || editor.with(|e| e.kind().to_string())
                                        on:input=move |ev| editor.update(|e| e.set_kind(event_target_value(&ev)))
                                    />
                                </td>
                                <td class="actions">
                                    <button class="btn primary small" on:click=save_create>"Salvar"</button>
                                    <button class="btn outline small" on:click=move |_| editor.update(|e| e.reset())>
                                        "Cancelar"
                                    </button>
                                </td>
                            </tr>
                        </Show>
                        <Show
                            when=move || !store.properties().with(|p| p.is_empty()) || creating.get()
                            fallback=|| view! {
                                <tr>
                                    <td colspan="4" class="empty">"Nenhuma propriedade cadastrada"</td>
                                </tr>
                            }
                        >
                            <For
                                each=move || store.properties().get()
                                key=|p| (p.id, p.name.clone())
                                children=row
                            />
                        </Show>
                    </tbody>
                </table>
            </section>
        </Show>
    }
    .into_any()
}
