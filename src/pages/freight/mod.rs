//! Freight Page
//!
//! Freight list with a create form, and the read-only / editable detail of
//! one freight's values. All transitions go through `FreightViewState`.

mod list;
mod create;
mod detail;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ValuesQuery;
use crate::components::Loading;
use crate::context::use_app_context;
use crate::models::{local_created_at, Freight, PropertyValue};
use crate::session::{use_navigator, use_session_guard};
use crate::state::{FreightDraft, FreightViewState, ViewMode};
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

use create::CreateFreightForm;
use detail::FreightDetail;
use list::FreightTable;

#[component]
pub fn FreightPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let Some(session) = use_session_guard(use_navigator()) else {
        return view! { <Loading /> }.into_any();
    };
    let session = StoredValue::new(session);

    let (loading, set_loading) = signal(true);
    let view_state = RwSignal::new(FreightViewState::default());
    let draft = RwSignal::new(FreightDraft::default());
    let (creating, set_creating) = signal(false);
    let mode = Memo::new(move |_| view_state.with(|s| s.mode));

    // ========================
    // Loaders
    // ========================

    let load_freights = move || {
        let session = session.get_value();
        spawn_local(async move {
            match session.client().list_freights(session.customer_id).await {
                Ok(list) => store.freights().set(list),
                Err(err) => ctx.error(err.message()),
            }
            set_loading.set(false);
        });
    };

    let load_properties = move || {
        let session = session.get_value();
        spawn_local(async move {
            match session.client().list_properties(session.customer_id).await {
                Ok(list) => store.properties().set(list),
                Err(err) => ctx.error(err.message()),
            }
        });
    };

    let load_values = Callback::new(move |(freight_id, query): (i64, ValuesQuery)| {
        let client = session.get_value().client();
        spawn_local(async move {
            match client.list_freight_values(freight_id, &query).await {
                Ok(rows) => view_state.update(|s| s.apply_page(rows)),
                Err(err) => {
                    web_sys::console::error_1(&format!("[FREIGHT] Values of {} failed: {}", freight_id, err).into());
                    view_state.update(|s| s.page_failed());
                    ctx.error(err.message());
                }
            }
        });
    });

    Effect::new(move |_| {
        load_freights();
        load_properties();
    });

    // ========================
    // List Actions
    // ========================

    let open = Callback::new(move |(freight, target): (Freight, ViewMode)| {
        if let Some(query) = view_state.try_update(|s| s.open(freight, target)) {
            load_values.run(query);
        }
    });

    let delete_freight = Callback::new(move |freight_id: i64| {
        ctx.confirm_delete("Deseja realmente excluir este frete?", "Excluir", move || {
            let session = session.get_value();
            spawn_local(async move {
                match session.client().delete_freight(freight_id).await {
                    Ok(()) => {
                        ctx.success("Frete excluído com sucesso!");
                        load_freights();
                    }
                    Err(err) => ctx.error(err.message()),
                }
            });
        });
    });

    let save_freight = Callback::new(move |_: ()| {
        let session = session.get_value();
        let request = match draft.with(|d| d.to_request(session.customer_id, local_created_at())) {
            Ok(request) => request,
            Err(err) => {
                ctx.error(err.to_string());
                return;
            }
        };
        spawn_local(async move {
            match session.client().create_freight(&request).await {
                Ok(freight) => {
                    web_sys::console::log_1(&format!("[FREIGHT] Created freight {}", freight.id).into());
                    ctx.success("Frete criado com sucesso!");
                    draft.set(FreightDraft::default());
                    set_creating.set(false);
                    load_freights();
                }
                Err(err) => ctx.error(err.message()),
            }
        });
    });

    let cancel_create = Callback::new(move |_: ()| {
        draft.set(FreightDraft::default());
        set_creating.set(false);
    });

    // ========================
    // Detail Actions
    // ========================

    let save_name = Callback::new(move |name: String| {
        let name = name.trim().to_string();
        if name.is_empty() {
            ctx.error("O nome do frete não pode estar vazio");
            return;
        }
        let Some(freight_id) = view_state.with_untracked(|s| s.selected_id()) else { return };
        let session = session.get_value();
        spawn_local(async move {
            match session.client().update_freight_name(freight_id, &name).await {
                Ok(()) => {
                    ctx.success("Nome do frete atualizado com sucesso!");
                    view_state.update(|s| s.name_saved(&name));
                    load_freights();
                }
                Err(err) => ctx.error(err.message()),
            }
        });
    });

    let save_value = Callback::new(move |(property_id, value): (i64, String)| {
        if value.trim().is_empty() {
            ctx.error("O valor não pode estar vazio");
            return;
        }
        let Some(freight_id) = view_state.with_untracked(|s| s.selected_id()) else { return };
        let session = session.get_value();
        spawn_local(async move {
            let update = [PropertyValue { property_id, value }];
            match session.client().update_freight_values(freight_id, &update).await {
                Ok(()) => {
                    ctx.success("Valor atualizado com sucesso!");
                    if let Some(query) = view_state.try_update(|s| s.value_saved()).flatten() {
                        load_values.run(query);
                    }
                }
                Err(err) => ctx.error(err.message()),
            }
        });
    });

    let unlink_value = Callback::new(move |property_id: i64| {
        ctx.confirm_delete("Deseja realmente desvincular esta propriedade?", "Excluir", move || {
            let Some(freight_id) = view_state.with_untracked(|s| s.selected_id()) else { return };
            let session = session.get_value();
            spawn_local(async move {
                match session.client().delete_freight_values(freight_id, &[property_id]).await {
                    Ok(()) => {
                        ctx.success("Propriedade desvinculada com sucesso!");
                        if let Some(query) = view_state.with_untracked(|s| s.reload()) {
                            load_values.run(query);
                        }
                    }
                    Err(err) => ctx.error(err.message()),
                }
            });
        });
    });

    let back = Callback::new(move |_: ()| view_state.update(|s| s.back()));

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
            {move || match mode.get() {
                ViewMode::List => view! {
                    <section class="page">
                        <div class="page-header">
                            <h2>"Frete"</h2>
                            <Show when=move || !creating.get()>
                                <button class="btn primary" on:click=move |_| set_creating.set(true)>
                                    "+ Criar Frete"
                                </button>
                            </Show>
                        </div>
                        <Show when=move || creating.get()>
                            <CreateFreightForm draft=draft on_save=save_freight on_cancel=cancel_create />
                        </Show>
                        <FreightTable on_open=open on_delete=delete_freight />
                    </section>
                }
                .into_any(),
                _ => view! {
                    <FreightDetail
                        view_state=view_state
                        load_values=load_values
                        on_back=back
                        on_save_name=save_name
                        on_save_value=save_value
                        on_unlink=unlink_value
                    />
                }
                .into_any(),
            }}
        </Show>
    }
    .into_any()
}
