use leptos::prelude::*;

use crate::models::Freight;
use crate::state::ViewMode;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// The customer's freights with view / edit / delete per row
#[component]
pub fn FreightTable(on_open: Callback<(Freight, ViewMode)>, on_delete: Callback<i64>) -> impl IntoView {
    let store = use_dashboard_store();
    let is_empty = move || store.freights().with(|f| f.is_empty());

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Nome"</th>
                    <th>"Data de Criação"</th>
                    <th>"Ações"</th>
                </tr>
            </thead>
            <tbody>
                <Show when=is_empty>
                    <tr>
                        <td colspan="4" class="empty">"Nenhum frete cadastrado"</td>
                    </tr>
                </Show>
                <For
                    each=move || store.freights().get()
                    key=|f| (f.id, f.name.clone())
                    children=move |freight| {
                        let id = freight.id;
                        let created = freight.created_at_display();
                        let name = freight.name.clone();
                        let for_view = freight.clone();
                        let for_edit = freight;
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{name}</td>
                                <td>{created}</td>
                                <td class="actions">
                                    <button
                                        class="btn outline small"
                                        title="Visualizar"
                                        on:click=move |_| on_open.run((for_view.clone(), ViewMode::View))
                                    >
                                        "Visualizar"
                                    </button>
                                    <button
                                        class="btn outline small"
                                        title="Editar"
                                        on:click=move |_| on_open.run((for_edit.clone(), ViewMode::Edit))
                                    >
                                        "Editar"
                                    </button>
                                    <button
                                        class="btn danger small"
                                        title="Excluir"
                                        on:click=move |_| on_delete.run(id)
                                    >
                                        "Excluir"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
