//! Dashboard Header Component
//!
//! Brand, greeting for the logged-in customer and the logout button.

use leptos::prelude::*;

use crate::session::{end_session, use_navigator};
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn DashboardHeader() -> impl IntoView {
    let store = use_dashboard_store();
    let navigator = use_navigator();

    let customer_name = move || {
        store.customer().with(|c| c.as_ref().map(|c| c.name.clone()).unwrap_or_default())
    };

    view! {
        <header class="dashboard-header">
            <div class="brand">
                <span class="brand-icon">"📦"</span>
                <div>
                    <h1 class="brand-title">"AdmazsShipping"</h1>
                    <p class="brand-greeting">"Olá, " {customer_name}</p>
                </div>
            </div>
            <button class="btn outline small" on:click=move |_| end_session(navigator)>
                "Sair"
            </button>
        </header>
    }
}
