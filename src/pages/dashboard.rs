//! Dashboard Shell
//!
//! Parent route of every protected page: runs the session guard, loads the
//! customer and provides the dashboard store to nested routes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Outlet, A};
use reactive_stores::Store;

use crate::components::{AppSidebar, DashboardHeader, Loading};
use crate::config::{FREIGHT_PATH, LOGIN_PATH, PROPERTIES_PATH};
use crate::session::{settle_customer, use_navigator, use_session_guard, BrowserStorage};
use crate::store::{use_dashboard_store, DashboardState, DashboardStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let navigator = use_navigator();
    let session = use_session_guard(navigator);

    let store = Store::new(DashboardState::default());
    provide_context(store);

    let (loading, set_loading) = signal(true);

    // Load the customer once on mount; a failure ends the session
    Effect::new(move |_| {
        let Some(session) = session.clone() else { return };
        spawn_local(async move {
            let fetched = session.client().get_customer(session.customer_id).await;
            if let Err(err) = &fetched {
                web_sys::console::error_1(&format!("[DASHBOARD] Failed to load customer: {}", err).into());
            }
            match settle_customer(&BrowserStorage, fetched) {
                Some(customer) => {
                    web_sys::console::log_1(&format!("[DASHBOARD] Loaded customer {}", customer.id).into());
                    store.customer().set(Some(customer));
                    set_loading.set(false);
                }
                None => {
                    set_loading.set(false);
                    navigator.go(LOGIN_PATH);
                }
            }
        });
    });

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
            <Show when=move || store.customer().with(|c| c.is_some())>
                <div class="dashboard-layout">
                    <AppSidebar />
                    <div class="dashboard-main">
                        <DashboardHeader />
                        <main class="dashboard-content">
                            <Outlet />
                        </main>
                    </div>
                </div>
            </Show>
        </Show>
    }
}

/// Index of the dashboard
#[component]
pub fn DashboardHome() -> impl IntoView {
    let store = use_dashboard_store();
    let name = move || store.customer().with(|c| c.as_ref().map(|c| c.name.clone()).unwrap_or_default());

    view! {
        <section class="page">
            <h2>"Bem-vindo(a), " {name}</h2>
            <p class="muted">"Escolha uma seção para começar."</p>
            <div class="home-links">
                <A href=PROPERTIES_PATH attr:class="card-link">"Propriedades"</A>
                <A href=FREIGHT_PATH attr:class="card-link">"Frete"</A>
            </div>
        </section>
    }
}
