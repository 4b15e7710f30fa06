//! Shipping Admin App
//!
//! Router, public auth pages and the guarded dashboard tree.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::ModalHost;
use crate::config::LOGIN_PATH;
use crate::context::AppContext;
use crate::pages::{Dashboard, DashboardHome, FreightPage, Login, Properties, Register};
use crate::state::ModalState;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(signal(ModalState::default())));

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=|| view! { <Redirect path=LOGIN_PATH /> } />
                <Route path=path!("/login") view=Login />
                <Route path=path!("/register") view=Register />
                <ParentRoute path=path!("/dashboard") view=Dashboard>
                    <Route path=path!("") view=DashboardHome />
                    <Route path=path!("properties") view=Properties />
                    <Route path=path!("freight") view=FreightPage />
                </ParentRoute>
            </Routes>
            <ModalHost />
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Página não encontrada"</p>
            <a href=LOGIN_PATH>"Voltar ao início"</a>
        </div>
    }
}
