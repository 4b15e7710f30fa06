//! Sidebar Navigation

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::{DASHBOARD_PATH, FREIGHT_PATH, PROPERTIES_PATH};

#[component]
pub fn AppSidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <A href=DASHBOARD_PATH exact=true>"Início"</A>
            <A href=PROPERTIES_PATH>"Propriedades"</A>
            <A href=FREIGHT_PATH>"Frete"</A>
        </nav>
    }
}
