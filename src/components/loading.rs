use leptos::prelude::*;

/// Whole-page loading placeholder
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <p class="muted">"Carregando..."</p>
        </div>
    }
}
