//! Pagination Controls
//!
//! Search box, page-size selector and previous/next bar for server-paged tables.

use leptos::prelude::*;

use crate::config::PAGE_SIZE_OPTIONS;

/// Search input committed with the button or the Enter key
#[component]
pub fn SearchBar(
    value: Signal<String>,
    on_input: Callback<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="Buscar..."
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        on_submit.run(());
                    }
                }
            />
            <button class="btn primary" on:click=move |_| on_submit.run(())>"Buscar"</button>
        </div>
    }
}

#[component]
pub fn PageSizeSelect(size: Signal<u32>, on_change: Callback<u32>) -> impl IntoView {
    view! {
        <select
            class="page-size"
            prop:value=move || size.get().to_string()
            on:change=move |ev| {
                if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                    on_change.run(size);
                }
            }
        >
            {PAGE_SIZE_OPTIONS
                .iter()
                .map(|size| {
                    view! { <option value=size.to_string()>{format!("{} por página", size)}</option> }
                })
                .collect_view()}
        </select>
    }
}

/// Previous / "Página n" / next
#[component]
pub fn PaginationBar(
    /// Zero-based page index
    page: Signal<u32>,
    can_previous: Signal<bool>,
    can_next: Signal<bool>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="btn outline small"
                disabled=move || !can_previous.get()
                on:click=move |_| on_previous.run(())
            >
                "← Anterior"
            </button>
            <span class="muted">{move || format!("Página {}", page.get() + 1)}</span>
            <button
                class="btn outline small"
                disabled=move || !can_next.get()
                on:click=move |_| on_next.run(())
            >
                "Próxima →"
            </button>
        </div>
    }
}
