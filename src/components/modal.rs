//! Modal Component
//!
//! Renders the app-wide `ModalState` held in `AppContext`.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::state::{ModalKind, ModalState};

fn icon(kind: ModalKind) -> (&'static str, &'static str) {
    match kind {
        ModalKind::Success => ("modal-icon success", "✓"),
        ModalKind::Error => ("modal-icon error", "✕"),
        ModalKind::Info => ("modal-icon info", "i"),
    }
}

/// Notification / confirmation dialog
///
/// Mounted once at the app root. Hidden while the state is `Closed`.
#[component]
pub fn ModalHost() -> impl IntoView {
    let ctx = use_app_context();

    let footer = move || {
        ctx.modal.with(|modal| match modal {
            ModalState::Confirm { confirm_label, .. } => {
                let label = confirm_label.clone();
                view! {
                    <button class="btn outline grow" on:click=move |_| ctx.dismiss()>"Cancelar"</button>
                    <button class="btn primary grow" on:click=move |_| ctx.accept()>{label}</button>
                }
                .into_any()
            }
            _ => view! {
                <button class="btn primary wide" on:click=move |_| ctx.dismiss()>"OK"</button>
            }
            .into_any(),
        })
    };

    view! {
        <Show when=move || ctx.modal.with(|m| m.is_open())>
            <div class="modal-backdrop">
                <div class="modal" role="dialog">
                    <button class="modal-close" aria-label="Fechar" on:click=move |_| ctx.dismiss()>
                        "×"
                    </button>
                    {move || {
                        let (class, glyph) = icon(ctx.modal.with(|m| m.kind()));
                        view! { <div class=class>{glyph}</div> }
                    }}
                    <h3 class="modal-title">{move || ctx.modal.with(|m| m.title().to_string())}</h3>
                    <p class="modal-message">{move || ctx.modal.with(|m| m.message().to_string())}</p>
                    <div class="modal-footer">{footer}</div>
                </div>
            </div>
        </Show>
    }
}
