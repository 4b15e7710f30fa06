//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::state::{ModalAction, ModalKind, ModalState};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The single modal surface - read
    pub modal: ReadSignal<ModalState>,
    /// The single modal surface - write
    set_modal: WriteSignal<ModalState>,
}

impl AppContext {
    pub fn new(modal: (ReadSignal<ModalState>, WriteSignal<ModalState>)) -> Self {
        Self { modal: modal.0, set_modal: modal.1 }
    }

    pub fn show(&self, state: ModalState) {
        self.set_modal.set(state);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ModalState::notify(ModalKind::Success, "Sucesso", message));
    }

    /// Success notice that runs `then` once acknowledged
    pub fn success_then(&self, message: impl Into<String>, then: impl Fn() + Send + Sync + 'static) {
        self.show(ModalState::notify_then(ModalKind::Success, "Sucesso", message, ModalAction::new(then)));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ModalState::notify(ModalKind::Error, "Erro", message));
    }

    pub fn validation_error(&self, message: impl Into<String>) {
        self.show(ModalState::notify(ModalKind::Error, "Erro de Validação", message));
    }

    /// Ask before running a destructive action
    pub fn confirm_delete(
        &self,
        message: impl Into<String>,
        confirm_label: impl Into<String>,
        on_confirm: impl Fn() + Send + Sync + 'static,
    ) {
        self.show(ModalState::confirm("Confirmar Exclusão", message, confirm_label, ModalAction::new(on_confirm)));
    }

    /// Close without confirming
    pub fn dismiss(&self) {
        if let Some(action) = self.set_modal.try_update(|m| m.dismiss()).flatten() {
            action.run();
        }
    }

    /// Close via the confirm button
    pub fn accept(&self) {
        if let Some(action) = self.set_modal.try_update(|m| m.accept()).flatten() {
            action.run();
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
