//! Modal State
//!
//! One notification/confirmation surface shared by every page.

use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Success,
    Error,
    Info,
}

/// Callback attached to a modal button
#[derive(Clone)]
pub struct ModalAction(Arc<dyn Fn() + Send + Sync>);

impl ModalAction {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn run(&self) {
        (self.0)()
    }
}

impl fmt::Debug for ModalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ModalAction")
    }
}

#[derive(Debug, Clone, Default)]
pub enum ModalState {
    #[default]
    Closed,
    /// Single "OK" footer; `on_close` runs however the modal is closed
    Notify {
        title: String,
        message: String,
        kind: ModalKind,
        on_close: Option<ModalAction>,
    },
    /// Cancel/confirm footer; only the confirm button runs `on_confirm`
    Confirm {
        title: String,
        message: String,
        confirm_label: String,
        on_confirm: ModalAction,
    },
}

impl ModalState {
    pub fn notify(kind: ModalKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        ModalState::Notify { title: title.into(), message: message.into(), kind, on_close: None }
    }

    pub fn notify_then(
        kind: ModalKind,
        title: impl Into<String>,
        message: impl Into<String>,
        on_close: ModalAction,
    ) -> Self {
        ModalState::Notify { title: title.into(), message: message.into(), kind, on_close: Some(on_close) }
    }

    pub fn confirm(
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_label: impl Into<String>,
        on_confirm: ModalAction,
    ) -> Self {
        ModalState::Confirm {
            title: title.into(),
            message: message.into(),
            confirm_label: confirm_label.into(),
            on_confirm,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn title(&self) -> &str {
        match self {
            ModalState::Closed => "",
            ModalState::Notify { title, .. } | ModalState::Confirm { title, .. } => title,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ModalState::Closed => "",
            ModalState::Notify { message, .. } | ModalState::Confirm { message, .. } => message,
        }
    }

    /// Confirmation prompts use the info styling
    pub fn kind(&self) -> ModalKind {
        match self {
            ModalState::Notify { kind, .. } => *kind,
            _ => ModalKind::Info,
        }
    }

    /// Close via the dismiss control, "OK" or "Cancelar".
    ///
    /// Returns a Notify's `on_close`; never the confirm callback.
    pub fn dismiss(&mut self) -> Option<ModalAction> {
        match std::mem::take(self) {
            ModalState::Notify { on_close, .. } => on_close,
            _ => None,
        }
    }

    /// Close via the confirm button, returning the callback to run.
    ///
    /// The state is already `Closed` when the callback runs, so a callback
    /// may open a follow-up modal.
    pub fn accept(&mut self) -> Option<ModalAction> {
        match std::mem::take(self) {
            ModalState::Confirm { on_confirm, .. } => Some(on_confirm),
            ModalState::Notify { on_close, .. } => on_close,
            ModalState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn counter() -> (Arc<AtomicU32>, ModalAction) {
        let hits = Arc::new(AtomicU32::new(0));
        let h = hits.clone();
        (hits, ModalAction::new(move || {
            h.fetch_add(1, Ordering::SeqCst);
        }))
    }

    #[test]
    fn test_closed_by_default() {
        let state = ModalState::default();
        assert!(!state.is_open());
        assert_eq!(state.title(), "");
    }

    #[test]
    fn test_dismissing_confirm_never_runs_callback() {
        let (hits, action) = counter();
        let mut state = ModalState::confirm("Confirmar Exclusão", "Deseja realmente excluir este frete?", "Excluir", action);
        assert!(state.is_open());
        assert_eq!(state.kind(), ModalKind::Info);

        assert!(state.dismiss().is_none());
        assert!(!state.is_open());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_accepting_confirm_closes_and_yields_callback() {
        let (hits, action) = counter();
        let mut state = ModalState::confirm("Confirmar Exclusão", "?", "Excluir", action);

        let callback = state.accept().expect("confirm callback");
        assert!(!state.is_open());
        callback.run();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(state.accept().is_none());
    }

    #[test]
    fn test_notify_on_close_runs_on_dismiss() {
        let (hits, action) = counter();
        let mut state = ModalState::notify_then(ModalKind::Success, "Sucesso", "Propriedade criada com sucesso!", action);
        assert_eq!(state.kind(), ModalKind::Success);
        assert_eq!(state.message(), "Propriedade criada com sucesso!");

        state.dismiss().unwrap().run();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!state.is_open());
    }

    #[test]
    fn test_plain_notify_has_no_callback() {
        let mut state = ModalState::notify(ModalKind::Error, "Erro", "Erro ao buscar fretes.");
        assert!(state.dismiss().is_none());
        assert!(!state.is_open());
    }
}
