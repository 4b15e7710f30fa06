//! View State
//!
//! Plain state machines behind the pages. They hold no signals and make no
//! requests, so they can be driven directly from tests.

pub mod modal;
pub mod freight_view;
pub mod freight_draft;
pub mod property_editor;

pub use modal::{ModalAction, ModalKind, ModalState};
pub use freight_view::{FreightViewState, ViewMode};
pub use freight_draft::FreightDraft;
pub use property_editor::PropertyEditor;
