//! Property Editor State
//!
//! The properties table allows either one new row or one rename at a time.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PropertyEditor {
    #[default]
    Idle,
    Creating { name: String, kind: String },
    Editing { id: i64, name: String },
}

impl PropertyEditor {
    pub fn is_idle(&self) -> bool {
        matches!(self, PropertyEditor::Idle)
    }

    /// Open the new-property row unless a rename is in progress
    pub fn start_create(&mut self) {
        if matches!(self, PropertyEditor::Editing { .. }) {
            return;
        }
        *self = PropertyEditor::Creating { name: String::new(), kind: String::new() };
    }

    /// Begin renaming `id` unless the new-property row is open
    pub fn start_edit(&mut self, id: i64, current_name: &str) {
        if matches!(self, PropertyEditor::Creating { .. }) {
            return;
        }
        *self = PropertyEditor::Editing { id, name: current_name.to_string() };
    }

    pub fn editing_id(&self) -> Option<i64> {
        match self {
            PropertyEditor::Editing { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn set_name(&mut self, value: String) {
        match self {
            PropertyEditor::Creating { name, .. } | PropertyEditor::Editing { name, .. } => *name = value,
            PropertyEditor::Idle => {}
        }
    }

    pub fn set_kind(&mut self, value: String) {
        if let PropertyEditor::Creating { kind, .. } = self {
            *kind = value;
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PropertyEditor::Creating { name, .. } | PropertyEditor::Editing { name, .. } => name,
            PropertyEditor::Idle => "",
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            PropertyEditor::Creating { kind, .. } => kind,
            _ => "",
        }
    }

    pub fn reset(&mut self) {
        *self = PropertyEditor::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_blocked_while_editing() {
        let mut editor = PropertyEditor::default();
        editor.start_edit(3, "Peso");
        editor.start_create();
        assert_eq!(editor.editing_id(), Some(3));
        assert_eq!(editor.name(), "Peso");
    }

    #[test]
    fn test_edit_blocked_while_creating() {
        let mut editor = PropertyEditor::default();
        editor.start_create();
        editor.set_name("Destino".into());
        editor.set_kind("Texto".into());
        editor.start_edit(3, "Peso");
        assert_eq!(editor, PropertyEditor::Creating { name: "Destino".into(), kind: "Texto".into() });
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut editor = PropertyEditor::default();
        editor.start_edit(1, "Peso");
        editor.set_kind("ignored".into());
        assert_eq!(editor.kind(), "");
        editor.reset();
        assert!(editor.is_idle());
        assert_eq!(editor.name(), "");
    }
}
