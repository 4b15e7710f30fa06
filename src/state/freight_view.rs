//! Freight View State
//!
//! `List` / `View` / `Edit` modes of the freight page, plus the search and
//! pagination of the selected freight's values.

use crate::api::ValuesQuery;
use crate::models::{Freight, ValuePropertyFreight};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    View,
    Edit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FreightViewState {
    pub mode: ViewMode,
    pub selected: Option<Freight>,
    /// Draft name while the name is being edited
    pub name_edit: Option<String>,
    /// `(value id, draft)` of the single row being edited
    pub value_edit: Option<(i64, String)>,
    /// Search box contents; only committed on submit
    pub search_input: String,
    pub query: ValuesQuery,
    pub values: Vec<ValuePropertyFreight>,
    pub has_next_page: bool,
}

impl Default for FreightViewState {
    fn default() -> Self {
        Self {
            mode: ViewMode::List,
            selected: None,
            name_edit: None,
            value_edit: None,
            search_input: String::new(),
            query: ValuesQuery::default(),
            values: Vec::new(),
            has_next_page: false,
        }
    }
}

impl FreightViewState {
    pub fn selected_id(&self) -> Option<i64> {
        self.selected.as_ref().map(|f| f.id)
    }

    /// Open `freight` in `mode` from the list; returns the first values query.
    ///
    /// The page size chosen earlier is kept.
    pub fn open(&mut self, freight: Freight, mode: ViewMode) -> (i64, ValuesQuery) {
        let id = freight.id;
        self.mode = mode;
        self.selected = Some(freight);
        self.name_edit = None;
        self.value_edit = None;
        self.search_input.clear();
        self.query.page = 0;
        self.query.search.clear();
        self.values.clear();
        self.has_next_page = false;
        (id, self.query.clone())
    }

    pub fn back(&mut self) {
        self.mode = ViewMode::List;
        self.selected = None;
        self.name_edit = None;
        self.value_edit = None;
        self.values.clear();
        self.has_next_page = false;
    }

    // ========================
    // Inline Editing
    // ========================

    pub fn begin_name_edit(&mut self) {
        if self.mode != ViewMode::Edit {
            return;
        }
        self.name_edit = self.selected.as_ref().map(|f| f.name.clone());
    }

    pub fn cancel_name_edit(&mut self) {
        self.name_edit = None;
    }

    /// Apply a saved name to the selection and leave name editing
    pub fn name_saved(&mut self, name: &str) {
        if let Some(freight) = self.selected.as_mut() {
            freight.name = name.to_string();
        }
        self.name_edit = None;
    }

    /// Start editing one row; any other row being edited is abandoned
    pub fn begin_value_edit(&mut self, value: &ValuePropertyFreight) {
        if self.mode != ViewMode::Edit {
            return;
        }
        self.value_edit = Some((value.id, value.value.clone()));
    }

    pub fn cancel_value_edit(&mut self) {
        self.value_edit = None;
    }

    pub fn is_editing_value(&self, value_id: i64) -> bool {
        matches!(self.value_edit, Some((id, _)) if id == value_id)
    }

    /// Leave row editing after a successful save; returns the reload query
    pub fn value_saved(&mut self) -> Option<(i64, ValuesQuery)> {
        self.value_edit = None;
        self.reload()
    }

    // ========================
    // Search & Pagination
    // ========================

    /// Current query for the selected freight, unchanged
    pub fn reload(&self) -> Option<(i64, ValuesQuery)> {
        self.selected_id().map(|id| (id, self.query.clone()))
    }

    /// Commit the typed search term and go back to the first page
    pub fn submit_search(&mut self) -> Option<(i64, ValuesQuery)> {
        let id = self.selected_id()?;
        self.query.search = self.search_input.clone();
        self.query.page = 0;
        Some((id, self.query.clone()))
    }

    pub fn can_go_previous(&self) -> bool {
        self.query.page > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.has_next_page
    }

    pub fn next_page(&mut self) -> Option<(i64, ValuesQuery)> {
        if !self.can_go_next() {
            return None;
        }
        let id = self.selected_id()?;
        self.query.page += 1;
        Some((id, self.query.clone()))
    }

    pub fn previous_page(&mut self) -> Option<(i64, ValuesQuery)> {
        if !self.can_go_previous() {
            return None;
        }
        let id = self.selected_id()?;
        self.query.page -= 1;
        Some((id, self.query.clone()))
    }

    pub fn set_page_size(&mut self, size: u32) -> Option<(i64, ValuesQuery)> {
        if size == 0 {
            return None;
        }
        self.query.size = size;
        self.query.page = 0;
        self.reload()
    }

    /// Store a fetched page. A full page means there may be another one.
    pub fn apply_page(&mut self, rows: Vec<ValuePropertyFreight>) {
        self.has_next_page = rows.len() == self.query.size as usize;
        self.values = rows;
    }

    pub fn page_failed(&mut self) {
        self.values.clear();
        self.has_next_page = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freight(id: i64) -> Freight {
        Freight {
            id,
            customer_id: 1,
            name: "Frete Nacional".into(),
            created_at: "2025-01-15T10:30:00".into(),
            properties: vec![],
        }
    }

    fn rows(n: usize) -> Vec<ValuePropertyFreight> {
        (0..n as i64)
            .map(|i| ValuePropertyFreight {
                id: i + 1,
                property_id: i + 10,
                property_name: format!("Prop {}", i),
                kind: "Texto".into(),
                value: format!("v{}", i),
            })
            .collect()
    }

    fn opened(mode: ViewMode) -> FreightViewState {
        let mut state = FreightViewState::default();
        state.open(freight(7), mode);
        state
    }

    #[test]
    fn test_open_starts_at_first_page_without_search() {
        let mut state = FreightViewState::default();
        state.search_input = "old".into();
        state.query = ValuesQuery { page: 3, size: 20, search: "old".into() };

        let (id, query) = state.open(freight(7), ViewMode::View);
        assert_eq!(id, 7);
        assert_eq!(query, ValuesQuery { page: 0, size: 20, search: String::new() });
        assert_eq!(state.mode, ViewMode::View);
        assert!(state.search_input.is_empty());
    }

    #[test]
    fn test_back_clears_selection_and_edits() {
        let mut state = opened(ViewMode::Edit);
        state.begin_name_edit();
        state.begin_value_edit(&rows(1)[0]);

        state.back();
        assert_eq!(state.mode, ViewMode::List);
        assert!(state.selected.is_none());
        assert!(state.name_edit.is_none());
        assert!(state.value_edit.is_none());
    }

    #[test]
    fn test_sub_toggles_do_not_change_mode() {
        let mut state = opened(ViewMode::Edit);
        state.begin_name_edit();
        assert_eq!(state.name_edit.as_deref(), Some("Frete Nacional"));
        let page = rows(2);
        state.begin_value_edit(&page[0]);
        state.begin_value_edit(&page[1]);
        assert!(!state.is_editing_value(page[0].id));
        assert!(state.is_editing_value(page[1].id));
        assert_eq!(state.mode, ViewMode::Edit);
    }

    #[test]
    fn test_view_mode_is_read_only() {
        let mut state = opened(ViewMode::View);
        state.begin_name_edit();
        state.begin_value_edit(&rows(1)[0]);
        assert!(state.name_edit.is_none());
        assert!(state.value_edit.is_none());
    }

    #[test]
    fn test_search_committed_only_on_submit() {
        let mut state = opened(ViewMode::View);
        state.apply_page(rows(10));
        state.next_page().unwrap();

        state.search_input = "peso".into();
        assert_eq!(state.query.search, "");

        let (_, query) = state.submit_search().unwrap();
        assert_eq!(query, ValuesQuery { page: 0, size: 10, search: "peso".into() });
    }

    #[test]
    fn test_search_term_sent_as_typed() {
        let mut state = opened(ViewMode::View);
        state.search_input = " São Paulo ".into();
        let (_, query) = state.submit_search().unwrap();
        assert_eq!(query.search, " São Paulo ");
    }

    #[test]
    fn test_next_page_follows_page_fullness() {
        let mut state = opened(ViewMode::View);
        state.apply_page(rows(9));
        assert!(!state.can_go_next());
        assert!(state.next_page().is_none());

        state.apply_page(rows(10));
        assert!(state.can_go_next());
        assert_eq!(state.next_page().unwrap().1.page, 1);
    }

    #[test]
    fn test_previous_disabled_on_first_page() {
        let mut state = opened(ViewMode::View);
        assert!(!state.can_go_previous());
        assert!(state.previous_page().is_none());

        state.apply_page(rows(10));
        state.next_page();
        assert_eq!(state.previous_page().unwrap().1.page, 0);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = opened(ViewMode::View);
        state.search_input = "x".into();
        state.submit_search();
        state.apply_page(rows(10));
        state.next_page();

        let (_, query) = state.set_page_size(50).unwrap();
        assert_eq!(query, ValuesQuery { page: 0, size: 50, search: "x".into() });
    }

    #[test]
    fn test_value_saved_reloads_same_query() {
        let mut state = opened(ViewMode::Edit);
        state.set_page_size(5);
        state.search_input = "dest".into();
        state.submit_search();
        state.apply_page(rows(5));
        state.next_page();
        let before = state.query.clone();

        state.begin_value_edit(&rows(1)[0]);
        let (id, query) = state.value_saved().unwrap();
        assert_eq!(id, 7);
        assert_eq!(query, before);
        assert!(state.value_edit.is_none());
    }

    #[test]
    fn test_name_saved_updates_selection() {
        let mut state = opened(ViewMode::Edit);
        state.begin_name_edit();
        state.name_saved("Frete Expresso");
        assert_eq!(state.selected.as_ref().unwrap().name, "Frete Expresso");
        assert!(state.name_edit.is_none());
    }

    #[test]
    fn test_failed_page_disables_next() {
        let mut state = opened(ViewMode::View);
        state.apply_page(rows(10));
        state.page_failed();
        assert!(state.values.is_empty());
        assert!(!state.can_go_next());
    }
}
