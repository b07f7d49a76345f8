// file: src/state/view_state.rs
// description: filter, sort and page selection with its transitions
// reference: dashboard interaction model

use crate::table::{FilterCriteria, PageSize, PageSpec, SortColumn, SortDirection, SortSpec};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Everything the user has selected on the dashboard. `current_page` may be
/// stale after the data shrinks; the pipeline clamps it when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredViewState")]
pub struct ViewState {
    pub current_page: usize,
    pub rows_per_page: PageSize,
    pub filter_name: String,
    pub filter_email: String,
    pub filter_phone: String,
    pub sort_column: Option<SortColumn>,
    pub sort_direction: Option<SortDirection>,
}

/// Wire shape of a stored entry: any JSON object. Each field that is
/// missing, null, zero, or of the wrong type falls back on its own; only a
/// non-object entry fails.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct StoredViewState(Map<String, Value>);

impl StoredViewState {
    fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn positive(&self, key: &str) -> Option<usize> {
        self.field(key)
            .and_then(Value::as_u64)
            .filter(|&n| n > 0)
            .and_then(|n| usize::try_from(n).ok())
    }

    fn text(&self, key: &str) -> String {
        self.field(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_default()
    }
}

impl From<StoredViewState> for ViewState {
    fn from(stored: StoredViewState) -> Self {
        Self {
            current_page: stored.positive("currentPage").unwrap_or(1),
            rows_per_page: stored
                .positive("rowsPerPage")
                .and_then(|n| PageSize::try_from(n).ok())
                .unwrap_or_default(),
            filter_name: stored.text("filterName"),
            filter_email: stored.text("filterEmail"),
            filter_phone: stored.text("filterPhone"),
            sort_column: stored
                .field("sortColumn")
                .and_then(Value::as_str)
                .and_then(|c| c.parse().ok()),
            sort_direction: stored
                .field("sortDirection")
                .and_then(|d| SortDirection::deserialize(d).ok()),
        }
    }
}

/// One user interaction with the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    FilterName(String),
    FilterEmail(String),
    FilterPhone(String),
    RowsPerPage(PageSize),
    ToggleSort(SortColumn),
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
    GoToPage(usize),
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_page: 1,
            rows_per_page: PageSize::DEFAULT,
            filter_name: String::new(),
            filter_email: String::new(),
            filter_phone: String::new(),
            sort_column: None,
            sort_direction: None,
        }
    }
}

impl ViewState {
    pub fn filter(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.filter_name.clone(),
            self.filter_email.clone(),
            self.filter_phone.clone(),
        )
    }

    pub fn sort(&self) -> SortSpec {
        SortSpec {
            column: self.sort_column,
            direction: self.sort_direction,
        }
    }

    pub fn page(&self) -> PageSpec {
        PageSpec::new(self.current_page, self.rows_per_page)
    }

    pub fn set_filter_name(&mut self, value: impl Into<String>) {
        self.current_page = 1;
        self.filter_name = value.into();
    }

    pub fn set_filter_email(&mut self, value: impl Into<String>) {
        self.current_page = 1;
        self.filter_email = value.into();
    }

    pub fn set_filter_phone(&mut self, value: impl Into<String>) {
        self.current_page = 1;
        self.filter_phone = value.into();
    }

    pub fn set_rows_per_page(&mut self, size: PageSize) {
        self.current_page = 1;
        self.rows_per_page = size;
    }

    pub fn toggle_sort(&mut self, column: SortColumn) {
        let next = self.sort().toggle(column);
        self.sort_column = next.column;
        self.sort_direction = next.direction;
    }

    pub fn first_page(&mut self) {
        self.current_page = 1;
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.current_page = self.current_page.saturating_add(1).min(total_pages.max(1));
    }

    pub fn last_page(&mut self, total_pages: usize) {
        self.current_page = total_pages.max(1);
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// `total_pages` is the page count of the view the action was taken on.
    pub fn apply(&mut self, action: ViewAction, total_pages: usize) {
        match action {
            ViewAction::FilterName(v) => self.set_filter_name(v),
            ViewAction::FilterEmail(v) => self.set_filter_email(v),
            ViewAction::FilterPhone(v) => self.set_filter_phone(v),
            ViewAction::RowsPerPage(size) => self.set_rows_per_page(size),
            ViewAction::ToggleSort(column) => self.toggle_sort(column),
            ViewAction::FirstPage => self.first_page(),
            ViewAction::PreviousPage => self.previous_page(),
            ViewAction::NextPage => self.next_page(total_pages),
            ViewAction::LastPage => self.last_page(total_pages),
            ViewAction::GoToPage(page) => self.go_to_page(page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let mut state = ViewState::default();
        state.toggle_sort(SortColumn::PostId);
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "currentPage": 1,
                "rowsPerPage": 10,
                "filterName": "",
                "filterEmail": "",
                "filterPhone": "",
                "sortColumn": "postId",
                "sortDirection": "asc"
            })
        );
    }

    #[test]
    fn test_stored_entry_round_trip() {
        let mut state = ViewState::default();
        state.set_filter_email("biz");
        state.set_rows_per_page(PageSize::try_from(50).unwrap());
        state.go_to_page(4);
        state.toggle_sort(SortColumn::Name);
        state.toggle_sort(SortColumn::Name);

        let json = serde_json::to_string(&state).unwrap();
        let restored: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_partial_entry_falls_back_per_field() {
        let restored: ViewState =
            serde_json::from_str(r#"{"currentPage":0,"rowsPerPage":25,"filterName":"jo","sortColumn":"website","sortDirection":null}"#)
                .unwrap();

        assert_eq!(restored.current_page, 1);
        assert_eq!(restored.rows_per_page, PageSize::DEFAULT);
        assert_eq!(restored.filter_name, "jo");
        assert_eq!(restored.sort_column, None);
        assert_eq!(restored.sort(), SortSpec::unsorted());
    }

    #[test]
    fn test_wrong_field_types_fall_back_per_field() {
        let restored: ViewState = serde_json::from_str(
            r#"{"currentPage":-3,"rowsPerPage":"fifty","filterName":"jo","filterEmail":42,"sortColumn":"email","sortDirection":"sideways"}"#,
        )
        .unwrap();

        assert_eq!(restored.current_page, 1);
        assert_eq!(restored.rows_per_page, PageSize::DEFAULT);
        assert_eq!(restored.filter_name, "jo");
        assert_eq!(restored.filter_email, "");
        assert_eq!(restored.sort_column, Some(SortColumn::Email));
        assert_eq!(restored.sort_direction, None);

        let fractional: ViewState =
            serde_json::from_str(r#"{"currentPage":2.5,"filterPhone":"555"}"#).unwrap();
        assert_eq!(fractional.current_page, 1);
        assert_eq!(fractional.filter_phone, "555");
    }

    #[test]
    fn test_non_object_entries_are_rejected() {
        assert!(serde_json::from_str::<ViewState>(r#""page two""#).is_err());
        assert!(serde_json::from_str::<ViewState>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<ViewState>("null").is_err());
    }

    #[test]
    fn test_huge_stored_page_saturates_on_next() {
        let mut state: ViewState =
            serde_json::from_str(r#"{"currentPage":18446744073709551615}"#).unwrap();
        assert_eq!(state.current_page, usize::MAX);

        state.apply(ViewAction::NextPage, 50);
        assert_eq!(state.current_page, 50);

        state.apply(ViewAction::GoToPage(usize::MAX), 50);
        state.apply(ViewAction::NextPage, 50);
        assert_eq!(state.current_page, 50);
    }

    #[test]
    fn test_filter_and_rows_changes_reset_page() {
        let mut state = ViewState::default();

        state.go_to_page(7);
        state.set_filter_name("john");
        assert_eq!(state.current_page, 1);

        state.go_to_page(7);
        state.set_filter_phone("555");
        assert_eq!(state.current_page, 1);

        state.go_to_page(7);
        state.set_rows_per_page(PageSize::try_from(100).unwrap());
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_sort_toggle_keeps_page() {
        let mut state = ViewState::default();
        state.go_to_page(3);
        state.toggle_sort(SortColumn::Email);
        assert_eq!(state.current_page, 3);
        assert_eq!(state.sort(), SortSpec::ascending(SortColumn::Email));
    }

    #[test]
    fn test_navigation() {
        let mut state = ViewState::default();

        state.apply(ViewAction::PreviousPage, 5);
        assert_eq!(state.current_page, 1);

        state.apply(ViewAction::NextPage, 5);
        state.apply(ViewAction::NextPage, 5);
        assert_eq!(state.current_page, 3);

        state.apply(ViewAction::LastPage, 5);
        assert_eq!(state.current_page, 5);

        state.apply(ViewAction::NextPage, 5);
        assert_eq!(state.current_page, 5);

        state.apply(ViewAction::GoToPage(0), 5);
        assert_eq!(state.current_page, 1);

        state.apply(ViewAction::GoToPage(4), 5);
        state.apply(ViewAction::FirstPage, 5);
        assert_eq!(state.current_page, 1);
    }
}
