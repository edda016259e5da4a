//! Состояние списка: фильтры, сортировка, страница и фаза загрузки.
//!
//! Invariants kept here rather than in the views:
//! - any change of filters, search, sort key/direction or page size puts the
//!   list back on page 1;
//! - every load is tagged with a generation, and only the latest generation
//!   may complete it, so a late response for a superseded request is dropped;
//! - a failed refresh keeps the previously loaded data visible.

use super::filter::{FilterSet, FilterValue};
use super::pagination::{paginate, Page, DEFAULT_PAGE_SIZE};
use super::sort::{sort_records, SortSpec};
use super::filter_records;
use crate::domain::common::ListRecord;

/// Монотонный счётчик запросов
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    /// Starts a new request and returns its generation.
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn current(&self) -> u64 {
        self.0
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0 == generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Что должен сделать список после изменения параметров
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommand {
    /// Recompute the visible page from the collection already in memory.
    Rederive,
    /// A parameter that the server evaluates changed: fetch again.
    Refetch,
    /// Nothing changed.
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub filters: FilterSet,
    pub sort: SortSpec,
    pub page: usize,
    pub page_size: usize,
    phase: LoadPhase,
    generation: RequestGeneration,
    error: Option<String>,
    has_data: bool,
    server_fields: Vec<&'static str>,
}

impl ListState {
    pub fn new(sort: SortSpec) -> Self {
        Self {
            filters: FilterSet::new(),
            sort,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            phase: LoadPhase::Idle,
            generation: RequestGeneration::default(),
            error: None,
            has_data: false,
            server_fields: Vec::new(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Filter fields that are sent to the server as query parameters;
    /// changing them requires a refetch instead of a local re-derive.
    pub fn with_server_fields(mut self, fields: &[&'static str]) -> Self {
        self.server_fields = fields.to_vec();
        self
    }

    pub fn with_filter(mut self, field: &str, value: FilterValue) -> Self {
        self.filters.set(field, value);
        self
    }

    // ------------------------------------------------------------------
    // Parameter changes
    // ------------------------------------------------------------------

    pub fn set_search(&mut self, search: &str) -> ListCommand {
        if self.filters.search() == search {
            return ListCommand::None;
        }
        self.filters.set_search(search);
        self.page = 1;
        ListCommand::Rederive
    }

    pub fn set_filter(&mut self, field: &str, value: FilterValue) -> ListCommand {
        let before = self.filters.get(field).cloned();
        self.filters.set(field, value);
        if self.filters.get(field).cloned() == before {
            return ListCommand::None;
        }
        self.page = 1;
        if self.server_fields.contains(&field) {
            ListCommand::Refetch
        } else {
            ListCommand::Rederive
        }
    }

    pub fn clear_filters(&mut self) -> ListCommand {
        if self.filters.is_empty() {
            return ListCommand::None;
        }
        let touched_server = self
            .server_fields
            .iter()
            .any(|field| self.filters.get(field).is_some());
        self.filters.clear();
        self.page = 1;
        if touched_server {
            ListCommand::Refetch
        } else {
            ListCommand::Rederive
        }
    }

    pub fn toggle_sort(&mut self, field: &str) -> ListCommand {
        self.sort.toggle(field);
        self.page = 1;
        ListCommand::Rederive
    }

    pub fn go_to_page(&mut self, page: usize) -> ListCommand {
        let page = page.max(1);
        if page == self.page {
            return ListCommand::None;
        }
        self.page = page;
        ListCommand::Rederive
    }

    pub fn set_page_size(&mut self, page_size: usize) -> ListCommand {
        let page_size = page_size.max(1);
        if page_size == self.page_size {
            return ListCommand::None;
        }
        self.page_size = page_size;
        self.page = 1;
        ListCommand::Rederive
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Enters `Loading` and returns the generation the response must carry.
    pub fn begin_load(&mut self) -> u64 {
        self.phase = LoadPhase::Loading;
        self.generation.next()
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.is_current(generation)
    }

    /// Returns `false` (and changes nothing) for a stale generation.
    pub fn finish_load(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.phase = LoadPhase::Loaded;
        self.error = None;
        self.has_data = true;
        true
    }

    /// Records a failure; previously loaded data stays visible.
    pub fn fail_load(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.phase = LoadPhase::Error;
        self.error = Some(message.into());
        true
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_data(&self) -> bool {
        self.has_data
    }

    // ------------------------------------------------------------------
    // Derivation
    // ------------------------------------------------------------------

    /// filter → sort → paginate over the in-memory collection.
    pub fn derive<T: ListRecord + Clone>(&self, records: &[T]) -> Page<T> {
        let mut visible = filter_records(records, &self.filters);
        sort_records(&mut visible, &self.sort);
        paginate(&visible, self.page, self.page_size)
    }

    /// Same as [`ListState::derive`], also pulling `page` back onto the last
    /// page when the collection shrank under it (after a refresh or delete).
    pub fn derive_clamped<T: ListRecord + Clone>(&mut self, records: &[T]) -> Page<T> {
        let page = self.derive(records);
        if page.items.is_empty() && self.page > page.total_pages {
            self.page = page.total_pages;
            return self.derive(records);
        }
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::test_support::Probe;

    fn state() -> ListState {
        let mut state = ListState::new(SortSpec::ascending("title")).with_page_size(10);
        state.page = 3;
        state
    }

    #[test]
    fn test_every_parameter_change_resets_page() {
        let mut s = state();
        assert_eq!(s.set_search("abc"), ListCommand::Rederive);
        assert_eq!(s.page, 1);

        let mut s = state();
        s.set_filter("status", FilterValue::is("open"));
        assert_eq!(s.page, 1);

        let mut s = state();
        s.toggle_sort("priority");
        assert_eq!(s.page, 1);

        let mut s = state();
        s.set_page_size(50);
        assert_eq!(s.page, 1);
    }

    #[test]
    fn test_unchanged_parameters_keep_page() {
        let mut s = state();
        assert_eq!(s.set_page_size(10), ListCommand::None);
        assert_eq!(s.set_filter("status", FilterValue::is("")), ListCommand::None);
        assert_eq!(s.page, 3);
    }

    #[test]
    fn test_server_fields_request_refetch() {
        let mut s = ListState::new(SortSpec::descending("date")).with_server_fields(&["date"]);
        let range = FilterValue::Between {
            from: chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
            to: None,
        };
        assert_eq!(s.set_filter("date", range), ListCommand::Refetch);
        assert_eq!(s.set_filter("notes", FilterValue::is("x")), ListCommand::Rederive);
        assert_eq!(s.clear_filters(), ListCommand::Refetch);
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let mut s = state();
        let first = s.begin_load();
        let second = s.begin_load();
        assert!(!s.finish_load(first));
        assert!(s.is_loading());
        assert!(s.finish_load(second));
        assert_eq!(s.phase(), LoadPhase::Loaded);
        assert!(!s.fail_load(first, "late failure"));
        assert_eq!(s.error(), None);
    }

    #[test]
    fn test_failed_refresh_keeps_data_flag() {
        let mut s = state();
        let generation = s.begin_load();
        s.finish_load(generation);
        let generation = s.begin_load();
        assert!(s.fail_load(generation, "offline"));
        assert_eq!(s.phase(), LoadPhase::Error);
        assert!(s.has_data());
        assert_eq!(s.error(), Some("offline"));
    }

    #[test]
    fn test_derive_clamped_pulls_back_to_last_page() {
        let records: Vec<Probe> = (0..12)
            .map(|i| Probe::new(&i.to_string(), &format!("t{:02}", i), "open", 1))
            .collect();
        let mut s = state();
        let page = s.derive_clamped(&records);
        assert_eq!(s.page, 2);
        assert_eq!(page.items.len(), 2);
    }
}
