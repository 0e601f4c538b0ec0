//! View state of one record explorer: sort, filters, query, paging,
//! selection and column visibility.

use super::column::ColumnDef;
use super::filter::FilterSet;
use super::pagination::Pagination;
use super::record::TableRecord;
use super::selection::{HeaderCheckState, Selection};
use super::sort::SortState;
use crate::shared::config::TableConfig;
use std::collections::BTreeSet;

/// One rendered page plus the counters the UI shows around it
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<T> {
    pub rows: Vec<T>,
    /// Rows matching every active predicate (all pages)
    pub total_matches: usize,
    /// Rows in the store before filtering
    pub total_records: usize,
    /// Clamped page index actually rendered
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
}

impl<T> TableView<T> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// "Page 1 of 3" (never "of 0")
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.page_count.max(1))
    }

    fn pagination(&self) -> Pagination {
        Pagination {
            page_index: self.page_index,
            page_size: self.page_size,
        }
    }

    pub fn can_previous(&self) -> bool {
        self.pagination().can_previous()
    }

    pub fn can_next(&self) -> bool {
        self.pagination().can_next(self.total_matches)
    }

    /// Last valid page index (0 when nothing matches)
    pub fn last_page(&self) -> usize {
        self.pagination().last_index(self.total_matches)
    }

    /// Some predicate hides part of the store
    pub fn is_narrowed(&self) -> bool {
        self.total_matches < self.total_records
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub sort: SortState,
    pub filters: FilterSet,
    pub query: String,
    pub pagination: Pagination,
    pub selection: Selection,
    pub hidden_columns: BTreeSet<String>,
    search_min_length: usize,
    default_page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self::from_config(&TableConfig::default())
    }
}

impl TableState {
    pub fn from_config(config: &TableConfig) -> Self {
        Self {
            sort: SortState::none(),
            filters: FilterSet::new(),
            query: String::new(),
            pagination: Pagination::new(config.default_page_size),
            selection: Selection::new(),
            hidden_columns: BTreeSet::new(),
            search_min_length: config.search_min_length,
            default_page_size: config.default_page_size,
        }
    }

    /// Initial sort applied on load and after `reset`
    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    /// Back to defaults, keeping the configured page size
    pub fn reset(&mut self) {
        self.filters.clear_all();
        self.query.clear();
        self.pagination = Pagination::new(self.default_page_size);
        self.selection.clear();
        self.hidden_columns.clear();
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.pagination.page_index = 0;
    }

    /// Query actually applied (blank when shorter than the minimum length)
    pub fn effective_query(&self) -> Option<String> {
        let q = self.query.trim();
        if q.is_empty() || q.chars().count() < self.search_min_length {
            None
        } else {
            Some(q.to_lowercase())
        }
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
    }

    pub fn toggle_filter_value(&mut self, field: &str, value: &str) {
        self.filters.toggle_value(field, value);
        self.pagination.page_index = 0;
    }

    pub fn set_contains_filter(&mut self, field: &str, text: &str) {
        self.filters.set_contains(field, text);
        self.pagination.page_index = 0;
    }

    /// Move the substring filter of `from` onto `to` (column picker changed)
    pub fn move_contains_filter(&mut self, from: &str, to: &str) {
        if from == to {
            return;
        }
        if let Some(text) = self.filters.contains_text(from).map(str::to_string) {
            self.filters.clear(from);
            self.set_contains_filter(to, &text);
        }
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
        self.query.clear();
        self.pagination.page_index = 0;
    }

    pub fn is_filtered(&self) -> bool {
        !self.filters.is_empty() || self.effective_query().is_some()
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size);
    }

    pub fn is_column_visible(&self, key: &str) -> bool {
        !self.hidden_columns.contains(key)
    }

    /// Hide/show a column; non-hideable columns stay visible
    pub fn toggle_column(&mut self, column: &ColumnDef) {
        if !column.hideable {
            return;
        }
        if !self.hidden_columns.remove(column.key) {
            self.hidden_columns.insert(column.key.to_string());
        }
    }

    pub fn visible_columns<T: TableRecord>(&self) -> Vec<ColumnDef> {
        T::COLUMNS
            .iter()
            .filter(|c| self.is_column_visible(c.key))
            .copied()
            .collect()
    }

    fn matches<T: TableRecord>(&self, record: &T, query: Option<&str>, fields: &[&str]) -> bool {
        if !self.filters.matches(record) {
            return false;
        }
        match query {
            Some(q) => record.matches_in_fields(q, fields),
            None => true,
        }
    }

    /// All rows matching the active predicates, sorted (every page)
    pub fn matching<T: TableRecord>(&self, records: &[T]) -> Vec<T> {
        let query = self.effective_query();
        let fields: Vec<&str> = T::COLUMNS
            .iter()
            .filter(|c| c.searchable && self.is_column_visible(c.key))
            .map(|c| c.key)
            .collect();

        let mut rows: Vec<T> = records
            .iter()
            .filter(|r| self.matches(*r, query.as_deref(), &fields))
            .cloned()
            .collect();
        self.sort.apply(&mut rows);
        rows
    }

    /// Filter, sort and slice the current page
    pub fn derive_view<T: TableRecord>(&self, records: &[T]) -> TableView<T> {
        let matching = self.matching(records);
        let total_matches = matching.len();
        let range = self.pagination.slice_range(total_matches);
        let page_index = self.pagination.page_index.min(self.pagination.last_index(total_matches));

        TableView {
            rows: matching[range].to_vec(),
            total_matches,
            total_records: records.len(),
            page_index,
            page_count: self.pagination.page_count(total_matches),
            page_size: self.pagination.page_size,
        }
    }

    /// Re-clamp the page index after the store or predicates changed
    pub fn clamp_to<T: TableRecord>(&mut self, records: &[T]) {
        let total = self.matching(records).len();
        self.pagination.clamp(total);
    }

    /// Drop selected ids that the active predicates hide
    pub fn retain_visible_selection<T: TableRecord>(&mut self, records: &[T]) {
        let matching = self.matching(records);
        self.selection.retain_existing(matching.iter().map(|r| r.row_id()));
    }

    pub fn select_page<T: TableRecord>(&mut self, page: &[T]) {
        self.selection.select_page(page.iter().map(|r| r.row_id()));
    }

    pub fn deselect_page<T: TableRecord>(&mut self, page: &[T]) {
        self.selection.deselect_page(page.iter().map(|r| r.row_id()));
    }

    pub fn header_state<T: TableRecord>(&self, page: &[T]) -> HeaderCheckState {
        self.selection.header_state(page.iter().map(|r| r.row_id()))
    }

    /// "X of Y row(s) selected" over the filtered set
    pub fn selection_summary<T: TableRecord>(&self, records: &[T]) -> (usize, usize) {
        let matching = self.matching(records);
        let selected = self.selection.count_within(matching.iter().map(|r| r.row_id()));
        (selected, matching.len())
    }
}

pub fn selection_label(selected: usize, total: usize) -> String {
    format!("{} of {} row(s) selected.", selected, total)
}
