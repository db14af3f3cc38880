//! Headless table state

use std::ops::Range;

use crate::config::TableConfig;
use crate::error::RequestError;
use crate::model::Column;
use crate::model::Record;
use crate::query::Direction;
use crate::query::Filter;
use crate::query::FilterKind;
use crate::query::OrderBy;
use crate::query::PageRequest;

/// Pagination, filter and sort state of one table.
///
/// Pagination is manual: the page count is whatever the last delivered page
/// reported, set through [`set_page_count`](Self::set_page_count).
/// Pagination methods return the new [`PageRequest`] when the page index or
/// size actually changed, and `None` when nothing needs fetching.
///
/// Filters and sorting only ever touch the rows of the current page.
///
/// # Example
///
/// ```
/// use datatable_lib::TableConfig;
/// use datatable_lib::model::Column;
/// use datatable_lib::query::Direction;
/// use datatable_lib::table::TableState;
///
/// let mut table = TableState::new(&TableConfig::default());
/// table.set_page_count(1000);
///
/// let request = table.next_page().unwrap();
/// assert_eq!(request.page_index, 1);
///
/// table.toggle_sort(Column::Age);
/// assert_eq!(table.sort_direction(Column::Age), Some(Direction::Asc));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    page_index: usize,
    page_size: usize,
    page_count: usize,
    page_size_options: Vec<usize>,
    /// At most one filter per column, kept in column order.
    filters: Vec<Filter>,
    global_filter: Option<String>,
    sort: Option<OrderBy>,
}

impl TableState {
    /// Creates the state for a freshly mounted table.
    pub fn new(config: &TableConfig) -> Self {
        Self {
            page_index: 0,
            page_size: config.page_size.max(1),
            page_count: 0,
            page_size_options: config.page_size_options.clone(),
            filters: Vec::new(),
            global_filter: None,
            sort: None,
        }
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Page count reported by the last delivered page.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Sets the page count reported by the data source.
    pub fn set_page_count(&mut self, page_count: usize) {
        self.page_count = page_count;
    }

    /// Page sizes offered to the user.
    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    /// Indices of every page, for "page X of Y" style controls.
    pub fn page_options(&self) -> Range<usize> {
        0..self.page_count
    }

    /// Returns the request for the current page.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page_index, self.page_size)
    }

    pub fn can_next_page(&self) -> bool {
        self.page_index + 1 < self.page_count
    }

    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    /// Moves to the next page, if there is one.
    pub fn next_page(&mut self) -> Option<PageRequest> {
        if !self.can_next_page() {
            return None;
        }
        self.page_index += 1;
        Some(self.page_request())
    }

    /// Moves to the previous page, if there is one.
    pub fn previous_page(&mut self) -> Option<PageRequest> {
        if !self.can_previous_page() {
            return None;
        }
        self.page_index -= 1;
        Some(self.page_request())
    }

    /// Jumps to a page, clamped to the known page range.
    pub fn goto_page(&mut self, page_index: usize) -> Option<PageRequest> {
        let page_index = page_index.min(self.page_count.saturating_sub(1));
        if page_index == self.page_index {
            return None;
        }
        self.page_index = page_index;
        Some(self.page_request())
    }

    /// Changes the page size, keeping the current top row on screen.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<Option<PageRequest>, RequestError> {
        if page_size == 0 {
            return Err(RequestError::ZeroPageSize);
        }
        if page_size == self.page_size {
            return Ok(None);
        }
        let top_row = self.page_size.saturating_mul(self.page_index);
        self.page_index = top_row / page_size;
        self.page_size = page_size;
        Ok(Some(self.page_request()))
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Active column filters, in column order.
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Returns the filter on a column, if any.
    pub fn filter(&self, column: Column) -> Option<&Filter> {
        self.filters.iter().find(|f| f.column() == column)
    }

    /// Sets the filter of a column from raw user input.
    ///
    /// Input that [`Filter::new`] rejects removes the column's filter.
    pub fn set_filter(&mut self, column: Column, kind: FilterKind, value: &str) {
        self.filters.retain(|f| f.column() != column);
        if let Some(filter) = Filter::new(column, kind, value) {
            let at = self
                .filters
                .iter()
                .position(|f| f.column() > column)
                .unwrap_or(self.filters.len());
            self.filters.insert(at, filter);
        }
    }

    /// Sets a column filter using the column's default filter kind.
    pub fn set_column_filter(&mut self, column: Column, value: &str) {
        self.set_filter(column, column.default_filter(), value);
    }

    /// Sets the filter matched against every column. Empty input clears it.
    pub fn set_global_filter(&mut self, value: &str) {
        let value = value.trim();
        self.global_filter = (!value.is_empty()).then(|| value.to_string());
    }

    pub fn global_filter(&self) -> Option<&str> {
        self.global_filter.as_deref()
    }

    /// Removes every column filter and the global filter.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.global_filter = None;
    }

    /// Number of rows a column's filter gets to see: the page after the
    /// filters of every earlier column.
    pub fn pre_filtered_count(&self, column: Column, rows: &[Record]) -> usize {
        self.filters
            .iter()
            .take_while(|f| f.column() < column)
            .fold(rows.iter().collect::<Vec<_>>(), |rows, f| f.apply(rows))
            .len()
    }

    /// Placeholder shown in a column's empty filter box.
    pub fn filter_placeholder(&self, column: Column, rows: &[Record]) -> String {
        format!("Search {} records...", self.pre_filtered_count(column, rows))
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    pub fn sort(&self) -> Option<&OrderBy> {
        self.sort.as_ref()
    }

    /// Direction a column is sorted in, if it is sorted.
    pub fn sort_direction(&self, column: Column) -> Option<Direction> {
        self.sort.as_ref().and_then(|s| s.direction_of(column))
    }

    /// Cycles a column through ascending, descending and unsorted.
    ///
    /// Sorting a different column replaces the current sort.
    pub fn toggle_sort(&mut self, column: Column) {
        self.sort = match self.sort_direction(column) {
            None => Some(OrderBy::asc(column)),
            Some(Direction::Asc) => Some(OrderBy::desc(column)),
            Some(Direction::Desc) => None,
        };
    }

    // =========================================================================
    // Rows
    // =========================================================================

    /// Returns the rows to display out of a delivered page.
    ///
    /// Column filters run first in column order, then the global filter,
    /// then sorting.
    pub fn visible_rows<'a>(&self, rows: &'a [Record]) -> Vec<&'a Record> {
        let mut visible = self
            .filters
            .iter()
            .fold(rows.iter().collect::<Vec<_>>(), |rows, f| f.apply(rows));

        if let Some(needle) = &self.global_filter {
            let needle = needle.to_lowercase();
            visible.retain(|record| {
                Column::ALL.iter().any(|c| {
                    record
                        .value(*c)
                        .to_text()
                        .to_lowercase()
                        .contains(&needle)
                })
            });
        }

        if let Some(sort) = &self.sort {
            sort.sort(&mut visible);
        }

        visible
    }

    // =========================================================================
    // Footer
    // =========================================================================

    /// Status line under the rows.
    pub fn summary(&self, loading: bool, visible: usize) -> String {
        if loading {
            "Loading...".to_string()
        } else {
            format!(
                "Showing {} of {} results",
                visible,
                self.page_count.saturating_mul(self.page_size)
            )
        }
    }

    /// "Page X of Y" label.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page_index + 1, self.page_options().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    fn state() -> TableState {
        let mut state = TableState::new(&TableConfig::default());
        state.set_page_count(1000);
        state
    }

    fn rows() -> Vec<Record> {
        vec![
            Record::new("Cora", "Holt").with_age(22).with_status(Status::Single),
            Record::new("Arlo", "Sato").with_age(29).with_status(Status::Complicated),
            Record::new("Beatrix", "Holt").with_age(17).with_status(Status::Relationship),
        ]
    }

    fn names(rows: &[&Record]) -> Vec<String> {
        rows.iter().map(|r| r.first_name().to_string()).collect()
    }

    #[test]
    fn test_navigation_bounds() {
        let mut table = state();
        assert!(!table.can_previous_page());
        assert_eq!(table.previous_page(), None);

        assert_eq!(table.goto_page(999), Some(PageRequest::new(999, 10)));
        assert!(!table.can_next_page());
        assert_eq!(table.next_page(), None);
        assert_eq!(table.previous_page(), Some(PageRequest::new(998, 10)));
    }

    #[test]
    fn test_no_navigation_before_page_count_known() {
        let mut table = TableState::new(&TableConfig::default());
        assert_eq!(table.next_page(), None);
        assert_eq!(table.goto_page(5), None);
        assert_eq!(table.page_label(), "Page 1 of 0");
    }

    #[test]
    fn test_goto_clamps() {
        let mut table = state();
        assert_eq!(table.goto_page(5000), Some(PageRequest::new(999, 10)));
        assert_eq!(table.goto_page(999), None);
    }

    #[test]
    fn test_page_size_keeps_top_row() {
        let mut table = state();
        table.goto_page(7);

        // Top row 70 stays on screen: 70 / 30 = page 2
        assert_eq!(table.set_page_size(30), Ok(Some(PageRequest::new(2, 30))));
        assert_eq!(table.set_page_size(30), Ok(None));
        assert_eq!(table.set_page_size(0), Err(RequestError::ZeroPageSize));
    }

    #[test]
    fn test_sort_toggle_cycle() {
        let mut table = state();
        table.toggle_sort(Column::Age);
        assert_eq!(table.sort_direction(Column::Age), Some(Direction::Asc));
        table.toggle_sort(Column::Age);
        assert_eq!(table.sort_direction(Column::Age), Some(Direction::Desc));
        table.toggle_sort(Column::Age);
        assert_eq!(table.sort(), None);

        table.toggle_sort(Column::Age);
        table.toggle_sort(Column::LastName);
        assert_eq!(table.sort_direction(Column::Age), None);
        assert_eq!(table.sort_direction(Column::LastName), Some(Direction::Asc));
    }

    #[test]
    fn test_visible_rows_filter_then_sort() {
        let mut table = state();
        let data = rows();

        table.set_column_filter(Column::LastName, "Holt");
        table.toggle_sort(Column::Age);
        assert_eq!(names(&table.visible_rows(&data)), vec!["Beatrix", "Cora"]);

        table.set_column_filter(Column::LastName, "");
        assert!(table.filters().is_empty());
        assert_eq!(names(&table.visible_rows(&data)), vec!["Beatrix", "Cora", "Arlo"]);
    }

    #[test]
    fn test_status_filter_includes() {
        let mut table = state();
        let data = rows();
        table.set_column_filter(Column::Status, "compl");
        assert_eq!(names(&table.visible_rows(&data)), vec!["Arlo"]);
    }

    #[test]
    fn test_global_filter() {
        let mut table = state();
        let data = rows();
        table.set_global_filter("sato");
        assert_eq!(names(&table.visible_rows(&data)), vec!["Arlo"]);

        table.set_global_filter("  ");
        assert_eq!(table.global_filter(), None);
        assert_eq!(table.visible_rows(&data).len(), 3);
    }

    #[test]
    fn test_filters_kept_in_column_order() {
        let mut table = state();
        table.set_filter(Column::Age, FilterKind::GreaterThan, "18");
        table.set_filter(Column::FirstName, FilterKind::Text, "c");
        let columns: Vec<Column> = table.filters().iter().map(|f| f.column()).collect();
        assert_eq!(columns, vec![Column::FirstName, Column::Age]);
    }

    #[test]
    fn test_placeholder_counts_earlier_filters_only() {
        let mut table = state();
        let data = rows();
        table.set_column_filter(Column::LastName, "Holt");
        table.set_filter(Column::Age, FilterKind::GreaterThan, "20");

        assert_eq!(table.filter_placeholder(Column::FirstName, &data), "Search 3 records...");
        assert_eq!(table.filter_placeholder(Column::Age, &data), "Search 2 records...");
    }

    #[test]
    fn test_summary() {
        let table = state();
        assert_eq!(table.summary(true, 10), "Loading...");
        assert_eq!(table.summary(false, 10), "Showing 10 of 10000 results");
        assert_eq!(table.page_label(), "Page 1 of 1000");
    }
}
