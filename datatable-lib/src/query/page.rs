//! Page request and page result types.

use crate::error::RequestError;
use crate::model::Record;

/// A request for one page of the dataset.
///
/// `page_index` is zero-based. Requests are cheap and created on every
/// pagination change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub page_index: usize,
    pub page_size: usize,
}

impl PageRequest {
    /// Creates a new page request.
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// Checks the request contract.
    pub fn validate(&self) -> Result<(), RequestError> {
        self.offset().map(|_| ())
    }

    /// Returns the offset of the first row of the page.
    pub fn offset(&self) -> Result<usize, RequestError> {
        if self.page_size == 0 {
            return Err(RequestError::ZeroPageSize);
        }
        self.page_index
            .checked_mul(self.page_size)
            .ok_or(RequestError::OffsetOverflow {
                page_index: self.page_index,
                page_size: self.page_size,
            })
    }

    /// Returns the number of pages needed to hold `total` rows.
    ///
    /// A zero page size yields zero pages.
    pub fn page_count(&self, total: usize) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        total.div_ceil(self.page_size)
    }

    /// Returns the number of rows this page holds out of `total`.
    pub fn rows_in_page(&self, total: usize) -> usize {
        match self.offset() {
            Ok(offset) => total.saturating_sub(offset).min(self.page_size),
            Err(_) => 0,
        }
    }
}

/// A page of records delivered to the view.
///
/// The page count always refers to the whole dataset, so an out-of-range
/// request still reports how many pages exist.
///
/// # Example
///
/// ```
/// use datatable_lib::query::{PageRequest, PageResult};
///
/// let page = PageResult::new(PageRequest::new(1000, 10), Vec::new(), 1000);
///
/// assert!(page.is_empty());
/// assert_eq!(page.total_page_count(), 1000);
/// assert!(!page.has_more());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    request: PageRequest,
    rows: Vec<Record>,
    total_page_count: usize,
}

impl PageResult {
    /// Creates a page for the given request.
    pub fn new(request: PageRequest, rows: Vec<Record>, total_page_count: usize) -> Self {
        Self {
            request,
            rows,
            total_page_count,
        }
    }

    /// Returns the request this page answers.
    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// Returns a reference to the rows in this page.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Consumes the page and returns the rows.
    pub fn into_rows(self) -> Vec<Record> {
        self.rows
    }

    /// Returns the total number of pages in the dataset.
    pub fn total_page_count(&self) -> usize {
        self.total_page_count
    }

    /// Returns `true` if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows in this page.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are pages after this one.
    pub fn has_more(&self) -> bool {
        self.request.page_index < self.total_page_count.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(3, 10).offset(), Ok(30));
        assert_eq!(PageRequest::new(0, 0).offset(), Err(RequestError::ZeroPageSize));
        assert_eq!(
            PageRequest::new(usize::MAX, 2).offset(),
            Err(RequestError::OffsetOverflow {
                page_index: usize::MAX,
                page_size: 2
            })
        );
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(PageRequest::new(0, 10).page_count(10_000), 1000);
        assert_eq!(PageRequest::new(0, 30).page_count(10_000), 334);
        assert_eq!(PageRequest::new(0, 10).page_count(0), 0);
        assert_eq!(PageRequest::new(0, 0).page_count(100), 0);
    }

    #[test]
    fn test_rows_in_page() {
        assert_eq!(PageRequest::new(0, 10).rows_in_page(10_000), 10);
        assert_eq!(PageRequest::new(999, 10).rows_in_page(10_000), 10);
        assert_eq!(PageRequest::new(1000, 10).rows_in_page(10_000), 0);
        assert_eq!(PageRequest::new(2, 4).rows_in_page(10), 2);
    }

    #[test]
    fn test_has_more() {
        assert!(PageResult::new(PageRequest::new(0, 10), Vec::new(), 2).has_more());
        assert!(!PageResult::new(PageRequest::new(1, 10), Vec::new(), 2).has_more());
        assert!(!PageResult::new(PageRequest::new(0, 10), Vec::new(), 0).has_more());
    }

    #[test]
    fn test_has_more_at_max_index() {
        let request = PageRequest::new(usize::MAX, 1);
        assert_eq!(request.validate(), Ok(()));

        let page = PageResult::new(request, Vec::new(), 10);
        assert!(!page.has_more());
    }
}
