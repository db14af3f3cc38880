//! Page request validation errors

/// A page request that violates the request contract.
///
/// These are rejected synchronously by the fetch controller; no ticket is
/// allocated and the published state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The page size was zero.
    #[error("Page size must be greater than zero")]
    ZeroPageSize,

    /// `page_index * page_size` does not fit in a row offset.
    #[error("Page {page_index} of size {page_size} overflows the row offset")]
    OffsetOverflow { page_index: usize, page_size: usize },
}
