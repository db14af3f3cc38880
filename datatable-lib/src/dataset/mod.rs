//! Dataset providers
//!
//! A [`DatasetProvider`] is the read-only source of records the fetch
//! controller pages through. The in-memory provider is filled once at
//! startup by [`generate`] and never changes afterwards.

mod generate;
mod memory;

pub use generate::*;
pub use memory::*;

use std::sync::Arc;

use crate::error::RequestError;
use crate::model::Record;
use crate::query::PageRequest;
use crate::query::PageResult;

/// A synchronous, read-only source of records.
///
/// Implementations must return rows in a stable order so that the same
/// request always yields the same page.
pub trait DatasetProvider: Send + Sync {
    /// Returns the number of records.
    fn size(&self) -> usize;

    /// Returns up to `length` records starting at `offset`.
    ///
    /// Offsets past the end yield an empty vector.
    fn slice(&self, offset: usize, length: usize) -> Vec<Record>;

    /// Returns the page selected by `request`.
    ///
    /// The page count is computed from the full dataset size, even when the
    /// requested page lies past the end.
    fn page(&self, request: PageRequest) -> Result<PageResult, RequestError> {
        let offset = request.offset()?;
        let size = self.size();
        let rows = self.slice(offset, request.rows_in_page(size));
        Ok(PageResult::new(request, rows, request.page_count(size)))
    }
}

impl<D: DatasetProvider + ?Sized> DatasetProvider for Arc<D> {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn slice(&self, offset: usize, length: usize) -> Vec<Record> {
        (**self).slice(offset, length)
    }
}
