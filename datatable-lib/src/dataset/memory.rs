//! In-memory dataset

use std::sync::Arc;

use super::DatasetProvider;
use crate::model::Record;

/// An immutable, in-memory dataset.
///
/// Records are stored behind an `Arc`, so cloning the dataset is cheap and
/// every clone shares the same rows.
///
/// # Example
///
/// ```
/// use datatable_lib::dataset::{DatasetProvider, InMemoryDataset};
///
/// let dataset = InMemoryDataset::generate(25, Some(7));
/// assert_eq!(dataset.size(), 25);
/// assert_eq!(dataset.slice(20, 10).len(), 5);
/// assert!(dataset.slice(30, 10).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataset {
    records: Arc<[Record]>,
}

impl InMemoryDataset {
    /// Creates a dataset from the given records.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Creates a dataset of `size` generated records.
    ///
    /// The same seed always produces the same records.
    pub fn generate(size: usize, seed: Option<u64>) -> Self {
        Self::new(super::generate(size, seed))
    }

    /// Returns all records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns `true` if the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DatasetProvider for InMemoryDataset {
    fn size(&self) -> usize {
        self.records.len()
    }

    fn slice(&self, offset: usize, length: usize) -> Vec<Record> {
        let start = offset.min(self.records.len());
        let end = start.saturating_add(length).min(self.records.len());
        self.records[start..end].to_vec()
    }
}
