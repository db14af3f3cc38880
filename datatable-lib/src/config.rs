//! Table configuration

use std::time::Duration;

/// Default number of generated records.
pub const DEFAULT_DATASET_SIZE: usize = 10_000;

/// Default simulated fetch latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Page sizes offered in the "Rows per page" selector.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

/// Configuration for a table and its simulated backend.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use datatable_lib::TableConfig;
///
/// let config = TableConfig::default()
///     .with_dataset_size(500)
///     .with_latency(Duration::from_millis(250))
///     .with_seed(42);
///
/// assert_eq!(config.page_size, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of records generated at startup.
    ///
    /// Default: 10 000
    pub dataset_size: usize,

    /// Fixed latency of every simulated fetch.
    ///
    /// Default: 1 second
    pub latency: Duration,

    /// Initial page size.
    ///
    /// Default: 10
    pub page_size: usize,

    /// Page sizes the user can pick from.
    ///
    /// Default: 10, 20, 30, 40, 50
    pub page_size_options: Vec<usize>,

    /// Seed for the record generator. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            dataset_size: DEFAULT_DATASET_SIZE,
            latency: DEFAULT_LATENCY,
            page_size: DEFAULT_PAGE_SIZE_OPTIONS[0],
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            seed: None,
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of generated records.
    pub fn with_dataset_size(mut self, size: usize) -> Self {
        self.dataset_size = size;
        self
    }

    /// Sets the simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Sets the initial page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the page sizes offered to the user.
    pub fn with_page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    /// Sets the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Creates a config with no simulated latency.
    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
            ..Self::default()
        }
    }
}
