//! Page sources

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::dataset::DatasetProvider;
use crate::error::FetchError;
use crate::query::PageRequest;
use crate::query::PageResult;

/// Asynchronous source of pages.
///
/// This is the seam between the fetch controller and whatever actually
/// holds the data. The controller has already validated the request.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches one page.
    async fn fetch(&self, request: PageRequest) -> Result<PageResult, FetchError>;
}

#[async_trait]
impl<S: PageSource + ?Sized> PageSource for Arc<S> {
    async fn fetch(&self, request: PageRequest) -> Result<PageResult, FetchError> {
        (**self).fetch(request).await
    }
}

/// A page source that answers from a dataset after a fixed delay.
///
/// The delay is a timer, not a blocking wait, so many simulated fetches
/// can be outstanding at once.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use datatable_lib::dataset::InMemoryDataset;
/// use datatable_lib::fetch::SimulatedSource;
///
/// let source = SimulatedSource::new(InMemoryDataset::generate(100, Some(1)))
///     .with_latency(Duration::from_millis(50));
/// assert_eq!(source.latency(), Duration::from_millis(50));
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedSource<D> {
    dataset: D,
    latency: Duration,
}

impl<D: DatasetProvider> SimulatedSource<D> {
    /// Creates a source with the default one-second latency.
    pub fn new(dataset: D) -> Self {
        Self {
            dataset,
            latency: crate::config::DEFAULT_LATENCY,
        }
    }

    /// Sets the simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Returns the simulated latency.
    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl<D: DatasetProvider> PageSource for SimulatedSource<D> {
    async fn fetch(&self, request: PageRequest) -> Result<PageResult, FetchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.dataset
            .page(request)
            .map_err(|e| FetchError::failed(e.to_string()))
    }
}
