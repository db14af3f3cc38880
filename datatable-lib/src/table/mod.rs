//! Paginated table
//!
//! [`TableState`] holds what the user controls: page, page size, filters and
//! sort. [`Table`] wires it to a [`FetchController`] so that every change of
//! page index or page size issues exactly one page request, and every
//! delivered page updates the controlled page count.

mod state;

pub use state::TableState;

use crate::config::TableConfig;
use crate::dataset::InMemoryDataset;
use crate::error::Error;
use crate::error::FetchError;
use crate::fetch::FetchController;
use crate::fetch::FetchState;
use crate::fetch::FetchTicket;
use crate::fetch::PageSource;
use crate::fetch::SimulatedSource;
use crate::model::Record;
use crate::query::PageRequest;

/// A table view's state together with its fetch controller.
///
/// # Example
///
/// ```
/// use datatable_lib::TableConfig;
/// use datatable_lib::table::Table;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), datatable_lib::error::Error> {
/// let config = TableConfig::instant().with_dataset_size(95).with_seed(3);
/// let mut table = Table::simulated(&config);
///
/// table.mount()?;
/// let page = table.settled().await?;
/// assert_eq!(page.rows().len(), 10);
/// assert_eq!(table.state().page_count(), 10);
///
/// table.next_page()?;
/// table.settled().await?;
/// assert_eq!(table.state().page_index(), 1);
/// # Ok(())
/// # }
/// ```
pub struct Table {
    state: TableState,
    fetch: FetchController,
}

impl Table {
    /// Creates a table fetching from `source`.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &TableConfig, source: impl PageSource + 'static) -> Self {
        Self {
            state: TableState::new(config),
            fetch: FetchController::new(source),
        }
    }

    /// Creates a table over a freshly generated dataset behind a simulated
    /// source with the configured latency.
    pub fn simulated(config: &TableConfig) -> Self {
        let dataset = InMemoryDataset::generate(config.dataset_size, config.seed);
        let source = SimulatedSource::new(dataset).with_latency(config.latency);
        Self::new(config, source)
    }

    /// Table state.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Mutable table state, for filters and sorting.
    ///
    /// Pagination changes made here do not fetch; use the pagination
    /// methods on [`Table`] instead.
    pub fn state_mut(&mut self) -> &mut TableState {
        &mut self.state
    }

    /// Snapshot of the fetch state.
    pub fn fetch_state(&self) -> FetchState {
        self.fetch.state()
    }

    /// Fetches the current page. Called once when the table is shown.
    pub fn mount(&mut self) -> Result<FetchTicket, Error> {
        self.fetch.request_page(self.state.page_request())
    }

    pub fn next_page(&mut self) -> Result<Option<FetchTicket>, Error> {
        let request = self.state.next_page();
        self.request(request)
    }

    pub fn previous_page(&mut self) -> Result<Option<FetchTicket>, Error> {
        let request = self.state.previous_page();
        self.request(request)
    }

    pub fn goto_page(&mut self, page_index: usize) -> Result<Option<FetchTicket>, Error> {
        let request = self.state.goto_page(page_index);
        self.request(request)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<Option<FetchTicket>, Error> {
        let request = self.state.set_page_size(page_size)?;
        self.request(request)
    }

    fn request(&mut self, request: Option<PageRequest>) -> Result<Option<FetchTicket>, Error> {
        request
            .map(|request| self.fetch.request_page(request))
            .transpose()
    }

    /// Waits for the outstanding request and applies its page count.
    ///
    /// Returns the fetch state; a failed fetch is reported through
    /// [`FetchState::error`], not as an `Err`.
    pub async fn settled(&mut self) -> Result<FetchState, FetchError> {
        let fetched = self.fetch.settled().await?;
        self.sync(&fetched);
        Ok(fetched)
    }

    /// Applies the page count of a delivered page to the table state.
    pub fn sync(&mut self, fetched: &FetchState) {
        if fetched.delivered_ticket().is_some() && fetched.error().is_none() {
            self.state.set_page_count(fetched.page_count());
        }
    }

    /// Rows to display out of the delivered page.
    pub fn visible_rows<'a>(&self, fetched: &'a FetchState) -> Vec<&'a Record> {
        self.state.visible_rows(fetched.rows())
    }

    /// Stops all outstanding fetches.
    pub fn shutdown(&self) {
        self.fetch.shutdown();
    }
}
