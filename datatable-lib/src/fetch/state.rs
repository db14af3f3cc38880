//! Observable fetch state

use crate::error::FetchError;
use crate::model::Record;
use crate::query::PageRequest;

use super::FetchTicket;

/// The state a view renders from.
///
/// Published by the [`FetchController`](super::FetchController) through a
/// watch channel. `loading` is set as soon as a request is issued and
/// cleared only when the outcome of the current ticket is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchState {
    pub(crate) rows: Vec<Record>,
    pub(crate) page_count: usize,
    pub(crate) loading: bool,
    pub(crate) error: Option<FetchError>,
    /// Most recently issued ticket.
    pub(crate) current: FetchTicket,
    /// Request behind `current`.
    pub(crate) request: Option<PageRequest>,
    /// Ticket whose outcome was applied last.
    pub(crate) delivered: Option<FetchTicket>,
    /// Number of outcomes applied so far.
    pub(crate) revision: u64,
}

impl FetchState {
    /// Rows of the last delivered page.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Total page count reported with the last delivered page.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Returns `true` while the current request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Failure of the current request, if it failed.
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// The most recently issued ticket.
    pub fn current_ticket(&self) -> FetchTicket {
        self.current
    }

    /// The most recently issued request.
    pub fn current_request(&self) -> Option<PageRequest> {
        self.request
    }

    /// The ticket whose outcome is on display.
    pub fn delivered_ticket(&self) -> Option<FetchTicket> {
        self.delivered
    }

    /// Number of outcomes applied since the controller was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
