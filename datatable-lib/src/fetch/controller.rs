//! Fetch controller

use std::sync::Arc;

use log::debug;
use log::warn;
use tokio::sync::mpsc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::error::Error;
use crate::error::FetchError;
use crate::query::PageRequest;
use crate::query::PageResult;

use super::FetchState;
use super::FetchTicket;
use super::PageSource;

/// Outcome of one spawned fetch, tagged with the ticket it was issued under.
#[derive(Debug)]
struct Completion {
    ticket: FetchTicket,
    request: PageRequest,
    outcome: Result<PageResult, FetchError>,
}

/// Issues page requests and applies only the newest outcome.
///
/// Each call to [`request_page`](Self::request_page) allocates a ticket,
/// marks the state as loading and spawns a fetch. Finished fetches report
/// back over a channel to a single consumer task, which applies an outcome
/// only if its ticket is still current. Older requests are superseded: their
/// fetch is cancelled if it is still running, and anything that slips through
/// is dropped by the ticket check.
///
/// Ticket allocation and delivery both happen under the state lock, so the
/// check holds no matter which worker thread finishes a fetch.
///
/// One controller belongs to one table view. It must be created inside a
/// Tokio runtime.
///
/// # Example
///
/// ```
/// use datatable_lib::dataset::InMemoryDataset;
/// use datatable_lib::fetch::{FetchController, SimulatedSource};
/// use datatable_lib::query::PageRequest;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), datatable_lib::error::Error> {
/// let source = SimulatedSource::new(InMemoryDataset::generate(100, Some(1)))
///     .with_latency(std::time::Duration::ZERO);
/// let mut controller = FetchController::new(source);
///
/// controller.request_page(PageRequest::new(0, 10))?;
/// controller.request_page(PageRequest::new(3, 10))?;
///
/// let state = controller.settled().await?;
/// assert_eq!(state.rows().len(), 10);
/// assert_eq!(state.page_count(), 10);
/// assert_eq!(state.revision(), 1);
/// # Ok(())
/// # }
/// ```
pub struct FetchController {
    source: Arc<dyn PageSource>,
    state: Arc<watch::Sender<FetchState>>,
    completions: mpsc::UnboundedSender<Completion>,
    last_issued: FetchTicket,
    in_flight: Option<CancellationToken>,
    shutdown: CancellationToken,
}

impl FetchController {
    /// Creates a controller fetching from `source` and spawns its consumer.
    pub fn new(source: impl PageSource + 'static) -> Self {
        let (state, _) = watch::channel(FetchState::default());
        let state = Arc::new(state);
        let (completions, receiver) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();

        tokio::spawn(consume(receiver, Arc::clone(&state), shutdown.clone()));

        Self {
            source: Arc::new(source),
            state,
            completions,
            last_issued: FetchTicket::default(),
            in_flight: None,
            shutdown,
        }
    }

    /// Requests a page.
    ///
    /// Returns the ticket allocated for the request. The page itself is
    /// delivered later through the published [`FetchState`]. Invalid
    /// requests are rejected before a ticket is allocated.
    pub fn request_page(&mut self, request: PageRequest) -> Result<FetchTicket, Error> {
        request.validate()?;
        if self.shutdown.is_cancelled() {
            return Err(FetchError::Closed.into());
        }

        let ticket = self.last_issued.next();
        self.last_issued = ticket;
        self.state.send_modify(|state| {
            state.current = ticket;
            state.request = Some(request);
            state.loading = true;
        });
        debug!(
            "Issued fetch {} for page {} (size {})",
            ticket, request.page_index, request.page_size
        );

        let token = self.shutdown.child_token();
        if let Some(previous) = self.in_flight.replace(token.clone()) {
            previous.cancel();
        }

        let source = Arc::clone(&self.source);
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = token.cancelled() => return,
                outcome = source.fetch(request) => outcome,
            };
            let _ = completions.send(Completion {
                ticket,
                request,
                outcome,
            });
        });

        Ok(ticket)
    }

    /// Returns a receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Returns the most recently issued ticket.
    pub fn current_ticket(&self) -> FetchTicket {
        self.last_issued
    }

    /// Waits until no request is loading and returns the state.
    pub async fn settled(&self) -> Result<FetchState, FetchError> {
        let mut receiver = self.state.subscribe();
        let state = receiver
            .wait_for(|state| !state.loading)
            .await
            .map_err(|_| FetchError::Closed)?;
        Ok(state.clone())
    }

    /// Cancels every outstanding fetch and stops the consumer.
    ///
    /// A request still loading is finished with [`FetchError::Closed`] so
    /// views stop showing a loading indicator.
    pub fn shutdown(&self) {
        if self.shutdown.is_cancelled() {
            return;
        }
        self.shutdown.cancel();
        self.state.send_if_modified(|state| {
            if !state.loading {
                return false;
            }
            state.loading = false;
            state.error = Some(FetchError::Closed);
            state.revision += 1;
            true
        });
        debug!("Fetch controller shut down at {}", self.last_issued);
    }

    /// Returns `true` once [`shutdown`](Self::shutdown) has been called.
    pub fn is_closed(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}

impl Drop for FetchController {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn consume(
    mut receiver: mpsc::UnboundedReceiver<Completion>,
    state: Arc<watch::Sender<FetchState>>,
    shutdown: CancellationToken,
) {
    loop {
        let completion = tokio::select! {
            _ = shutdown.cancelled() => break,
            completion = receiver.recv() => match completion {
                Some(completion) => completion,
                None => break,
            },
        };
        apply(&state, completion);
    }
}

/// Applies a completion if its ticket is still current.
///
/// Returns `true` if the state changed.
fn apply(state: &watch::Sender<FetchState>, completion: Completion) -> bool {
    let Completion {
        ticket,
        request,
        outcome,
    } = completion;
    let outcome = outcome.and_then(|page| answers(request, page));
    let failure = outcome.as_ref().err().cloned();

    let applied = state.send_if_modified(|state| {
        if state.current != ticket {
            return false;
        }
        match outcome {
            Ok(page) => {
                state.page_count = page.total_page_count();
                state.rows = page.into_rows();
                state.error = None;
            }
            Err(error) => {
                state.error = Some(error);
            }
        }
        state.loading = false;
        state.delivered = Some(ticket);
        state.revision += 1;
        true
    });

    match (applied, failure) {
        (false, _) => debug!(
            "Discarded superseded fetch {} for page {}",
            ticket, request.page_index
        ),
        (true, Some(error)) => warn!(
            "Fetch {} for page {} failed: {}",
            ticket, request.page_index, error
        ),
        (true, None) => debug!("Delivered fetch {} for page {}", ticket, request.page_index),
    }

    applied
}

/// Rejects a page that answers a different request than the one issued.
fn answers(request: PageRequest, page: PageResult) -> Result<PageResult, FetchError> {
    let answered = page.request();
    if answered != request {
        return Err(FetchError::failed(format!(
            "source answered page {} (size {}) for page {} (size {})",
            answered.page_index, answered.page_size, request.page_index, request.page_size
        )));
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn issue(state: &watch::Sender<FetchState>, request: PageRequest) -> FetchTicket {
        let mut ticket = FetchTicket::default();
        state.send_modify(|state| {
            ticket = state.current.next();
            state.current = ticket;
            state.request = Some(request);
            state.loading = true;
        });
        ticket
    }

    fn page(request: PageRequest, first_name: &str) -> PageResult {
        PageResult::new(request, vec![Record::new(first_name, "x")], 7)
    }

    #[test]
    fn test_late_completion_of_old_ticket_is_discarded() {
        let (state, _) = watch::channel(FetchState::default());
        let first_request = PageRequest::new(0, 10);
        let second_request = PageRequest::new(1, 10);
        let first = issue(&state, first_request);
        let second = issue(&state, second_request);

        // The newer fetch finishes first.
        assert!(apply(
            &state,
            Completion {
                ticket: second,
                request: second_request,
                outcome: Ok(page(second_request, "second")),
            }
        ));
        assert!(!apply(
            &state,
            Completion {
                ticket: first,
                request: first_request,
                outcome: Ok(page(first_request, "first")),
            }
        ));

        let state = state.borrow();
        assert_eq!(state.rows()[0].first_name(), "second");
        assert_eq!(state.delivered_ticket(), Some(second));
        assert_eq!(state.revision(), 1);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_superseded_failure_is_discarded() {
        let (state, _) = watch::channel(FetchState::default());
        let request = PageRequest::new(0, 10);
        let first = issue(&state, request);
        let _second = issue(&state, request);

        assert!(!apply(
            &state,
            Completion {
                ticket: first,
                request,
                outcome: Err(FetchError::failed("unreachable")),
            }
        ));

        let state = state.borrow();
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn test_failure_keeps_rows_and_clears_loading() {
        let (state, _) = watch::channel(FetchState::default());
        let request = PageRequest::new(0, 10);
        let first = issue(&state, request);
        apply(
            &state,
            Completion {
                ticket: first,
                request,
                outcome: Ok(page(request, "kept")),
            },
        );

        let second = issue(&state, PageRequest::new(1, 10));
        assert!(apply(
            &state,
            Completion {
                ticket: second,
                request: PageRequest::new(1, 10),
                outcome: Err(FetchError::failed("timeout")),
            }
        ));

        let state = state.borrow();
        assert!(!state.is_loading());
        assert_eq!(state.rows()[0].first_name(), "kept");
        assert_eq!(state.error(), Some(&FetchError::failed("timeout")));
        assert_eq!(state.revision(), 2);
    }

    #[test]
    fn test_page_for_another_request_is_a_failure() {
        let (state, _) = watch::channel(FetchState::default());
        let request = PageRequest::new(2, 10);
        let ticket = issue(&state, request);

        assert!(apply(
            &state,
            Completion {
                ticket,
                request,
                outcome: Ok(page(PageRequest::new(0, 10), "wrong")),
            }
        ));

        let state = state.borrow();
        assert!(!state.is_loading());
        assert!(state.rows().is_empty());
        assert!(matches!(state.error(), Some(FetchError::Failed { .. })));
    }
}
