//! Paginated fetching with stale-response suppression.
//!
//! The [`FetchController`] turns page requests into asynchronous fetches
//! against a [`PageSource`] and publishes the outcome as a [`FetchState`].
//! Every request gets a fresh [`FetchTicket`]; only the outcome carrying the
//! current ticket is ever applied, so a burst of requests results in exactly
//! one visible page: the last one asked for.

mod controller;
mod source;
mod state;
mod ticket;

pub use controller::FetchController;
pub use source::PageSource;
pub use source::SimulatedSource;
pub use state::FetchState;
pub use ticket::FetchTicket;
