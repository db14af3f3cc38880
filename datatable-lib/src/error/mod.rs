//! Error types

mod fetch;
mod parse;
mod request;

pub use fetch::*;
pub use parse::*;
pub use request::*;

/// Top-level error for table operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The page request was rejected before a ticket was allocated.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The page could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
