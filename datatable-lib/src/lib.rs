//! Paginated data table library
//!
//! A headless, filterable, sortable data table backed by a simulated remote
//! data source. Pages are fetched through a [`fetch::FetchController`] that
//! suppresses stale responses, so only the most recently requested page is
//! ever shown.

pub mod dataset;
pub mod error;
pub mod fetch;
pub mod model;
pub mod query;
pub mod table;

mod config;

pub use config::*;
