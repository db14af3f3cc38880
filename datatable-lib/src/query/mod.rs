//! Query types for the table.
//!
//! # Shared Types
//!
//! - [`Filter`] - Column filters applied to the visible page
//! - [`OrderBy`] - Sort order applied to the visible page
//! - [`PageRequest`] / [`PageResult`] - A page request and the page it yields
//! - [`fuzzy_filter`] - Fuzzy matching used by [`FilterKind::FuzzyText`]

mod filter;
mod fuzzy;
mod order;
mod page;

pub use filter::Filter;
pub use filter::FilterKind;
pub use fuzzy::FilterMatch;
pub use fuzzy::fuzzy_filter;
pub use order::Direction;
pub use order::OrderBy;
pub use page::PageRequest;
pub use page::PageResult;
