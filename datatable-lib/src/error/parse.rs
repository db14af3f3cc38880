//! Parse errors for user-supplied names

/// Error returned when parsing a column or filter name fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No column matches the given name.
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    /// No filter kind matches the given name.
    #[error("Unknown filter kind '{0}'")]
    UnknownFilter(String),
}
