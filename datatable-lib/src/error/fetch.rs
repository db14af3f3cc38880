//! Fetch errors

/// Errors surfaced to the view after a fetch completes.
///
/// Failures go through the same ticket check as successful pages, so a
/// failure of a superseded request never reaches the view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The page source could not produce the page.
    #[error("Fetch failed: {message}")]
    Failed { message: String },

    /// The controller has been shut down.
    #[error("Fetch controller is closed")]
    Closed,
}

impl FetchError {
    /// Creates a new fetch failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}
