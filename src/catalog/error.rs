use thiserror::Error;

/// The only search failure message ever shown to the user.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch movies. Please try again.";

/// Errors produced by the catalog client.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure, non-success status or malformed payload.
    ///
    /// The reason is kept for logs only; callers surface
    /// [`FETCH_FAILED_MESSAGE`].
    #[error("Catalog fetch failed: {reason}")]
    FetchFailed { reason: String },

    /// The HTTP client itself could not be constructed.
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },
}

impl CatalogError {
    pub fn fetch_failed(reason: impl Into<String>) -> Self {
        CatalogError::FetchFailed {
            reason: reason.into(),
        }
    }

    /// User-facing message, independent of the cause.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}
