use thiserror::Error;

/// Errors that can occur while enumerating source repositories.
///
/// Every variant is fatal for the run: nothing is retried.
#[derive(Debug, Error)]
pub enum SourceError {
    /// API error from the platform.
    #[error("API error: {message}")]
    Api { message: String },

    /// Authentication required or failed.
    #[error("Authentication required")]
    AuthRequired,

    /// Network or connection error.
    #[error("Network error: {message}")]
    Network { message: String },
}

impl SourceError {
    /// Create an API error.
    #[inline]
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a network error.
    #[inline]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }
}

/// Extract a short error message suitable for display.
///
/// Takes the first line of an error message, which is useful for errors
/// that include backtraces or multi-line details.
#[inline]
pub fn short_error_message(e: &impl std::error::Error) -> String {
    let full = e.to_string();
    full.lines().next().unwrap_or(&full).to_string()
}

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
