//! Notion API error types.

use thiserror::Error;

use crate::destination::DestinationError;

/// Errors that can occur when interacting with the Notion API.
#[derive(Debug, Error)]
pub enum NotionError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<NotionError> for DestinationError {
    fn from(err: NotionError) -> Self {
        match err {
            NotionError::Http(message) => DestinationError::Network { message },
            NotionError::Json(e) => DestinationError::Internal {
                message: format!("JSON parse error: {}", e),
            },
            NotionError::Api {
                status, message, ..
            } => match status {
                401 | 403 => DestinationError::AuthRequired,
                404 => DestinationError::NotFound { resource: message },
                _ => DestinationError::Api { status, message },
            },
            NotionError::Config(message) => DestinationError::Internal { message },
        }
    }
}
