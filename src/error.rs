//! Error types for TMDb API operations.

use thiserror::Error;

/// Errors that can occur during TMDb API operations.
///
/// [`TmdbError::InvalidRequest`] is raised locally before any request is
/// sent. Every other variant comes from the transport or from client
/// construction and is passed through to the caller untouched.
#[derive(Debug, Error)]
pub enum TmdbError {
    /// The request could not be built (blank query, missing API key, bad URL).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// API request failed with a non-success status.
    #[error("TMDb API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Rate limited.
    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },
}

impl TmdbError {
    /// Returns true if the API answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TmdbError::ApiError {
                status_code: Some(404),
                ..
            }
        )
    }
}

/// Result type alias for TMDb operations.
pub type Result<T> = core::result::Result<T, TmdbError>;
