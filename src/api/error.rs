//! API client error definitions.

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Errors that can occur while talking to the HBnB API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failure or other transport-level error.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("request to {0} timed out")]
    Timeout(String),

    /// The API answered with a non-success status code.
    #[error("API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A base URL or path could not be joined into a request URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::timeout(e.url())
        } else {
            ApiError::Transport(e)
        }
    }
}

impl ApiError {
    /// Timeout for a request whose URL may be unknown.
    pub fn timeout(url: Option<&Url>) -> Self {
        ApiError::Timeout(url.map_or_else(|| "unknown URL".to_string(), Url::to_string))
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
