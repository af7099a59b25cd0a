//! Catalog service error types

use thiserror::Error;

/// Catalog service client errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Base URL or access token missing / malformed
    #[error("invalid client configuration: {0}")]
    Configuration(String),

    /// Invalid input provided to a client method
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("failed to parse catalog response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog returned a non-success status
    #[error("catalog error {status}: {message}")]
    Api { status: u16, message: String },

    /// Requested resource does not exist
    #[error("catalog resource not found: {0}")]
    NotFound(String),

    /// Rate limited by the catalog service
    #[error("rate limited by catalog service")]
    RateLimited,

    /// Request timeout
    #[error("request to catalog service timed out")]
    Timeout,
}

impl CatalogError {
    /// Check if this error is retryable (transient failure)
    ///
    /// Retries on timeouts, rate limiting, transport errors, and 5xx
    /// statuses. Client errors (4xx other than 429) are never retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Timeout | CatalogError::RateLimited => true,
            CatalogError::Http(e) => {
                if e.is_timeout() || e.is_connect() {
                    return true;
                }
                matches!(e.status(), Some(status) if status.is_server_error())
            }
            CatalogError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
