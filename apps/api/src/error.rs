//! Error handling for the Curio API
//!
//! A unified error type using thiserror, with HTTP status code mapping
//! via Axum's IntoResponse trait. Upstream catalog failures propagate
//! unchanged; the gateway adds no retry or suppression of its own.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use curio_catalog_client::CatalogError;
use serde::Serialize;
use thiserror::Error;

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Main API error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ========== Pagination Errors ==========
    /// A cursor failed to decode
    #[error("invalid cursor: {0}")]
    InvalidCursor(String),

    /// Nonsensical pagination arguments
    #[error("invalid pagination argument: {0}")]
    InvalidPagination(String),

    // ========== Resource Errors ==========
    /// Requested resource not found
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    // ========== External Service Errors ==========
    /// Catalog service call failed; propagated unmodified
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    // ========== Configuration Errors ==========
    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    // ========== Internal Errors ==========
    /// Internal server error (catch-all for unexpected errors)
    #[error("internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            Self::InvalidCursor(_) | Self::InvalidPagination(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            Self::NotFound { .. } => StatusCode::NOT_FOUND,

            // Catalog errors keep their upstream flavor
            Self::Catalog(CatalogError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Catalog(CatalogError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
            Self::Catalog(CatalogError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Self::Catalog(_) => StatusCode::BAD_GATEWAY,

            // 500 Internal Server Error
            Self::Configuration(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for client-side handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCursor(_) => "INVALID_CURSOR",
            Self::InvalidPagination(_) => "INVALID_PAGINATION",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Catalog(_) => "CATALOG_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create a not found error for a specific resource
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// Log the error with severity based on status code
    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Server error occurred"
            );
        } else {
            tracing::debug!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Client error"
            );
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let error_response = ErrorResponse {
            code: self.error_code(),
            message: self.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<ApiError>() {
            Ok(api_err) => api_err,
            Err(err) => Self::Internal(err.to_string()),
        }
    }
}
