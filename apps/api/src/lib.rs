//! Curio API library
//!
//! This module exposes the core API components for use in integration
//! tests and as a library.

pub mod config;
pub mod error;
pub mod graphql;
pub mod routes;

// Re-export commonly used types
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use graphql::{build_schema, CurioSchema, SchemaBuilder};
