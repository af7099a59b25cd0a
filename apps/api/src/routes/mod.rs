//! HTTP route handlers for the Curio API
//!
//! The GraphQL endpoint itself is mounted in `main`; this module holds
//! the remaining REST surface:
//! - Health check and status endpoints

pub mod health;

pub use health::{health_router, HealthState};
