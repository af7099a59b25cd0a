//! Health check HTTP route handlers
//!
//! - `GET /health` - Simple liveness check (returns 200 OK)
//! - `GET /health/live` - Kubernetes-style liveness probe

use axum::{response::IntoResponse, routing::get, Json, Router};
use std::sync::Arc;

use crate::config::Config;

/// Shared application state for health check handlers
#[derive(Clone)]
pub struct HealthState {
    /// Application configuration
    pub config: Arc<Config>,
}

impl HealthState {
    /// Create new health state from config
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Create health check router
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(simple_health))
        .route("/live", get(liveness_probe))
        .with_state(state)
}

/// Simple health check - always returns OK if the server is running
async fn simple_health() -> &'static str {
    "OK"
}

/// Liveness probe for Kubernetes
///
/// Returns 200 if the server process is running and can handle
/// requests. This does not check the catalog service; the gateway is
/// usable for cached/stubbed resolution even when upstream is down.
async fn liveness_probe() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
