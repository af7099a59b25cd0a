//! Common test utilities for API integration tests

#![allow(dead_code)]

use curio_api::graphql::{build_schema, CurioSchema};
use curio_catalog_client::CatalogClient;
use curio_test_utils::MockCatalogServer;

/// Build a schema wired to a mock catalog server
pub fn schema_for(catalog: &MockCatalogServer) -> CurioSchema {
    let client = CatalogClient::new(catalog.url(), catalog.token())
        .expect("mock catalog client should configure");
    build_schema(client)
}

/// Execute a query and return `(data, errors)` as JSON-friendly values
pub async fn execute(
    schema: &CurioSchema,
    query: &str,
) -> (serde_json::Value, Vec<async_graphql::ServerError>) {
    let response = schema.execute(query).await;
    let errors = response.errors.clone();
    (response.data.into_json().unwrap_or(serde_json::Value::Null), errors)
}
