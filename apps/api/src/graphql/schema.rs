//! GraphQL schema builder for Curio
//!
//! Schema construction is two-phase: all services and loaders are
//! constructed first, then the schema is built with every type already
//! registered. No resolver is wired lazily.

use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use curio_catalog_client::CatalogClient;

use super::loaders::{GeneLoader, TrendingArtistsLoader};
use super::query::Query;

/// The Curio GraphQL schema type
pub type CurioSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema with required services
pub struct SchemaBuilder {
    catalog: Option<CatalogClient>,
}

impl SchemaBuilder {
    /// Create a new schema builder
    pub fn new() -> Self {
        Self { catalog: None }
    }

    /// Set the catalog client
    pub fn catalog_client(mut self, client: CatalogClient) -> Self {
        self.catalog = Some(client);
        self
    }

    /// Build the schema with all configured services
    ///
    /// # Panics
    /// Panics if the catalog client is not configured
    pub fn build(self) -> CurioSchema {
        let catalog = self.catalog.expect("catalog client is required");

        let gene_loader = DataLoader::new(GeneLoader::new(catalog.clone()), tokio::spawn);
        let trending_loader =
            DataLoader::new(TrendingArtistsLoader::new(catalog.clone()), tokio::spawn);

        Schema::build(Query::default(), EmptyMutation, EmptySubscription)
            .data(catalog)
            .data(gene_loader)
            .data(trending_loader)
            .finish()
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new GraphQL schema wired to the given catalog client
pub fn build_schema(catalog: CatalogClient) -> CurioSchema {
    SchemaBuilder::new().catalog_client(catalog).build()
}
