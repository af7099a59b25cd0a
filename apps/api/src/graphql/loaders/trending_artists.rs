//! Trending-artists DataLoader
//!
//! Batches trending-artist lookups by gene id. Every requested key
//! gets an entry, empty when the catalog reports nothing trending.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dataloader::Loader;
use curio_catalog_client::{Artist, CatalogClient, CatalogError};

/// DataLoader for trending artists within a gene
#[derive(Clone)]
pub struct TrendingArtistsLoader {
    client: CatalogClient,
}

impl TrendingArtistsLoader {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }
}

impl Loader<String> for TrendingArtistsLoader {
    type Value = Vec<Artist>;
    type Error = Arc<CatalogError>;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        let lookups = keys.iter().map(|gene_id| async move {
            let artists = self
                .client
                .trending_artists(gene_id)
                .await
                .map_err(Arc::new)?;
            Ok::<_, Self::Error>((gene_id.clone(), artists))
        });

        let mut result: HashMap<String, Vec<Artist>> =
            futures_util::future::try_join_all(lookups).await?.into_iter().collect();

        // Ensure all requested keys have an entry (even if empty)
        for key in keys {
            result.entry(key.clone()).or_default();
        }

        Ok(result)
    }
}
