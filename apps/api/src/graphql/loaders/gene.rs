//! Gene DataLoader
//!
//! Batches gene-by-slug lookups issued while resolving a single
//! request. The catalog has no bulk gene endpoint, so a batch fans out
//! into concurrent single-gene fetches; the loader still deduplicates
//! and caches identical slugs within the request.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dataloader::Loader;
use curio_catalog_client::{CatalogClient, CatalogError, Gene};

/// DataLoader for gene-by-slug lookups
#[derive(Clone)]
pub struct GeneLoader {
    client: CatalogClient,
}

impl GeneLoader {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }
}

impl Loader<String> for GeneLoader {
    type Value = Gene;
    type Error = Arc<CatalogError>;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        let lookups = keys.iter().map(|slug| async move {
            match self.client.gene(slug).await {
                Ok(gene) => Ok(Some((slug.clone(), gene))),
                // Missing genes are absent from the batch result, not errors
                Err(CatalogError::NotFound(_)) => Ok(None),
                Err(e) => Err(Arc::new(e)),
            }
        });

        let results = futures_util::future::try_join_all(lookups).await?;
        Ok(results.into_iter().flatten().collect())
    }
}
