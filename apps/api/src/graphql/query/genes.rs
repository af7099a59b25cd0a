//! Gene queries for the Curio GraphQL API

use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, Object, Result};
use curio_catalog_client::CatalogClient;

use crate::error::ApiError;
use crate::graphql::demand::{fetch_required, requested_fields, GENE_CHEAP_FIELDS};
use crate::graphql::loaders::GeneLoader;
use crate::graphql::relay::{build_connection, Connection, ConnectionArgs, TotalCountSource};
use crate::graphql::types::Gene;

/// Gene-related queries
#[derive(Default)]
pub struct GeneQuery;

#[Object]
impl GeneQuery {
    /// Get a gene by slug
    ///
    /// When only identifier-derived fields are requested, no catalog
    /// fetch happens at all: the resolver hands back a stub and the
    /// sub-connections re-derive their parameters from the slug.
    async fn gene(&self, ctx: &Context<'_>, slug: String) -> Result<Option<Gene>> {
        if !fetch_required(requested_fields(ctx), GENE_CHEAP_FIELDS) {
            return Ok(Some(Gene::stub(slug)));
        }

        let loader = ctx.data::<DataLoader<GeneLoader>>()?;
        Ok(loader.load_one(slug).await?.map(Gene::full))
    }

    /// Free-text gene matching, paginated
    ///
    /// The catalog's match endpoint returns the full result list; the
    /// requested window is sliced locally and the connection built
    /// against the list's length.
    async fn match_genes(
        &self,
        ctx: &Context<'_>,
        term: String,
        first: Option<i32>,
        after: Option<String>,
    ) -> Result<Connection<Gene>> {
        let page = ConnectionArgs::new(first, after, None, None).page_params()?;

        let client = ctx.data::<CatalogClient>()?;
        let matches = client.match_genes(&term).await.map_err(ApiError::from)?;
        let total = matches.len() as i64;

        let window: Vec<Gene> = matches
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .map(Gene::full)
            .collect();

        Ok(build_connection(
            window,
            page.offset,
            TotalCountSource::FromBody(total),
        ))
    }
}
