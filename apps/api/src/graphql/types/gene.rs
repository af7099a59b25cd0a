//! Gene GraphQL type with relationship resolvers
//!
//! A gene is either fully fetched from the catalog or an
//! identifier-only stub produced when field-demand analysis decided
//! the fetch was unnecessary. Resolvers pattern-match on the view and
//! never fabricate business data for stubs.

use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, Object, Result, ID};
use curio_catalog_client::{CatalogClient, Gene as CatalogGene, HeaderTotal};

use crate::error::ApiError;
use crate::graphql::loaders::TrendingArtistsLoader;
use crate::graphql::relay::{
    build_connection, Connection, ConnectionArgs, TotalCountSource,
};
use crate::graphql::sample as sampling;
use crate::graphql::translate::{similar_genes_params, translate_gene_artwork_filters};

use super::artist::Artist;
use super::artwork::{Artwork, ArtworkConnection, ArtworkFilterInput};

/// How much of a gene is actually known locally
#[derive(Debug, Clone)]
pub enum GeneView {
    /// Fully fetched catalog record
    Full(Box<CatalogGene>),
    /// Identifier-only stand-in; only fields derivable from the slug
    /// resolve to non-null values
    Stub { slug: String },
}

/// Gene (category) exposed via GraphQL
#[derive(Debug, Clone)]
pub struct Gene {
    view: GeneView,
}

impl Gene {
    /// Wrap a fully fetched catalog gene
    pub fn full(gene: CatalogGene) -> Self {
        Self {
            view: GeneView::Full(Box::new(gene)),
        }
    }

    /// Identifier-only stub for demand-skipped fetches
    pub fn stub(slug: impl Into<String>) -> Self {
        Self {
            view: GeneView::Stub { slug: slug.into() },
        }
    }

    pub fn view(&self) -> &GeneView {
        &self.view
    }

    fn slug_str(&self) -> &str {
        match &self.view {
            GeneView::Full(gene) => &gene.slug,
            GeneView::Stub { slug } => slug,
        }
    }

    /// Identifier to hand to the catalog; it accepts slugs wherever
    /// gene ids appear, so a stub's slug is sufficient
    fn identifier(&self) -> &str {
        match &self.view {
            GeneView::Full(gene) => &gene.id,
            GeneView::Stub { slug } => slug,
        }
    }
}

impl From<CatalogGene> for Gene {
    fn from(gene: CatalogGene) -> Self {
        Self::full(gene)
    }
}

#[Object]
impl Gene {
    /// Gene identifier (the slug)
    async fn id(&self) -> ID {
        ID(self.slug_str().to_string())
    }

    /// URL slug, unique per gene
    async fn slug(&self) -> &str {
        self.slug_str()
    }

    /// Display name; null on identifier-only stubs
    async fn name(&self) -> Option<&str> {
        match &self.view {
            GeneView::Full(gene) => Some(&gene.name),
            GeneView::Stub { .. } => None,
        }
    }

    /// Longer-form description
    async fn description(&self) -> Option<&str> {
        match &self.view {
            GeneView::Full(gene) => gene.description.as_deref(),
            GeneView::Stub { .. } => None,
        }
    }

    /// URL to a representative image
    async fn image_url(&self) -> Option<&str> {
        match &self.view {
            GeneView::Full(gene) => gene.image_url.as_deref(),
            GeneView::Stub { .. } => None,
        }
    }

    /// Whether the gene is surfaced in browse UIs; null on stubs
    async fn is_browseable(&self) -> Option<bool> {
        match &self.view {
            GeneView::Full(gene) => Some(gene.browseable),
            GeneView::Stub { .. } => None,
        }
    }

    // Relationship resolvers

    /// Artworks tagged with this gene, filtered and paginated
    ///
    /// The gene id is forced into the backend filter from this node,
    /// so the relationship resolves identically on stubs and full
    /// genes. Aggregations requested by the caller come back on the
    /// connection's side channel.
    async fn artworks(
        &self,
        ctx: &Context<'_>,
        filter: Option<ArtworkFilterInput>,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> Result<ArtworkConnection> {
        let page = ConnectionArgs::new(first, after, last, before).page_params()?;

        let args = filter.unwrap_or_default().into_args();
        let mut params = translate_gene_artwork_filters(self.identifier(), &args);
        params.insert("size".to_string(), page.limit.into());
        params.insert("offset".to_string(), page.offset.into());

        let client = ctx.data::<CatalogClient>()?;
        let response = client
            .filter_artworks(&params)
            .await
            .map_err(ApiError::from)?;

        // The total aggregation is always requested; a response without
        // it is treated as zero-length rather than failed
        let total = TotalCountSource::FromBody(response.total().unwrap_or(0));
        let aggregations = response.aggregations;
        let artworks: Vec<Artwork> = response.hits.into_iter().map(Artwork::from).collect();

        let connection = build_connection(artworks, page.offset, total);
        Ok(ArtworkConnection::merge(connection, aggregations))
    }

    /// Artists tagged with this gene
    ///
    /// The total comes from the gene body's counts; stubs report no
    /// artists (demand analysis fetches the full gene whenever this
    /// field is requested).
    async fn artists(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> Result<Connection<Artist>> {
        let page = ConnectionArgs::new(first, after, last, before).page_params()?;

        let total = match &self.view {
            GeneView::Full(gene) => gene.counts.artists,
            GeneView::Stub { .. } => 0,
        };
        if total <= 0 {
            return Ok(build_connection(
                Vec::new(),
                page.offset,
                TotalCountSource::FromBody(0),
            ));
        }

        let client = ctx.data::<CatalogClient>()?;
        let artists = client
            .gene_artists(self.identifier(), page.limit, page.offset)
            .await
            .map_err(ApiError::from)?;

        Ok(build_connection(
            artists.into_iter().map(Artist::from).collect(),
            page.offset,
            TotalCountSource::FromBody(total),
        ))
    }

    /// Genes similar to this one
    ///
    /// The authoritative total comes from a response header; when the
    /// header is missing the connection is empty rather than an error.
    async fn similar_genes(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
        exclude_gene_ids: Option<Vec<String>>,
    ) -> Result<Connection<Gene>> {
        let page = ConnectionArgs::new(first, after, last, before).page_params()?;
        let exclude = exclude_gene_ids.unwrap_or_default();
        let params = similar_genes_params(self.identifier(), page.limit, page.offset, &exclude);

        let client = ctx.data::<CatalogClient>()?;
        let HeaderTotal { body, total_count } = client
            .similar_genes(&params)
            .await
            .map_err(ApiError::from)?;

        let genes: Vec<Gene> = if total_count.is_some() {
            body.into_iter().map(Gene::full).collect()
        } else {
            // Malformed upstream response: no header, no connection
            Vec::new()
        };

        Ok(build_connection(
            genes,
            page.offset,
            TotalCountSource::FromHeader(total_count),
        ))
    }

    /// Artists currently trending within this gene
    ///
    /// With `sample`, the list is randomly shuffled and truncated;
    /// without it, the catalog's ordering is preserved. This is a
    /// plain list, not a connection.
    async fn trending_artists(
        &self,
        ctx: &Context<'_>,
        sample: Option<i32>,
    ) -> Result<Vec<Artist>> {
        let loader = ctx.data::<DataLoader<TrendingArtistsLoader>>()?;
        let artists = loader
            .load_one(self.identifier().to_string())
            .await?
            .unwrap_or_default();

        let size = sample.map(|s| s.max(0) as usize);
        Ok(sampling::sample(artists, size)
            .into_iter()
            .map(Artist::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curio_catalog_client::GeneCounts;

    fn catalog_gene(slug: &str) -> CatalogGene {
        CatalogGene {
            id: format!("gene-{slug}"),
            slug: slug.to_string(),
            name: "Minimalism".to_string(),
            description: None,
            image_url: None,
            browseable: true,
            counts: GeneCounts {
                artists: 3,
                artworks: 40,
            },
        }
    }

    #[test]
    fn test_full_gene_uses_catalog_id() {
        let gene = Gene::full(catalog_gene("minimalism"));
        assert_eq!(gene.identifier(), "gene-minimalism");
        assert_eq!(gene.slug_str(), "minimalism");
    }

    #[test]
    fn test_stub_falls_back_to_slug() {
        let gene = Gene::stub("minimalism");
        assert_eq!(gene.identifier(), "minimalism");
        assert!(matches!(gene.view(), GeneView::Stub { .. }));
    }

    #[tokio::test]
    async fn test_stub_resolves_no_business_fields() {
        let gene = Gene::stub("minimalism");
        assert_eq!(gene.name().await, None);
        assert_eq!(gene.description().await, None);
        assert_eq!(gene.image_url().await, None);
        assert_eq!(gene.is_browseable().await, None);
    }
}
