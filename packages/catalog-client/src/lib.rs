//! Catalog service client for Curio
//!
//! This crate provides a client for the offset-based catalog service,
//! enabling:
//! - Gene lookup by slug and free-text matching
//! - Offset/limit artwork filtering with aggregations
//! - Related-gene lookup with header-reported totals
//! - Trending-artist retrieval
//!
//! # Example
//!
//! ```rust,no_run
//! use curio_catalog_client::CatalogClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CatalogClient::new("https://catalog.example.com/api/v1", "token")?;
//!
//! let gene = client.gene("minimalism").await?;
//! println!("{}: {} artworks", gene.name, gene.counts.artworks);
//!
//! let artists = client.gene_artists(&gene.id, 10, 0).await?;
//! for artist in artists {
//!     println!("{}", artist.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOG_API_URL`: base URL of the catalog service (required)
//! - `CATALOG_API_TOKEN`: access token sent on every request (required)

mod client;
mod error;
mod models;

pub use client::CatalogClient;
pub use error::{CatalogError, CatalogResult};
pub use models::{
    Artist, Artwork, FilterArtworksResponse, Gene, GeneCounts, HeaderTotal, QueryParams,
};
