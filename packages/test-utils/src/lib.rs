//! Shared test utilities for the Curio workspace
//!
//! This crate provides a mock implementation of the catalog service for
//! testing without network dependencies. The mock is shared between the
//! catalog-client and API test suites.
//!
//! # Mock Services
//!
//! - [`MockCatalogServer`] - Mock catalog service covering gene lookup,
//!   artwork filtering, similar genes, and trending artists
//!
//! # Example
//!
//! ```rust,ignore
//! use curio_test_utils::{GeneFixture, MockCatalogServer};
//!
//! #[tokio::test]
//! async fn test_with_mock_catalog() {
//!     let catalog = MockCatalogServer::start().await;
//!     catalog
//!         .mock_gene(GeneFixture::new("minimalism", "Minimalism"))
//!         .await;
//!
//!     // Configure your CatalogClient with catalog.url()
//! }
//! ```

mod catalog;

pub use catalog::{ArtistFixture, ArtworkFixture, GeneFixture, MockCatalogServer};
