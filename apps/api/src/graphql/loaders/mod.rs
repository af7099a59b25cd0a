//! DataLoader implementations for GraphQL
//!
//! Loaders coalesce and cache identical catalog lookups within a
//! single request. Resolvers never assume coalescing happens; each
//! issues at most one load per field and treats the loader as a plain
//! async fetch.

mod gene;
mod trending_artists;

pub use gene::GeneLoader;
pub use trending_artists::TrendingArtistsLoader;
