//! GraphQL type definitions for Curio
//!
//! Object types wrap the catalog models; the gene type additionally
//! distinguishes fully fetched genes from identifier-only stubs.

mod artist;
mod artwork;
mod gene;

pub use artist::Artist;
pub use artwork::{Artwork, ArtworkConnection, ArtworkCounts, ArtworkFilterInput};
pub use gene::{Gene, GeneView};
