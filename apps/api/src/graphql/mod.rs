//! GraphQL schema and resolvers for Curio
//!
//! This module contains the async-graphql schema including:
//! - The relay pagination adapter over the offset-based catalog
//! - Field-demand analysis and caller-to-backend argument translation
//! - Query resolvers and type definitions for genes, artworks, artists
//! - DataLoaders batching catalog lookups

pub mod demand;
pub mod loaders;
pub mod query;
pub mod relay;
pub mod sample;
pub mod schema;
pub mod translate;
pub mod types;

pub use schema::{build_schema, CurioSchema, SchemaBuilder};
