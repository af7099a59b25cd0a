//! GraphQL queries for Curio
//!
//! This module contains all query resolvers, organized by domain.

mod genes;

pub use genes::GeneQuery;

use async_graphql::MergedObject;

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
pub struct Query(GeneQuery);
