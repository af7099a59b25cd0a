//! Field-demand analysis
//!
//! Decides, per request, whether an entity fetch against the catalog
//! is required at all. A client that only asks for fields derivable
//! from an identifier (or only paginates into a sub-connection that
//! re-derives its own parameters from that identifier) gets a stub
//! entity instead of an authenticated round trip.

use async_graphql::Context;

/// Gene fields resolvable without a catalog fetch
///
/// `artworks` is cheap because the artwork filter forces the gene id
/// into its backend parameters from the resolving node itself.
pub const GENE_CHEAP_FIELDS: &[&str] = &["id", "slug", "artworks"];

/// Field names requested on the current node
pub fn requested_fields<'a>(ctx: &'a Context<'_>) -> Vec<&'a str> {
    ctx.field().selection_set().map(|field| field.name()).collect()
}

/// Whether any requested field falls outside the cheap allow-list
///
/// Introspection meta fields (`__typename`) never force a fetch.
pub fn fetch_required<'a>(requested: impl IntoIterator<Item = &'a str>, cheap: &[&str]) -> bool {
    requested
        .into_iter()
        .any(|field| !field.starts_with("__") && !cheap.contains(&field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_cheap_fields_skip_the_fetch() {
        assert!(!fetch_required(["id", "slug"], GENE_CHEAP_FIELDS));
        assert!(!fetch_required(["id", "artworks"], GENE_CHEAP_FIELDS));
    }

    #[test]
    fn test_any_expensive_field_forces_the_fetch() {
        assert!(fetch_required(["id", "name"], GENE_CHEAP_FIELDS));
        assert!(fetch_required(["artists"], GENE_CHEAP_FIELDS));
    }

    #[test]
    fn test_typename_is_always_cheap() {
        assert!(!fetch_required(["__typename", "id"], GENE_CHEAP_FIELDS));
    }

    #[test]
    fn test_empty_selection_skips_the_fetch() {
        assert!(!fetch_required([], GENE_CHEAP_FIELDS));
    }
}
