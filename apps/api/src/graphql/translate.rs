//! Caller-to-backend argument translation
//!
//! The API surface speaks camelCase, the catalog speaks snake_case and
//! has a handful of special-cased parameters. Translation is a pure
//! function over JSON maps: a static rename table, a pass-through
//! bucket for unrecognized keys, and the medium / aggregation /
//! parent-id rules applied on top.

use curio_catalog_client::QueryParams;
use serde_json::{Map, Value};

/// Caller-facing filter arguments, keyed in camelCase
pub type FilterArgs = Map<String, Value>;

/// Medium value meaning "no medium filter"; the catalog rejects a
/// literal `*`, so the key is dropped instead
pub const MEDIUM_WILDCARD: &str = "*";

/// Aggregation the slicing logic always needs
const TOTAL_AGGREGATION: &str = "total";

/// Static caller-name / backend-name pairs. Keys absent from this
/// table pass through unchanged in either direction.
const RENAMES: &[(&str, &str)] = &[
    ("artistId", "artist_id"),
    ("artistIds", "artist_ids"),
    ("geneId", "gene_id"),
    ("medium", "medium"),
    ("priceRange", "price_range"),
    ("dimensionRange", "dimension_range"),
    ("forSale", "for_sale"),
    ("atAuction", "at_auction"),
    ("inquireableOnly", "inquireable_only"),
    ("partnerCities", "partner_cities"),
    ("aggregationPartnerCities", "aggregation_partner_cities"),
    ("excludeGeneIds", "exclude_gene_ids"),
    ("totalCount", "total_count"),
];

/// Backend name for a caller-facing key
pub fn to_backend_name(name: &str) -> &str {
    RENAMES
        .iter()
        .find(|(caller, _)| *caller == name)
        .map(|(_, backend)| *backend)
        .unwrap_or(name)
}

/// Caller-facing name for a backend key; the reverse direction only
/// backs the table's consistency check
#[cfg(test)]
fn to_caller_name(name: &str) -> &str {
    RENAMES
        .iter()
        .find(|(_, backend)| *backend == name)
        .map(|(caller, _)| *caller)
        .unwrap_or(name)
}

/// Translate caller-facing artwork filter arguments into catalog
/// query parameters
///
/// - keys rename per the static table; unrecognized keys pass through
/// - null values drop
/// - `medium` drops entirely when absent or the wildcard
/// - the `total` aggregation is always requested, whatever the caller
///   asked for, so the connection builder has a length to slice with
pub fn translate_artwork_filters(args: &FilterArgs) -> QueryParams {
    let mut params = QueryParams::new();
    for (key, value) in args {
        if value.is_null() {
            continue;
        }
        params.insert(to_backend_name(key).to_string(), value.clone());
    }

    if matches!(params.get("medium"), Some(Value::String(s)) if s == MEDIUM_WILDCARD) {
        params.remove("medium");
    }

    let aggregations = params
        .entry("aggregations")
        .or_insert_with(|| Value::Array(Vec::new()));
    if let Value::Array(list) = aggregations {
        if !list.iter().any(|v| v == TOTAL_AGGREGATION) {
            list.push(TOTAL_AGGREGATION.into());
        }
    } else {
        *aggregations = Value::Array(vec![TOTAL_AGGREGATION.into()]);
    }

    params
}

/// Translate artwork filters for a query scoped to a gene
///
/// The gene id is force-set from the resolving node's own identifier;
/// the relationship is structural, so any client-supplied `geneId` is
/// overridden.
pub fn translate_gene_artwork_filters(gene_id: &str, args: &FilterArgs) -> QueryParams {
    let mut params = translate_artwork_filters(args);
    params.insert("gene_id".to_string(), gene_id.into());
    params
}

/// Build the parameters for a similar-genes query
///
/// Only a fixed subset is ever forwarded: the offset window, the
/// exclusion list, and the flag asking the catalog to report a total.
/// Arbitrary filter arguments are not applicable to this endpoint.
pub fn similar_genes_params(
    gene_id: &str,
    limit: usize,
    offset: usize,
    exclude_gene_ids: &[String],
) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert("gene_id".to_string(), gene_id.into());
    params.insert("size".to_string(), limit.into());
    params.insert("offset".to_string(), offset.into());
    if !exclude_gene_ids.is_empty() {
        params.insert(
            "exclude_gene_ids".to_string(),
            Value::Array(exclude_gene_ids.iter().map(|id| id.as_str().into()).collect()),
        );
    }
    params.insert("total_count".to_string(), true.into());
    params
}
