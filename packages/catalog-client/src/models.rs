//! Catalog service response models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Backend query parameters, already in the catalog's snake_case shape.
///
/// Values may be strings, numbers, booleans, or arrays of strings; the
/// client serializes arrays as repeated `key[]` query pairs.
pub type QueryParams = Map<String, Value>;

/// A gene (category) record from the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gene {
    /// Stable catalog identifier
    pub id: String,
    /// URL slug, unique per gene
    pub slug: String,
    /// Display name
    pub name: String,
    /// Longer-form description (markdown)
    #[serde(default)]
    pub description: Option<String>,
    /// Representative image
    #[serde(default)]
    pub image_url: Option<String>,
    /// Whether the gene is surfaced in browse UIs
    #[serde(default)]
    pub browseable: bool,
    /// Relationship counts reported by the catalog
    #[serde(default)]
    pub counts: GeneCounts,
}

/// Relationship counts carried on a gene body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneCounts {
    /// Number of artists tagged with this gene
    #[serde(default)]
    pub artists: i64,
    /// Number of artworks tagged with this gene
    #[serde(default)]
    pub artworks: i64,
}

/// An artist record from the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    /// Stable catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Nationality, when known
    #[serde(default)]
    pub nationality: Option<String>,
    /// Birth year or date as free text
    #[serde(default)]
    pub birthday: Option<String>,
    /// Representative image
    #[serde(default)]
    pub image_url: Option<String>,
}

/// An artwork hit from the filter endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artwork {
    /// Stable catalog identifier
    pub id: String,
    /// Artwork title
    pub title: String,
    /// Date as free text (e.g. "ca. 1955")
    #[serde(default)]
    pub date: Option<String>,
    /// Medium (e.g. "oil", "photography")
    #[serde(default)]
    pub medium: Option<String>,
    /// Names of the attributed artists
    #[serde(default)]
    pub artist_names: Option<String>,
    /// Representative image
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Response from the artwork filter endpoint: aggregation side channel
/// plus the matching hits for the requested offset window.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterArtworksResponse {
    /// Opaque aggregation payload keyed by aggregation name. The
    /// `total` aggregation carries `{ "value": <count> }`.
    #[serde(default)]
    pub aggregations: Map<String, Value>,
    /// Matching artworks for the requested window
    #[serde(default)]
    pub hits: Vec<Artwork>,
}

impl FilterArtworksResponse {
    /// Total hit count from the `total` aggregation, when present
    pub fn total(&self) -> Option<i64> {
        self.aggregations
            .get("total")
            .and_then(|agg| agg.get("value"))
            .and_then(Value::as_i64)
    }
}

/// A response body paired with a total count parsed from a response
/// header rather than the body itself.
#[derive(Debug, Clone)]
pub struct HeaderTotal<T> {
    /// Deserialized response body
    pub body: T,
    /// Total reported by the `X-Total-Count` header; `None` when the
    /// header was absent or unparseable
    pub total_count: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_response_total() {
        let response: FilterArtworksResponse = serde_json::from_value(json!({
            "aggregations": { "total": { "value": 42 }, "medium": { "oil": 7 } },
            "hits": []
        }))
        .unwrap();
        assert_eq!(response.total(), Some(42));
    }

    #[test]
    fn test_filter_response_missing_total() {
        let response: FilterArtworksResponse = serde_json::from_value(json!({
            "aggregations": {},
            "hits": []
        }))
        .unwrap();
        assert_eq!(response.total(), None);
    }

    #[test]
    fn test_gene_defaults() {
        let gene: Gene = serde_json::from_value(json!({
            "id": "g1",
            "slug": "minimalism",
            "name": "Minimalism"
        }))
        .unwrap();
        assert_eq!(gene.counts.artists, 0);
        assert!(gene.description.is_none());
        assert!(!gene.browseable);
    }
}
