//! Artwork GraphQL type, filter input, and connection
//!
//! The artwork connection carries the aggregation side channel merged
//! alongside the relay fields; merging never touches edges or pageInfo.

use async_graphql::{InputObject, Json, Object, SimpleObject, ID};
use curio_catalog_client::Artwork as CatalogArtwork;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::graphql::relay::{Connection, Edge, PageInfo};
use crate::graphql::translate::FilterArgs;

/// Artwork information exposed via GraphQL
#[derive(Clone)]
pub struct Artwork {
    inner: CatalogArtwork,
}

impl From<CatalogArtwork> for Artwork {
    fn from(artwork: CatalogArtwork) -> Self {
        Self { inner: artwork }
    }
}

#[Object]
impl Artwork {
    /// Stable artwork identifier
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    /// Artwork title
    async fn title(&self) -> &str {
        &self.inner.title
    }

    /// Date as free text (e.g. "ca. 1955")
    async fn date(&self) -> Option<&str> {
        self.inner.date.as_deref()
    }

    /// Medium (e.g. "oil", "photography")
    async fn medium(&self) -> Option<&str> {
        self.inner.medium.as_deref()
    }

    /// Names of the attributed artists
    async fn artist_names(&self) -> Option<&str> {
        self.inner.artist_names.as_deref()
    }

    /// URL to a representative image
    async fn image_url(&self) -> Option<&str> {
        self.inner.image_url.as_deref()
    }
}

/// Caller-facing artwork filter arguments
///
/// Serializes to the camelCase shape the argument translator consumes;
/// `extra` is a pass-through bucket for parameters this schema does not
/// model yet.
#[derive(Debug, Clone, Default, InputObject, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkFilterInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_sale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_auction: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inquireable_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_cities: Option<Vec<String>>,
    /// Aggregations to request alongside the hits; `total` is added
    /// automatically
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<String>>,
    /// Forward-compatible pass-through parameters, already camelCase
    #[serde(skip)]
    pub extra: Option<Json<Map<String, Value>>>,
}

impl ArtworkFilterInput {
    /// Flatten into the caller-facing argument map the translator
    /// expects, with `extra` keys merged in (typed fields win)
    pub fn into_args(self) -> FilterArgs {
        let extra = self.extra.clone();
        let mut args = match serde_json::to_value(&self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        if let Some(Json(extra)) = extra {
            for (key, value) in extra {
                args.entry(key).or_insert(value);
            }
        }
        args
    }
}

/// Counts side channel on an artwork connection
#[derive(Debug, Clone, SimpleObject)]
pub struct ArtworkCounts {
    /// Total artworks matching the filter
    pub total: i64,
}

/// Artwork connection with the aggregation side channel attached
#[derive(Clone, SimpleObject)]
pub struct ArtworkConnection {
    /// Artworks in this window, in upstream order
    pub edges: Vec<Edge<Artwork>>,
    /// Relay page metadata
    pub page_info: PageInfo,
    /// Total artworks matching the filter
    pub total_count: i64,
    /// Opaque aggregation payload keyed by aggregation name
    pub aggregations: Json<Map<String, Value>>,
    /// Counts derived from the aggregations
    pub counts: ArtworkCounts,
}

impl ArtworkConnection {
    /// Attach the aggregation side channel to a built connection
    ///
    /// Edges and page info transfer untouched and in order.
    pub fn merge(connection: Connection<Artwork>, aggregations: Map<String, Value>) -> Self {
        let total = connection.total_count;
        Self {
            edges: connection.edges,
            page_info: connection.page_info,
            total_count: total,
            aggregations: Json(aggregations),
            counts: ArtworkCounts { total },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::relay::{build_connection, TotalCountSource};
    use serde_json::json;

    fn artwork(id: &str) -> Artwork {
        Artwork::from(CatalogArtwork {
            id: id.to_string(),
            title: format!("Untitled ({id})"),
            date: None,
            medium: None,
            artist_names: None,
            image_url: None,
        })
    }

    #[test]
    fn test_filter_input_serializes_camel_case() {
        let input = ArtworkFilterInput {
            artist_id: Some("warhol".into()),
            for_sale: Some(true),
            ..Default::default()
        };
        let args = input.into_args();
        assert_eq!(args.get("artistId"), Some(&json!("warhol")));
        assert_eq!(args.get("forSale"), Some(&json!(true)));
        assert!(!args.contains_key("medium"));
    }

    #[test]
    fn test_extra_args_merge_without_overriding_typed_fields() {
        let mut extra = Map::new();
        extra.insert("newFlag".to_string(), json!(1));
        extra.insert("artistId".to_string(), json!("spoofed"));

        let input = ArtworkFilterInput {
            artist_id: Some("warhol".into()),
            extra: Some(Json(extra)),
            ..Default::default()
        };
        let args = input.into_args();
        assert_eq!(args.get("newFlag"), Some(&json!(1)));
        assert_eq!(args.get("artistId"), Some(&json!("warhol")));
    }

    #[test]
    fn test_merge_preserves_edges_and_page_info() {
        let connection = build_connection(
            vec![artwork("a"), artwork("b")],
            4,
            TotalCountSource::FromBody(9),
        );
        let cursors: Vec<String> = connection.edges.iter().map(|e| e.cursor.clone()).collect();

        let mut aggregations = Map::new();
        aggregations.insert("total".to_string(), json!({ "value": 9 }));
        let merged = ArtworkConnection::merge(connection, aggregations);

        let merged_cursors: Vec<String> = merged.edges.iter().map(|e| e.cursor.clone()).collect();
        assert_eq!(merged_cursors, cursors);
        assert!(merged.page_info.has_next_page);
        assert!(merged.page_info.has_previous_page);
        assert_eq!(merged.counts.total, 9);
        assert_eq!(merged.total_count, 9);
    }
}
