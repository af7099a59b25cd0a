//! Connection reconstruction from offset slices
//!
//! Rebuilds a relay connection from a flat slice, the slice's starting
//! offset, and the total logical length the upstream reported. Side
//! channels (aggregations, counts) never live here; entity-specific
//! connection types attach them alongside the built edges.

use async_graphql::{OutputType, SimpleObject};

use crate::graphql::types::{Artist, Artwork, Gene};

use super::cursor;

/// Where the total logical length of a paginated relationship comes
/// from. The catalog is inconsistent about this: filter endpoints
/// report it in the body (a `total` aggregation or a counts field),
/// related-entity endpoints report it in the `X-Total-Count` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalCountSource {
    /// Total carried in the response body
    FromBody(i64),
    /// Total parsed from a response header; `None` when the header was
    /// absent or unparseable
    FromHeader(Option<i64>),
}

impl TotalCountSource {
    /// Resolve the authoritative total
    ///
    /// A missing header total is a recoverable default of 0, not an
    /// error; negative reports clamp to 0.
    pub fn total(&self) -> usize {
        let raw = match self {
            TotalCountSource::FromBody(total) => *total,
            TotalCountSource::FromHeader(total) => total.unwrap_or(0),
        };
        raw.max(0) as usize
    }
}

/// Relay page metadata
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct PageInfo {
    /// Whether more items exist past the end of this page
    pub has_next_page: bool,
    /// Whether items exist before the start of this page
    pub has_previous_page: bool,
    /// Cursor of the first edge, absent on empty pages
    pub start_cursor: Option<String>,
    /// Cursor of the last edge, absent on empty pages
    pub end_cursor: Option<String>,
}

/// A single item paired with its position cursor
#[derive(Clone, SimpleObject)]
#[graphql(concrete(name = "ArtistEdge", params(Artist)))]
#[graphql(concrete(name = "ArtworkEdge", params(Artwork)))]
#[graphql(concrete(name = "GeneEdge", params(Gene)))]
#[cfg_attr(test, graphql(concrete(name = "IntEdge", params(i32))))]
pub struct Edge<T: OutputType> {
    /// Opaque cursor addressing this item's absolute position
    pub cursor: String,
    /// The item itself
    pub node: T,
}

/// A paginated result window
#[derive(Clone, SimpleObject)]
#[graphql(concrete(name = "ArtistConnection", params(Artist)))]
#[graphql(concrete(name = "GeneConnection", params(Gene)))]
pub struct Connection<T: OutputType>
where
    Edge<T>: OutputType,
{
    /// Items in this window, in upstream order
    pub edges: Vec<Edge<T>>,
    /// Relay page metadata
    pub page_info: PageInfo,
    /// Total logical length of the relationship
    pub total_count: i64,
}

/// Build a connection from an ordered slice
///
/// `edges[k].cursor` decodes to `slice_start + k`. Page flags clamp to
/// the authoritative total when the upstream reports a slice extending
/// past it; the connection stays serializable either way. An empty
/// slice with total 0 yields a well-formed empty connection.
pub fn build_connection<T: OutputType>(
    items: Vec<T>,
    slice_start: usize,
    source: TotalCountSource,
) -> Connection<T>
where
    Edge<T>: OutputType,
{
    let total = source.total();

    let edges: Vec<Edge<T>> = items
        .into_iter()
        .enumerate()
        .map(|(k, node)| Edge {
            cursor: cursor::encode(slice_start + k),
            node,
        })
        .collect();

    let page_info = PageInfo {
        has_next_page: slice_start + edges.len() < total,
        has_previous_page: slice_start > 0,
        start_cursor: edges.first().map(|e| e.cursor.clone()),
        end_cursor: edges.last().map(|e| e.cursor.clone()),
    };

    Connection {
        edges,
        page_info,
        total_count: total as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::relay::cursor::{decode, encode};

    fn edge_indexes<T: OutputType>(connection: &Connection<T>) -> Vec<usize>
    where
        Edge<T>: OutputType,
    {
        connection
            .edges
            .iter()
            .map(|e| decode(&e.cursor).unwrap())
            .collect()
    }

    #[test]
    fn test_middle_window_has_both_pages() {
        let connection = build_connection(vec![30, 40, 50, 60], 3, TotalCountSource::FromBody(10));

        assert_eq!(edge_indexes(&connection), vec![3, 4, 5, 6]);
        assert!(connection.page_info.has_next_page);
        assert!(connection.page_info.has_previous_page);
        assert_eq!(connection.page_info.start_cursor, Some(encode(3)));
        assert_eq!(connection.page_info.end_cursor, Some(encode(6)));
        assert_eq!(connection.total_count, 10);
    }

    #[test]
    fn test_empty_connection_is_well_formed() {
        let connection = build_connection(Vec::<i32>::new(), 0, TotalCountSource::FromBody(0));

        assert!(connection.edges.is_empty());
        assert!(!connection.page_info.has_next_page);
        assert!(!connection.page_info.has_previous_page);
        assert_eq!(connection.page_info.start_cursor, None);
        assert_eq!(connection.page_info.end_cursor, None);
        assert_eq!(connection.total_count, 0);
    }

    #[test]
    fn test_last_window_has_no_next_page() {
        let connection = build_connection(vec![1, 2], 8, TotalCountSource::FromBody(10));
        assert!(!connection.page_info.has_next_page);
        assert!(connection.page_info.has_previous_page);
    }

    #[test]
    fn test_inconsistent_slice_clamps_flags() {
        // upstream claims total 3 but returned 5 items from offset 2
        let connection = build_connection(vec![1, 2, 3, 4, 5], 2, TotalCountSource::FromBody(3));
        assert!(!connection.page_info.has_next_page);
        assert_eq!(connection.edges.len(), 5);
        assert_eq!(connection.total_count, 3);
    }

    #[test]
    fn test_header_total_missing_defaults_to_zero() {
        let connection =
            build_connection(Vec::<i32>::new(), 0, TotalCountSource::FromHeader(None));
        assert_eq!(connection.total_count, 0);
        assert!(!connection.page_info.has_next_page);
    }

    #[test]
    fn test_header_total_present() {
        let connection = build_connection(vec![1, 2], 0, TotalCountSource::FromHeader(Some(7)));
        assert_eq!(connection.total_count, 7);
        assert!(connection.page_info.has_next_page);
    }

    #[test]
    fn test_negative_body_total_clamps_to_zero() {
        assert_eq!(TotalCountSource::FromBody(-4).total(), 0);
    }
}
