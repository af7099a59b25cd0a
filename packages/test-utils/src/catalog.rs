//! Mock catalog server for testing the GraphQL gateway
//!
//! Provides a [`MockCatalogServer`] that simulates catalog service
//! endpoints so client and resolver tests run without a real catalog.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock catalog server
///
/// Wraps a [`wiremock::MockServer`] and provides convenience methods for
/// setting up common catalog responses, including the header-total and
/// aggregation response shapes.
///
/// # Example
///
/// ```rust,ignore
/// use curio_test_utils::{GeneFixture, MockCatalogServer};
///
/// #[tokio::test]
/// async fn test_gene_lookup() {
///     let catalog = MockCatalogServer::start().await;
///     catalog
///         .mock_gene(GeneFixture::new("minimalism", "Minimalism").with_counts(12, 340))
///         .await;
///
///     // Configure your CatalogClient with catalog.url() and catalog.token()
/// }
/// ```
pub struct MockCatalogServer {
    server: MockServer,
    token: String,
}

impl MockCatalogServer {
    /// Start a new mock catalog server with the default access token
    pub async fn start() -> Self {
        Self::start_with_token("test-token").await
    }

    /// Start a new mock catalog server with a custom access token
    pub async fn start_with_token(token: &str) -> Self {
        let server = MockServer::start().await;
        Self {
            server,
            token: token.to_string(),
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Get the access token the mocks expect
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Mount a mock for a successful gene lookup
    pub async fn mock_gene(&self, gene: GeneFixture) {
        Mock::given(method("GET"))
            .and(path(format!("/gene/{}", gene.slug)))
            .and(header("X-Access-Token", self.token.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(gene.to_json()))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock returning 404 for a gene slug
    pub async fn mock_gene_not_found(&self, slug: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/gene/{slug}")))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": "Gene Not Found"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for free-text gene matching
    pub async fn mock_match_genes(&self, term: &str, genes: Vec<GeneFixture>) {
        let body: Vec<serde_json::Value> = genes.into_iter().map(|g| g.to_json()).collect();

        Mock::given(method("GET"))
            .and(path("/match/genes"))
            .and(query_param("term", term))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for a gene's artists (plain array body)
    pub async fn mock_gene_artists(&self, gene_id: &str, artists: Vec<ArtistFixture>) {
        let body: Vec<serde_json::Value> = artists.into_iter().map(|a| a.to_json()).collect();

        Mock::given(method("GET"))
            .and(path(format!("/gene/{gene_id}/artists")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for the artwork filter endpoint
    ///
    /// The response carries `{ aggregations, hits }`; a `total`
    /// aggregation with the given value is always included, mirroring
    /// what the catalog returns when `total` is requested.
    pub async fn mock_filter_artworks(&self, total: i64, hits: Vec<ArtworkFixture>) {
        let hits_json: Vec<serde_json::Value> = hits.into_iter().map(|a| a.to_json()).collect();

        Mock::given(method("GET"))
            .and(path("/filter/artworks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "aggregations": { "total": { "value": total } },
                "hits": hits_json,
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for similar genes with an `X-Total-Count` header
    pub async fn mock_similar_genes(&self, genes: Vec<GeneFixture>, total: i64) {
        let body: Vec<serde_json::Value> = genes.into_iter().map(|g| g.to_json()).collect();

        Mock::given(method("GET"))
            .and(path("/related/genes"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .insert_header("X-Total-Count", total.to_string().as_str()),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for similar genes WITHOUT the total header
    ///
    /// Simulates the malformed-upstream case the gateway must tolerate.
    pub async fn mock_similar_genes_missing_total(&self, genes: Vec<GeneFixture>) {
        let body: Vec<serde_json::Value> = genes.into_iter().map(|g| g.to_json()).collect();

        Mock::given(method("GET"))
            .and(path("/related/genes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for a gene's trending artists
    pub async fn mock_trending_artists(&self, gene_id: &str, artists: Vec<ArtistFixture>) {
        let body: Vec<serde_json::Value> = artists.into_iter().map(|a| a.to_json()).collect();

        Mock::given(method("GET"))
            .and(path("/artists/trending"))
            .and(query_param("gene_id", gene_id))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a catch-all 500 response for a path
    pub async fn mock_server_error(&self, endpoint_path: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint_path))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the server has received so far
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|reqs| reqs.len())
            .unwrap_or(0)
    }

    /// Query strings of requests received for a path, in arrival order
    pub async fn query_strings(&self, endpoint_path: &str) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == endpoint_path)
            .map(|request| request.url.query().unwrap_or("").to_string())
            .collect()
    }
}

/// Builder for gene response bodies
#[derive(Debug, Clone)]
pub struct GeneFixture {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub artist_count: i64,
    pub artwork_count: i64,
}

impl GeneFixture {
    /// Create a gene fixture with the given slug and name
    pub fn new(slug: &str, name: &str) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            description: None,
            artist_count: 0,
            artwork_count: 0,
        }
    }

    /// Set a description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Set relationship counts
    pub fn with_counts(mut self, artists: i64, artworks: i64) -> Self {
        self.artist_count = artists;
        self.artwork_count = artworks;
        self
    }

    /// Render as a catalog response body
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "id": format!("gene-{}", self.slug),
            "slug": self.slug,
            "name": self.name,
            "description": self.description,
            "image_url": format!("https://img.example.com/genes/{}.jpg", self.slug),
            "browseable": true,
            "counts": {
                "artists": self.artist_count,
                "artworks": self.artwork_count,
            },
        })
    }
}

/// Builder for artist response bodies
#[derive(Debug, Clone)]
pub struct ArtistFixture {
    pub id: String,
    pub name: String,
}

impl ArtistFixture {
    /// Create an artist fixture
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    /// Render as a catalog response body
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "id": self.id,
            "name": self.name,
            "nationality": "American",
            "birthday": "1930",
            "image_url": format!("https://img.example.com/artists/{}.jpg", self.id),
        })
    }
}

/// Builder for artwork response bodies
#[derive(Debug, Clone)]
pub struct ArtworkFixture {
    pub id: String,
    pub title: String,
    pub medium: Option<String>,
}

impl ArtworkFixture {
    /// Create an artwork fixture
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            medium: None,
        }
    }

    /// Set a medium
    pub fn with_medium(mut self, medium: &str) -> Self {
        self.medium = Some(medium.to_string());
        self
    }

    /// Render as a catalog response body
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "id": self.id,
            "title": self.title,
            "date": "1968",
            "medium": self.medium,
            "artist_names": "Unknown Artist",
            "image_url": format!("https://img.example.com/artworks/{}.jpg", self.id),
        })
    }
}
