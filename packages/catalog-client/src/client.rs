//! Catalog service client implementation

use std::fmt;
use std::future::Future;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Artist, FilterArtworksResponse, Gene, HeaderTotal, QueryParams};

/// Header carrying the authoritative total for header-total endpoints
const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Maximum slug / search-term length accepted by the catalog
const MAX_TERM_LENGTH: usize = 256;

/// Default number of retry attempts for transient failures
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds)
const RETRY_BASE_DELAY_MS: u64 = 100;

/// Catalog service client
#[derive(Clone)]
pub struct CatalogClient {
    http_client: Client,
    base_url: Url,
    access_token: String,
    max_retries: u32,
}

impl fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.base_url.as_str())
            .field("access_token", &"[REDACTED]")
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl CatalogClient {
    /// Create a new catalog client for the given base URL and token
    ///
    /// # Errors
    /// Returns `CatalogError::Configuration` if the base URL is empty or
    /// unparseable, or the token is empty
    pub fn new(base_url: impl AsRef<str>, access_token: impl Into<String>) -> CatalogResult<Self> {
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(CatalogError::Configuration(
                "catalog base URL is required".to_string(),
            ));
        }
        // Trailing slash so Url::join treats the last path segment as a
        // directory instead of replacing it.
        let base_url = Url::parse(&format!("{base_url}/"))
            .map_err(|e| CatalogError::Configuration(format!("invalid base URL: {e}")))?;

        let access_token = access_token.into();
        if access_token.is_empty() {
            return Err(CatalogError::Configuration(
                "catalog access token is required".to_string(),
            ));
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent("Curio/1.0")
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            access_token,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Create a catalog client from environment variables
    ///
    /// Reads `CATALOG_API_URL` and `CATALOG_API_TOKEN`.
    ///
    /// # Errors
    /// `CatalogError::Configuration` if either variable is missing or empty
    pub fn from_env() -> CatalogResult<Self> {
        let url = std::env::var("CATALOG_API_URL")
            .map_err(|_| CatalogError::Configuration("CATALOG_API_URL is not set".to_string()))?;
        let token = std::env::var("CATALOG_API_TOKEN")
            .map_err(|_| CatalogError::Configuration("CATALOG_API_TOKEN is not set".to_string()))?;
        Self::new(url, token)
    }

    /// Validate a slug or free-text term
    fn validate_term(term: &str) -> CatalogResult<&str> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::InvalidInput(
                "term cannot be empty".to_string(),
            ));
        }
        if trimmed.len() > MAX_TERM_LENGTH {
            return Err(CatalogError::InvalidInput(format!(
                "term too long (max {MAX_TERM_LENGTH} characters)"
            )));
        }
        Ok(trimmed)
    }

    /// Execute an operation with retry logic for transient failures
    async fn with_retry<T, F, Fut>(&self, operation: F) -> CatalogResult<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = CatalogResult<T>>,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay_ms = RETRY_BASE_DELAY_MS * 2u64.pow(attempt);
                    warn!(
                        attempt = attempt,
                        max_retries = self.max_retries,
                        delay_ms = delay_ms,
                        error = %e,
                        "Catalog request failed, retrying"
                    );
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Build a request URL from a path and query parameters
    ///
    /// Array-valued parameters serialize as repeated `key[]` pairs, the
    /// convention the catalog expects for multi-value filters.
    fn build_url(&self, path: &str, params: &QueryParams) -> CatalogResult<Url> {
        let mut url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| CatalogError::InvalidInput(format!("invalid path {path}: {e}")))?;

        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                match value {
                    serde_json::Value::Array(items) => {
                        let key = format!("{key}[]");
                        for item in items {
                            pairs.append_pair(&key, &json_scalar(item));
                        }
                    }
                    other => {
                        pairs.append_pair(key, &json_scalar(other));
                    }
                }
            }
        }

        Ok(url)
    }

    /// Send a GET request and map non-success statuses to errors
    async fn send(&self, url: Url) -> CatalogResult<reqwest::Response> {
        let response = self
            .http_client
            .get(url.clone())
            .header("X-Access-Token", &self.access_token)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CatalogError::Timeout
                } else {
                    CatalogError::Http(e)
                }
            })?;

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound(url.path().to_string())),
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("Catalog API rate limited");
                Err(CatalogError::RateLimited)
            }
            status => {
                let message = response.text().await.unwrap_or_default();
                Err(CatalogError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    /// GET a JSON body from a path with query parameters
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> CatalogResult<T> {
        let url = self.build_url(path, params)?;
        self.with_retry(|| async {
            let response = self.send(url.clone()).await?;
            Ok(response.json::<T>().await?)
        })
        .await
    }

    /// GET a JSON body plus the total reported by `X-Total-Count`
    async fn get_json_with_header_total<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> CatalogResult<HeaderTotal<T>> {
        let url = self.build_url(path, params)?;
        self.with_retry(|| async {
            let response = self.send(url.clone()).await?;
            let total_count = parse_total_header(response.headers());
            let body = response.json::<T>().await?;
            Ok(HeaderTotal { body, total_count })
        })
        .await
    }

    /// Fetch a single gene by slug
    #[instrument(skip(self))]
    pub async fn gene(&self, slug: &str) -> CatalogResult<Gene> {
        let slug = Self::validate_term(slug)?;
        debug!(slug = %slug, "Fetching gene from catalog");
        self.get_json(&format!("gene/{slug}"), &QueryParams::new())
            .await
    }

    /// Free-text gene match
    #[instrument(skip(self))]
    pub async fn match_genes(&self, term: &str) -> CatalogResult<Vec<Gene>> {
        let term = Self::validate_term(term)?;
        debug!(term = %term, "Matching genes in catalog");

        let mut params = QueryParams::new();
        params.insert("term".into(), term.into());
        self.get_json("match/genes", &params).await
    }

    /// Artists tagged with a gene, as an offset window into the
    /// catalog's ordering. The total for this relationship is reported
    /// on the gene body itself (`counts.artists`), not here.
    #[instrument(skip(self))]
    pub async fn gene_artists(
        &self,
        gene_id: &str,
        size: usize,
        offset: usize,
    ) -> CatalogResult<Vec<Artist>> {
        let gene_id = Self::validate_term(gene_id)?;
        debug!(gene_id = %gene_id, size, offset, "Fetching gene artists from catalog");

        let mut params = QueryParams::new();
        params.insert("size".into(), size.into());
        params.insert("offset".into(), offset.into());
        self.get_json(&format!("gene/{gene_id}/artists"), &params)
            .await
    }

    /// Filter artworks with already-translated backend parameters
    ///
    /// The response carries the aggregation side channel alongside the
    /// hits; callers read the total from the `total` aggregation.
    #[instrument(skip(self, params))]
    pub async fn filter_artworks(
        &self,
        params: &QueryParams,
    ) -> CatalogResult<FilterArtworksResponse> {
        debug!(param_count = params.len(), "Filtering artworks in catalog");
        self.get_json("filter/artworks", params).await
    }

    /// Genes similar to the given gene
    ///
    /// The authoritative total comes from the `X-Total-Count` response
    /// header; `total_count` is `None` when the header is missing.
    #[instrument(skip(self, params))]
    pub async fn similar_genes(
        &self,
        params: &QueryParams,
    ) -> CatalogResult<HeaderTotal<Vec<Gene>>> {
        debug!(param_count = params.len(), "Fetching similar genes from catalog");
        self.get_json_with_header_total("related/genes", params).await
    }

    /// Artists currently trending within a gene (unpaginated)
    #[instrument(skip(self))]
    pub async fn trending_artists(&self, gene_id: &str) -> CatalogResult<Vec<Artist>> {
        let gene_id = Self::validate_term(gene_id)?;
        debug!(gene_id = %gene_id, "Fetching trending artists from catalog");

        let mut params = QueryParams::new();
        params.insert("gene_id".into(), gene_id.into());
        self.get_json("artists/trending", &params).await
    }
}

/// Render a scalar JSON value as a query-parameter string
fn json_scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse `X-Total-Count` from response headers
fn parse_total_header(headers: &HeaderMap) -> Option<i64> {
    headers
        .get(TOTAL_COUNT_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<i64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_requires_base_url() {
        let result = CatalogClient::new("", "token");
        assert!(matches!(result, Err(CatalogError::Configuration(_))));
    }

    #[test]
    fn test_client_requires_token() {
        let result = CatalogClient::new("https://catalog.example.com", "");
        assert!(matches!(result, Err(CatalogError::Configuration(_))));
    }

    #[test]
    fn test_validate_term_rejects_empty() {
        assert!(matches!(
            CatalogClient::validate_term("   "),
            Err(CatalogError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_build_url_serializes_arrays_as_repeated_keys() {
        let client = CatalogClient::new("https://catalog.example.com/api/", "t").unwrap();
        let mut params = QueryParams::new();
        params.insert("size".into(), json!(5));
        params.insert("exclude_gene_ids".into(), json!(["a", "b"]));

        let url = client.build_url("related/genes", &params).unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("size=5"));
        assert!(query.contains("exclude_gene_ids%5B%5D=a"));
        assert!(query.contains("exclude_gene_ids%5B%5D=b"));
    }

    #[test]
    fn test_with_retry_stops_on_non_retryable_error() {
        let client = CatalogClient::new("https://catalog.example.com", "t").unwrap();
        let attempts = std::cell::Cell::new(0u32);

        let result: CatalogResult<()> = tokio_test::block_on(client.with_retry(|| {
            attempts.set(attempts.get() + 1);
            async { Err(CatalogError::NotFound("gene/nope".to_string())) }
        }));

        assert!(matches!(result, Err(CatalogError::NotFound(_))));
        assert_eq!(attempts.get(), 1);
    }

    #[test]
    fn test_parse_total_header() {
        let mut headers = HeaderMap::new();
        headers.insert(TOTAL_COUNT_HEADER, "37".parse().unwrap());
        assert_eq!(parse_total_header(&headers), Some(37));

        headers.insert(TOTAL_COUNT_HEADER, "not-a-number".parse().unwrap());
        assert_eq!(parse_total_header(&headers), None);

        assert_eq!(parse_total_header(&HeaderMap::new()), None);
    }
}
