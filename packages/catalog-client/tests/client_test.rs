//! Integration tests for the catalog client against a wiremock server

use curio_catalog_client::{CatalogClient, CatalogError};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::new(server.uri(), "test-token").unwrap()
}

#[tokio::test]
async fn gene_fetch_sends_access_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gene/minimalism"))
        .and(header("X-Access-Token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "gene-minimalism",
            "slug": "minimalism",
            "name": "Minimalism",
            "counts": { "artists": 3, "artworks": 40 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gene = client_for(&server).await.gene("minimalism").await.unwrap();
    assert_eq!(gene.id, "gene-minimalism");
    assert_eq!(gene.counts.artworks, 40);
}

#[tokio::test]
async fn missing_gene_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gene/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "not found" })))
        .mount(&server)
        .await;

    let err = client_for(&server).await.gene("nope").await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[tokio::test]
async fn transient_failure_retries_until_success() {
    let server = MockServer::start().await;
    // first attempt fails, retry succeeds
    Mock::given(method("GET"))
        .and(path("/gene/minimalism"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gene/minimalism"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "gene-minimalism",
            "slug": "minimalism",
            "name": "Minimalism"
        })))
        .mount(&server)
        .await;

    let gene = client_for(&server).await.gene("minimalism").await.unwrap();
    assert_eq!(gene.slug, "minimalism");
}

#[tokio::test]
async fn filter_artworks_parses_aggregation_side_channel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filter/artworks"))
        .and(query_param("gene_id", "gene-minimalism"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "aggregations": {
                "total": { "value": 21 },
                "medium": { "oil": 7, "sculpture": 14 }
            },
            "hits": [
                { "id": "a1", "title": "Untitled" }
            ]
        })))
        .mount(&server)
        .await;

    let mut params = curio_catalog_client::QueryParams::new();
    params.insert("gene_id".into(), "gene-minimalism".into());

    let response = client_for(&server)
        .await
        .filter_artworks(&params)
        .await
        .unwrap();
    assert_eq!(response.total(), Some(21));
    assert_eq!(response.hits.len(), 1);
    assert!(response.aggregations.contains_key("medium"));
}

#[tokio::test]
async fn similar_genes_reads_header_total() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/related/genes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([
                    { "id": "gene-hard-edge", "slug": "hard-edge", "name": "Hard Edge" }
                ]))
                .insert_header("X-Total-Count", "12"),
        )
        .mount(&server)
        .await;

    let result = client_for(&server)
        .await
        .similar_genes(&curio_catalog_client::QueryParams::new())
        .await
        .unwrap();
    assert_eq!(result.total_count, Some(12));
    assert_eq!(result.body.len(), 1);
}

#[tokio::test]
async fn similar_genes_tolerates_missing_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/related/genes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .await
        .similar_genes(&curio_catalog_client::QueryParams::new())
        .await
        .unwrap();
    assert_eq!(result.total_count, None);
}
