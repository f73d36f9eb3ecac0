//! Integration tests for the search pipeline
//!
//! These drive a real `SearchClient` against a wiremock stand-in for the
//! Open Library API and cover the full fetch-normalize path: the happy
//! "Dune" scenario, truncation, the no-results path, and the collapsed
//! error cases (bad status, malformed body).

use bookfinder_core::{ApiConfig, CoverSize, SearchClient, SearchError, SearchOutcome};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client pointed at the mock server
fn mock_client(server: &MockServer) -> SearchClient {
    SearchClient::new(ApiConfig {
        search_base: format!("{}/search.json", server.uri()),
        covers_base: format!("{}/b/id", server.uri()),
    })
}

#[tokio::test]
async fn test_dune_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("title", "Dune"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [{
                "title": "Dune",
                "author_name": ["Frank Herbert"],
                "first_publish_year": 1965,
                "cover_i": 12345
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let outcome = client.search("Dune").await.unwrap();

    let SearchOutcome::Results(records) = outcome else {
        panic!("expected results");
    };
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Dune");
    assert_eq!(records[0].author_line(), "Frank Herbert");
    assert_eq!(records[0].year_display(), "1965");

    let cover = client
        .config()
        .cover_url(records[0].cover_id.unwrap(), CoverSize::Medium);
    assert!(cover.ends_with("/12345-M.jpg"));
}

#[tokio::test]
async fn test_empty_query_never_hits_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    assert!(matches!(
        client.search("   ").await,
        Err(SearchError::EmptyQuery)
    ));
}

#[tokio::test]
async fn test_empty_docs_signals_no_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "docs": [] })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    assert_eq!(
        client.search("nothing").await.unwrap(),
        SearchOutcome::NoResults
    );
}

#[tokio::test]
async fn test_more_than_twenty_docs_truncated() {
    let docs: Vec<_> = (0..30).map(|i| json!({ "title": format!("Book {}", i) })).collect();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "docs": docs })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let SearchOutcome::Results(records) = client.search("books").await.unwrap() else {
        panic!("expected results");
    };
    assert_eq!(records.len(), 20);
    assert_eq!(records[19].title, "Book 19");
}

#[tokio::test]
async fn test_missing_author_renders_unknown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [{ "title": "Beowulf", "first_publish_year": 1000 }]
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let SearchOutcome::Results(records) = client.search("Beowulf").await.unwrap() else {
        panic!("expected results");
    };
    assert_eq!(records[0].author_line(), "Unknown");
    assert_eq!(records[0].cover_id, None);
}

#[tokio::test]
async fn test_server_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    assert!(matches!(
        client.search("Dune").await,
        Err(SearchError::Status(500))
    ));
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    assert!(matches!(
        client.search("Dune").await,
        Err(SearchError::Decode(_))
    ));
}

#[tokio::test]
async fn test_fetch_cover_returns_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/b/id/12345-L.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF]))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let bytes = client.fetch_cover(12345, CoverSize::Large).await.unwrap();
    assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF]);
}

#[tokio::test]
async fn test_fetch_cover_missing_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/b/id/999-L.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    assert!(matches!(
        client.fetch_cover(999, CoverSize::Large).await,
        Err(SearchError::Status(404))
    ));
}
