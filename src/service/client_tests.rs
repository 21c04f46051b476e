//! Tests for SuggestionClient against a mock suggestion service

use mockito::{Matcher, Server, ServerGuard};

use super::*;
use crate::test_utils::test_helpers::ASPIRIN_JSON;

fn client_for(base: &str) -> SuggestionClient {
    let base_url = endpoint::parse_base_url(base).unwrap();
    SuggestionClient::new(base_url, Duration::from_secs(5)).unwrap()
}

async fn serve(server: &mut ServerGuard, query: &str, status: usize, body: &str) -> mockito::Mock {
    server
        .mock("GET", "/products/api/search")
        .match_query(Matcher::UrlEncoded("q".into(), query.into()))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

#[test]
fn test_from_config_rejects_bad_base_url() {
    let config = ServiceConfig {
        base_url: "not a url".to_string(),
        timeout_ms: 100,
    };
    assert!(matches!(
        SuggestionClient::from_config(&config),
        Err(SearchError::InvalidBaseUrl { .. })
    ));
}

#[tokio::test]
async fn test_search_requests_endpoint_and_parses_records() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/products/api/search")
        .match_query(Matcher::UrlEncoded("q".into(), "aspirin".into()))
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ASPIRIN_JSON)
        .create_async()
        .await;

    let records = client_for(&server.url()).search("aspirin").await.unwrap();

    mock.assert_async().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].category_label(), "Pain Relief");
}

#[tokio::test]
async fn test_search_sends_spaces_percent_encoded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/products/api/search")
        .match_query(Matcher::Regex("^q=asp%20irin$".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    client_for(&server.url()).search("asp irin").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_under_context_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/catalog/products/api/search")
        .match_query(Matcher::UrlEncoded("q".into(), "napa".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let base = format!("{}/catalog", server.url());
    client_for(&base).search("napa").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_empty_array() {
    let mut server = Server::new_async().await;
    let _mock = serve(&mut server, "zz", 200, "[]").await;

    let records = client_for(&server.url()).search("zz").await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_search_null_body_is_empty() {
    let mut server = Server::new_async().await;
    let _mock = serve(&mut server, "zz", 200, "null").await;

    let records = client_for(&server.url()).search("zz").await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_search_server_error_status() {
    let mut server = Server::new_async().await;
    let _mock = serve(&mut server, "zz", 500, r#"{"error": "boom"}"#).await;

    let result = client_for(&server.url()).search("zz").await;

    assert!(matches!(result, Err(SearchError::Status(500))));
}

#[tokio::test]
async fn test_search_malformed_body() {
    let mut server = Server::new_async().await;
    let _mock = serve(&mut server, "zz", 200, "<html>login</html>").await;

    let result = client_for(&server.url()).search("zz").await;

    assert!(matches!(result, Err(SearchError::Parse(_))));
}

#[tokio::test]
async fn test_search_connection_refused_is_network_error() {
    // Bind then drop to get a port nothing listens on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = client_for(&format!("http://127.0.0.1:{}", port));

    let result = client.search("zz").await;

    assert!(matches!(result, Err(SearchError::Network(_))));
}
