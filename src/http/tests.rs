//! Tests for the HTTP transport module

use super::*;
use reqwest::Method;
use std::collections::HashMap;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_transport_config_default() {
    let config = TransportConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.user_agent.starts_with("centra-rust/"));
}

#[tokio::test]
async fn test_transport_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers/cus_1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("request-id", "req_abc")
                .set_body_json(serde_json::json!({"id": "cus_1", "object": "customer"})),
        )
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new();
    let response = transport
        .request(
            Method::GET,
            &format!("{}/v1/customers/cus_1", mock_server.uri()),
            &[],
            &HashMap::new(),
            None,
        )
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert!(response.is_success());
    assert_eq!(response.request_id.as_deref(), Some("req_abc"));
    assert!(response.body.contains("cus_1"));
}

#[tokio::test]
async fn test_transport_query_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/charges"))
        .and(query_param("limit", "2"))
        .and(header("Authorization", "Bearer sk_test_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list", "data": [], "has_more": false, "url": "/v1/charges"
        })))
        .mount(&mock_server)
        .await;

    let mut headers = HashMap::new();
    headers.insert("Authorization".to_string(), "Bearer sk_test_1".to_string());

    let transport = HttpTransport::new();
    let response = transport
        .request(
            Method::GET,
            &format!("{}/v1/charges", mock_server.uri()),
            &[("limit".to_string(), "2".to_string())],
            &headers,
            None,
        )
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_transport_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/customers"))
        .and(wiremock::matchers::body_json(
            serde_json::json!({"email": "jane@example.com"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "cus_new", "object": "customer", "livemode": false
        })))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new();
    let response = transport
        .request(
            Method::POST,
            &format!("{}/v1/customers", mock_server.uri()),
            &[],
            &HashMap::new(),
            Some(&serde_json::json!({"email": "jane@example.com"})),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_transport_does_not_classify_statuses() {
    // A 404 is still a completed exchange at this layer; classification
    // into the typed taxonomy happens in the API client.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{\"error\":{}}"))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new();
    let response = transport
        .request(
            Method::GET,
            &format!("{}/v1/customers/nope", mock_server.uri()),
            &[],
            &HashMap::new(),
            None,
        )
        .await
        .unwrap();

    assert_eq!(response.status, 404);
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_transport_connection_error() {
    // Nothing listens on this port.
    let transport = HttpTransport::new();
    let result = transport
        .request(
            Method::GET,
            "http://127.0.0.1:1/v1/customers",
            &[],
            &HashMap::new(),
            None,
        )
        .await;

    assert!(matches!(
        result.unwrap_err(),
        crate::error::Error::Connection(_)
    ));
}

#[test]
fn test_transport_debug() {
    let transport = HttpTransport::new();
    let debug_str = format!("{transport:?}");
    assert!(debug_str.contains("HttpTransport"));
    assert!(debug_str.contains("config"));
}
