//! CORS and health check tests.
//!
//! Tests verify:
//! - CORS headers on success, error and pre-flight responses
//! - Pre-flight requests never reach the handler
//! - The health check answers any method and carries no CORS headers

use axum::http::{Method, StatusCode};
use serde_json::json;

use super::test_utils::{post, send};

fn assert_cors_headers(response: &super::test_utils::TestResponse) {
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    assert_eq!(
        response.header("access-control-allow-methods"),
        Some("POST, OPTIONS")
    );
    assert_eq!(
        response.header("access-control-allow-headers"),
        Some("Content-Type")
    );
}

#[tokio::test]
async fn test_cors_headers_on_success() {
    let response = post("/api/v1/calculate/multiply", r#"{"a": 3, "b": 3}"#).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_cors_headers_on_errors() {
    let response = post("/api/v1/calculate/divide", r#"{"a": 1, "b": 0}"#).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_cors_headers(&response);

    let response = send(Method::GET, "/api/v1/calculate/divide", "").await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_preflight_returns_200_without_processing_body() {
    for op in ["add", "subtract", "multiply", "divide", "power", "sqrt", "percentage"] {
        let uri = format!("/api/v1/calculate/{op}");
        let response = send(Method::OPTIONS, &uri, "{invalid}").await;

        assert_eq!(response.status, StatusCode::OK, "{uri}");
        assert!(response.body.is_empty(), "{uri} pre-flight should have no body");
        assert_cors_headers(&response);
    }
}

#[tokio::test]
async fn test_health() {
    let response = send(Method::GET, "/health", "").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("application/json"));
    assert_eq!(String::from_utf8_lossy(&response.body), r#"{"status":"healthy"}"#);
}

#[tokio::test]
async fn test_health_answers_any_method() {
    for method in [Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS] {
        let response = send(method.clone(), "/health", "").await;

        assert_eq!(response.status, StatusCode::OK, "{method}");
        assert_eq!(response.json(), json!({"status": "healthy"}));
    }
}

#[tokio::test]
async fn test_health_has_no_cors_headers() {
    let response = send(Method::GET, "/health", "").await;
    assert!(response.header("access-control-allow-origin").is_none());
}
