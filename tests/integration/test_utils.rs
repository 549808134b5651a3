//! Shared helpers for driving the router in integration tests.

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use calculator_api::{create_router, Calculator, RouterConfig};

/// Router with tracing disabled, as used by every test.
pub fn test_router() -> Router {
    create_router(Calculator::new(), RouterConfig::new().with_tracing(false))
}

/// A fully buffered response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse the body as JSON, panicking with the raw body on failure.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "body is not JSON ({}): {:?}",
                e,
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Send one request through a fresh router.
pub async fn send(method: Method, uri: &str, body: &str) -> TestResponse {
    send_to(test_router(), method, uri, body).await
}

/// Send one request through the given router.
pub async fn send_to(router: Router, method: Method, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

/// POST a JSON body.
pub async fn post(uri: &str, body: &str) -> TestResponse {
    send(Method::POST, uri, body).await
}
