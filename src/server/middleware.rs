//! Cross-cutting middleware for the calculation routes.
//!
//! Both functions plug into [`axum::middleware::from_fn`]. The router applies
//! them so that logging wraps CORS, which wraps the handler:
//!
//! ```text
//! request ──► logging_middleware ──► cors_middleware ──► handler
//! ```

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request},
    http::{HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use tracing::info;

/// Value of `Access-Control-Allow-Origin` on every calculation response.
pub const CORS_ALLOW_ORIGIN: &str = "*";

/// Value of `Access-Control-Allow-Methods` on every calculation response.
pub const CORS_ALLOW_METHODS: &str = "POST, OPTIONS";

/// Value of `Access-Control-Allow-Headers` on every calculation response.
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";

/// Log method, path and peer address, then the elapsed time once the
/// wrapped service has produced a response.
///
/// The peer address is only known when the server was started with
/// `into_make_service_with_connect_info::<SocketAddr>()`; otherwise `-` is
/// logged. Never alters the request or the response.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());

    info!(
        method = %request.method(),
        path = request.uri().path(),
        remote_addr = %remote_addr,
        "[{}] {} {}",
        request.method(),
        request.uri().path(),
        remote_addr
    );

    let response = next.run(request).await;

    info!(
        status = response.status().as_u16(),
        "Request completed in {:?}",
        start.elapsed()
    );

    response
}

/// Permissive CORS for browser clients.
///
/// Adds a wildcard origin and the fixed allow-methods/allow-headers to every
/// response. A pre-flight `OPTIONS` request is answered `200` with an empty
/// body and never reaches the wrapped handler.
pub async fn cors_middleware(request: Request, next: Next) -> Response {
    let mut response = if *request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(CORS_ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(CORS_ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOW_HEADERS),
    );

    response
}
