//! End-to-end tests against a real listener.
//!
//! The server is started the same way the binary starts it, with connect
//! info so the logging middleware sees the peer address.

use std::net::SocketAddr;

use serde_json::{json, Value};
use tokio::net::TcpListener;

use super::test_utils::test_router;

/// Start the server on an ephemeral port and return its base URL.
async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let service = test_router().into_make_service_with_connect_info::<SocketAddr>();
    tokio::spawn(async move {
        axum::serve(listener, service).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_end_to_end_add() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/v1/calculate/add", base_url))
        .json(&json!({"a": 10, "b": 5}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"result": 15, "operation": "addition"}));
}

#[tokio::test]
async fn test_end_to_end_divide_by_zero() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/v1/calculate/divide", base_url))
        .json(&json!({"a": 10, "b": 0}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "division by zero"}));
}

#[tokio::test]
async fn test_end_to_end_concurrent_requests() {
    let base_url = spawn_server().await;
    let client = reqwest::Client::new();

    let mut handles = Vec::new();
    for i in 0..16 {
        let client = client.clone();
        let url = format!("{}/api/v1/calculate/multiply", base_url);
        handles.push(tokio::spawn(async move {
            let body: Value = client
                .post(url)
                .json(&json!({"a": i, "b": 2}))
                .send()
                .await
                .unwrap()
                .json()
                .await
                .unwrap();
            (i, body)
        }));
    }

    for handle in handles {
        let (i, body) = handle.await.unwrap();
        assert_eq!(body["result"], f64::from(i * 2));
        assert_eq!(body["operation"], "multiplication");
    }
}

#[tokio::test]
async fn test_end_to_end_health() {
    let base_url = spawn_server().await;

    let response = reqwest::get(format!("{}/health", base_url)).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), r#"{"status":"healthy"}"#);
}
