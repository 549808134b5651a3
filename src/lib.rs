//! # Calculator API
//!
//! A small HTTP service exposing basic arithmetic as JSON endpoints.
//!
//! Each operation is a stateless, O(1) computation behind a fixed
//! `POST /api/v1/calculate/{operation}` route. Requests carry operands as
//! `{"a": N, "b": N}` (or `{"a": N}` for square root) and successful replies
//! look like `{"result": N, "operation": "<tag>"}`.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`calculator`] - The arithmetic service and the operation catalogue
//! - [`server`] - Axum router, middleware, handlers and JSON codec
//! - [`error`] - Domain and request errors
//! - [`config`] - CLI and environment configuration
//!
//! ## Example
//!
//! ```rust,no_run
//! use calculator_api::{create_router, Calculator, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let router = create_router(Calculator::new(), RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod server;

// Re-export commonly used types
pub use calculator::{Calculator, Operation};
pub use config::{Config, DEFAULT_HOST, DEFAULT_PORT};
pub use error::{ApiError, CalcError};
pub use server::{
    create_default_router, create_router, operation_path, AppState, BinaryRequest,
    CalculationResponse, ErrorResponse, HealthResponse, RouterConfig, UnaryRequest, API_PREFIX,
    HEALTH_PATH,
};
