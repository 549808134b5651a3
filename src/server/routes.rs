//! Router configuration for the calculator API.
//!
//! This module binds the fixed routes and applies the logging and CORS
//! middleware to the calculation endpoints.
//!
//! # Route Structure
//!
//! ```text
//! /health                          - Health check (any method, no middleware)
//! /api/v1/calculate/add            - a + b
//! /api/v1/calculate/subtract       - a - b
//! /api/v1/calculate/multiply       - a * b
//! /api/v1/calculate/divide         - a / b
//! /api/v1/calculate/power          - a ^ b
//! /api/v1/calculate/sqrt           - √a
//! /api/v1/calculate/percentage     - a% of b
//! ```
//!
//! # Example
//!
//! ```ignore
//! use calculator_api::calculator::Calculator;
//! use calculator_api::server::routes::{create_router, RouterConfig};
//!
//! let router = create_router(Calculator::new(), RouterConfig::new());
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

use axum::{
    middleware,
    routing::{any, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{
    add_handler, divide_handler, health_handler, multiply_handler, percentage_handler,
    power_handler, sqrt_handler, subtract_handler, AppState,
};
use super::middleware::{cors_middleware, logging_middleware};
use crate::calculator::{Calculator, Operation};

/// Path prefix shared by every calculation endpoint.
pub const API_PREFIX: &str = "/api/v1/calculate";

/// Path of the health check endpoint.
pub const HEALTH_PATH: &str = "/health";

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Whether to wrap the router in a `TraceLayer` for per-request spans
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a new router configuration. Tracing is enabled by default.
    pub fn new() -> Self {
        Self {
            enable_tracing: true,
        }
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Full URL path of the endpoint serving `op`.
pub fn operation_path(op: Operation) -> String {
    format!("{}/{}", API_PREFIX, op.path())
}

/// Create the main application router.
///
/// This function builds the complete Axum router with:
/// - The health check, outside any middleware
/// - One route per [`Operation`], wrapped by logging then CORS
/// - Request tracing (optional)
///
/// Calculation routes accept every method so that the handlers themselves
/// can answer non-POST requests with a JSON `405`.
pub fn create_router(calculator: Calculator, config: RouterConfig) -> Router {
    let app_state = AppState::new(calculator);

    let calculation_routes: Router = Operation::ALL
        .into_iter()
        .fold(Router::new(), |router, op| {
            router.route(&operation_path(op), operation_handler(op))
        })
        .with_state(app_state)
        .layer(middleware::from_fn(cors_middleware))
        .layer(middleware::from_fn(logging_middleware));

    let router = Router::new()
        .route(HEALTH_PATH, any(health_handler))
        .merge(calculation_routes);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Create a router with default configuration.
pub fn create_default_router() -> Router {
    create_router(Calculator::new(), RouterConfig::default())
}

/// Handler bound to the route of `op`.
fn operation_handler(op: Operation) -> MethodRouter<AppState> {
    match op {
        Operation::Add => any(add_handler),
        Operation::Subtract => any(subtract_handler),
        Operation::Multiply => any(multiply_handler),
        Operation::Divide => any(divide_handler),
        Operation::Power => any(power_handler),
        Operation::Sqrt => any(sqrt_handler),
        Operation::Percentage => any(percentage_handler),
    }
}

// =============================================================================
// Tests
// =============================================================================
