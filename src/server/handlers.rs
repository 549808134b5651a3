//! HTTP request handlers for the calculator API.
//!
//! Every calculation handler runs the same sequence:
//!
//! 1. Reject any method other than `POST` with `405`
//! 2. Decode the JSON body, rejecting malformed input with `400`
//! 3. Run the operation on the [`Calculator`]
//! 4. Map a domain error (division by zero, negative square root) to `400`
//! 5. Reply `200` with `{"result": N, "operation": "<tag>"}`
//!
//! # Endpoints
//!
//! - `POST /api/v1/calculate/{add,subtract,multiply,divide,power,sqrt,percentage}`
//! - `GET /health` - Health check endpoint

use std::sync::Arc;

use axum::{
    body::to_bytes,
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, warn};

use crate::calculator::{Calculator, Operation};
use crate::error::ApiError;

use super::codec::{decode_operands, CalculationResponse, ErrorResponse, HealthResponse};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state containing the calculator.
///
/// This is passed to all handlers via Axum's State extractor.
#[derive(Clone, Default)]
pub struct AppState {
    /// The arithmetic service
    pub calculator: Arc<Calculator>,
}

impl AppState {
    /// Create a new application state around the given calculator.
    pub fn new(calculator: Calculator) -> Self {
        Self {
            calculator: Arc::new(calculator),
        }
    }
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert ApiError to HTTP response.
///
/// Every error is a client error. Method errors are logged at DEBUG,
/// bad bodies and rejected operands at WARN.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidBody | ApiError::Calculation(_) => StatusCode::BAD_REQUEST,
        };
        let message = self.to_string();

        if status == StatusCode::METHOD_NOT_ALLOWED {
            debug!(status = status.as_u16(), "Client error: {}", message);
        } else {
            warn!(status = status.as_u16(), "Client error: {}", message);
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Run one calculation request through method check, decode and compute.
///
/// The method is checked before the body is read, so a non-POST request is
/// answered `405` whatever it carries. The body itself is read without a
/// size limit.
async fn calculate(
    state: &AppState,
    op: Operation,
    request: Request,
) -> Result<Json<CalculationResponse>, ApiError> {
    if *request.method() != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let body = to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|_| ApiError::InvalidBody)?;

    evaluate_body(state, op, &body)
}

/// Decode operands from a buffered body and run the operation.
fn evaluate_body(
    state: &AppState,
    op: Operation,
    body: &[u8],
) -> Result<Json<CalculationResponse>, ApiError> {
    let (a, b) = decode_operands(op, body)?;
    let result = state.calculator.evaluate(op, a, b)?;

    debug!(operation = op.tag(), a, b, result, "Calculated");

    Ok(Json(CalculationResponse::new(op, result)))
}

/// Handle addition requests.
///
/// `POST /api/v1/calculate/add` with `{"a": N, "b": N}`; replies `a + b`.
pub async fn add_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<CalculationResponse>, ApiError> {
    calculate(&state, Operation::Add, request).await
}

/// Handle subtraction requests (`a - b`).
pub async fn subtract_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<CalculationResponse>, ApiError> {
    calculate(&state, Operation::Subtract, request).await
}

/// Handle multiplication requests (`a * b`).
pub async fn multiply_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<CalculationResponse>, ApiError> {
    calculate(&state, Operation::Multiply, request).await
}

/// Handle division requests.
///
/// # Errors
///
/// - `400 Bad Request`: `{"error": "division by zero"}` when `b == 0`
pub async fn divide_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<CalculationResponse>, ApiError> {
    calculate(&state, Operation::Divide, request).await
}

/// Handle exponentiation requests (`a` raised to `b`).
pub async fn power_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<CalculationResponse>, ApiError> {
    calculate(&state, Operation::Power, request).await
}

/// Handle square root requests.
///
/// Takes a single operand: `{"a": N}`.
///
/// # Errors
///
/// - `400 Bad Request`: when `a` is negative
pub async fn sqrt_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<CalculationResponse>, ApiError> {
    calculate(&state, Operation::Sqrt, request).await
}

/// Handle percentage requests: `a` percent of `b`.
pub async fn percentage_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<CalculationResponse>, ApiError> {
    calculate(&state, Operation::Percentage, request).await
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health` (no method check; any verb gets the same reply)
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {"status": "healthy"}
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
