//! JSON request and response bodies.
//!
//! Decoding is deliberately lenient to match what clients of this API
//! already send:
//!
//! - Missing or unknown fields are ignored; missing operands default to `0`
//! - An operand given as `null` counts as missing
//! - Field names match regardless of case (`"A"` is `a`)
//! - A bare `null` body decodes to all-zero operands
//! - Only the first JSON value in the body is read; trailing bytes are ignored
//! - The `Content-Type` request header is not inspected
//!
//! Anything else (empty body, malformed syntax, non-object values,
//! non-numeric operands) is an [`ApiError::InvalidBody`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::calculator::Operation;
use crate::error::ApiError;

/// Largest magnitude at which every integer is exactly representable in an f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

// =============================================================================
// Requests
// =============================================================================

/// Request body for two-operand operations: `{"a": N, "b": N}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct BinaryRequest {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub a: f64,

    #[serde(default, deserialize_with = "null_as_zero")]
    pub b: f64,
}

/// Request body for single-operand operations: `{"a": N}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct UnaryRequest {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub a: f64,
}

/// Decode the first JSON value in `body` into `T`.
pub fn decode<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Value>();

    match values.next() {
        Some(Ok(Value::Null)) => Ok(T::default()),
        Some(Ok(Value::Object(fields))) => {
            serde_json::from_value(Value::Object(lowercase_keys(fields)))
                .map_err(|_| ApiError::InvalidBody)
        }
        _ => Err(ApiError::InvalidBody),
    }
}

/// Fold field names to lower case; on a clash the later key wins.
fn lowercase_keys(fields: Map<String, Value>) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect()
}

/// Read an operand, treating an explicit `null` as zero.
fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode the operands for `op` as an `(a, b)` pair.
///
/// Single-operand operations read a [`UnaryRequest`] and report `b` as `0`.
pub fn decode_operands(op: Operation, body: &[u8]) -> Result<(f64, f64), ApiError> {
    if op.arity() == 1 {
        let request: UnaryRequest = decode(body)?;
        Ok((request.a, 0.0))
    } else {
        let request: BinaryRequest = decode(body)?;
        Ok((request.a, request.b))
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Successful calculation: `{"result": N, "operation": "<tag>"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResponse {
    /// Numeric result; `null` when not finite
    #[serde(serialize_with = "serialize_result")]
    pub result: f64,

    /// Fixed tag naming the operation performed
    pub operation: String,
}

impl CalculationResponse {
    pub fn new(op: Operation, result: f64) -> Self {
        Self {
            result,
            operation: op.tag().to_string(),
        }
    }
}

/// JSON error response returned for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Write integral results as JSON integers (`15`, not `15.0`).
///
/// serde_json writes non-finite floats as `null`.
fn serialize_result<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
