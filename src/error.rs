use thiserror::Error;

/// Domain errors raised by the arithmetic service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Divisor was zero
    #[error("division by zero")]
    DivisionByZero,

    /// Square root requested for a negative operand
    #[error("cannot calculate square root of negative number")]
    NegativeSquareRoot,
}

/// Request-scoped errors produced by the HTTP handler layer (all map to 4xx)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Calculation endpoints only accept POST (should map to HTTP 405)
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Request body is not a valid JSON operand object (should map to HTTP 400)
    #[error("invalid request body")]
    InvalidBody,

    /// The operation rejected its operands (should map to HTTP 400)
    #[error(transparent)]
    Calculation(#[from] CalcError),
}
