//! The arithmetic service.
//!
//! Every method is a pure function of its operands. Inputs are not range
//! checked: NaN and the infinities flow through standard IEEE 754 rules.
//! The only domain errors are division by zero and the square root of a
//! negative number.

use crate::error::CalcError;

use super::operation::Operation;

/// Stateless calculator backing every calculation endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Create a new calculator.
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Divide `a` by `b`.
    ///
    /// Returns [`CalcError::DivisionByZero`] when `b` is zero (either sign).
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a / b)
    }

    /// Raise `a` to the power `b`, following `f64::powf` for fractional,
    /// negative and undefined cases.
    pub fn power(&self, a: f64, b: f64) -> f64 {
        a.powf(b)
    }

    /// Non-negative square root of `a`.
    ///
    /// Returns [`CalcError::NegativeSquareRoot`] when `a < 0`. NaN is not
    /// negative and yields NaN.
    pub fn sqrt(&self, a: f64) -> Result<f64, CalcError> {
        if a < 0.0 {
            return Err(CalcError::NegativeSquareRoot);
        }
        Ok(a.sqrt())
    }

    /// `a` percent of `b`, e.g. `percentage(20, 100) == 20`.
    pub fn percentage(&self, a: f64, b: f64) -> f64 {
        (a / 100.0) * b
    }

    /// Run `op` over the operand pair. `b` is ignored by single-operand
    /// operations.
    pub fn evaluate(&self, op: Operation, a: f64, b: f64) -> Result<f64, CalcError> {
        match op {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
            Operation::Power => Ok(self.power(a, b)),
            Operation::Sqrt => self.sqrt(a),
            Operation::Percentage => Ok(self.percentage(a, b)),
        }
    }
}
