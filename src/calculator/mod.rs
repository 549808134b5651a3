//! Arithmetic service layer.
//!
//! This module holds the stateless computation behind every calculation
//! endpoint. It knows nothing about HTTP: handlers decode operands, call into
//! the [`Calculator`], and map any [`CalcError`](crate::error::CalcError)
//! to a status code.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              HTTP Handlers              │
//! └────────────────────┬────────────────────┘
//!                      │  Operation + operands
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │               Calculator                │
//! │  add · subtract · multiply · divide     │
//! │  power · sqrt · percentage              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`Calculator`]: The seven operations as pure methods
//! - [`Operation`]: Names an operation, its JSON tag and its URL segment
//!
//! # Example
//!
//! ```
//! use calculator_api::calculator::{Calculator, Operation};
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.add(10.0, 5.0), 15.0);
//! assert_eq!(calc.evaluate(Operation::Percentage, 20.0, 100.0).unwrap(), 20.0);
//! assert!(calc.divide(1.0, 0.0).is_err());
//! ```

mod operation;
mod service;

pub use operation::Operation;
pub use service::Calculator;
