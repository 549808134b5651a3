//! Configuration management for the calculator API.
//!
//! This module provides a small configuration layer that supports:
//! - Command-line arguments via clap
//! - Environment variables with `CALC_` prefix
//! - Defaults that reproduce the historical fixed listener (`0.0.0.0:8080`)
//!
//! # Environment Variables
//!
//! - `CALC_HOST` - Server bind address (default: 0.0.0.0)
//! - `CALC_PORT` - Server port (default: 8080)
//! - `CALC_VERBOSE` - Enable debug logging (default: false)
//! - `CALC_NO_TRACING` - Disable per-request trace spans (default: false)

use clap::Parser;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8080;

// =============================================================================
// CLI Arguments
// =============================================================================

/// Calculator API - arithmetic over JSON.
///
/// Serves add, subtract, multiply, divide, power, square root and percentage
/// as POST endpoints under /api/v1/calculate.
#[derive(Parser, Debug, Clone)]
#[command(name = "calculator-api")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "CALC_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "CALC_PORT")]
    pub port: u16,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false, env = "CALC_VERBOSE")]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false, env = "CALC_NO_TRACING")]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("host must not be empty. Set --host or CALC_HOST".to_string());
        }

        if self.port == 0 {
            return Err("port must be greater than 0. Set --port or CALC_PORT".to_string());
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Tests
// =============================================================================
