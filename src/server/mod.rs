//! HTTP server layer for the calculator API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │              POST /api/v1/calculate/{operation}                 │
//! │                                                                 │
//! │  ┌────────────┐  ┌────────────┐  ┌──────────┐  ┌────────────┐   │
//! │  │   routes   │─►│ middleware │─►│ handlers │─►│   codec    │   │
//! │  │  (router)  │  │(log, CORS) │  │ (405/400)│  │   (JSON)   │   │
//! │  └────────────┘  └────────────┘  └──────────┘  └────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod codec;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use codec::{
    decode, decode_operands, BinaryRequest, CalculationResponse, ErrorResponse, HealthResponse,
    UnaryRequest,
};
pub use handlers::{
    add_handler, divide_handler, health_handler, multiply_handler, percentage_handler,
    power_handler, sqrt_handler, subtract_handler, AppState,
};
pub use middleware::{cors_middleware, logging_middleware};
pub use routes::{
    create_default_router, create_router, operation_path, RouterConfig, API_PREFIX, HEALTH_PATH,
};
