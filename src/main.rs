//! Calculator API - arithmetic over JSON.
//!
//! This binary starts the HTTP server and configures all components.

use std::net::SocketAddr;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use calculator_api::{
    calculator::{Calculator, Operation},
    config::Config,
    server::{create_router, operation_path, RouterConfig, HEALTH_PATH},
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let router_config = RouterConfig::new().with_tracing(!config.no_tracing);
    let router = create_router(Calculator::new(), router_config);

    let addr = config.bind_address();
    print_endpoints(&addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    let service = router.into_make_service_with_connect_info::<SocketAddr>();
    if let Err(e) = axum::serve(listener, service).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Log the listen address and every route.
fn print_endpoints(addr: &str) {
    info!(
        "Calculator API v{} starting on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );
    info!("Endpoints:");
    for op in Operation::ALL {
        info!("   POST {}", operation_path(op));
    }
    info!("   GET  {}", HEALTH_PATH);
    info!("");
    info!("Try:");
    info!(
        "   curl -X POST http://{}{} -d '{{\"a\":10,\"b\":5}}'",
        addr,
        operation_path(Operation::Add)
    );
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "calculator_api=debug,tower_http=debug"
    } else {
        "calculator_api=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
