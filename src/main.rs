//! DevOps CI/CD demo service entry point.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cicd_demo_service::api::{create_router, AppState};
use cicd_demo_service::config::Config;
use cicd_demo_service::utils::shutdown_signal;
use cicd_demo_service::{Result, ServiceError};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so RUST_LOG from .env is honored
    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        ServiceError::from(e)
    })?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone()));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        ServiceError::InvalidConfig(e)
    })?;

    let port = config.port;
    let environment = config.environment.clone();

    // Create app state and router
    let state = AppState::new(config);
    let router = create_router(state);

    // Bind on all interfaces
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server running on port {}", port);
    info!("Health check: http://localhost:{}/health", port);
    info!("Environment: {}", environment);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
