//! # Advertisement Service
//!
//! HTTP entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Document store (PostgreSQL or in-memory)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use advertisement_service::config::Settings;
use advertisement_service::presentation::http::handlers::health;
use advertisement_service::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    advertisement_service::telemetry::init_tracing();
    health::init_server_start();

    info!("Starting Advertisement Service...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        backend = ?settings.storage.backend,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
