use anyhow::Context;
use flight_tracking_gateway::{
    infrastructure::adapters::MySqlGateway, shared::logging::LoggingUtils, AppConfig, HttpServer,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize logging
    LoggingUtils::initialize(&config.logging).context("Failed to initialize logging")?;

    info!("Starting Flight Tracking Gateway...");
    info!(database = %config.database.redacted_url(), "Configuration loaded successfully");

    let gateway = Arc::new(MySqlGateway::connect_lazy(&config.database));

    let server = HttpServer::new(config, gateway).context("Failed to initialize server")?;

    info!("Server starting on {}", server.config().server_address());

    server.run().await.context("Server error")?;

    Ok(())
}
