//! Climate Observation API - Main Entry Point

use anyhow::Context;
use climate_api::{init_logging, run_server, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load().context("Failed to load configuration")?;
    init_logging(config.log_level()?)?;

    info!("=== Climate API v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Database: {}", config.database_url);

    run_server(&config).await
}
