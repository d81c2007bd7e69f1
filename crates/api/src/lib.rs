//! Climate Observation API Server
//!
//! Read-only REST API over the Hawaii climate database: a startup snapshot
//! of recent precipitation, temperature and stations, plus temperature
//! statistics over arbitrary date ranges queried live.

use anyhow::Context;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

pub mod config;
pub mod dataset;
pub mod error;
mod routes;

pub use config::ServerConfig;
pub use dataset::{Dataset, StationInfo};
pub use error::ApiError;

use query_service::QueryService;
use storage::Repository;

/// Application state shared across handlers, read-only once built
pub struct AppState {
    /// Startup snapshot
    pub dataset: Dataset,
    /// Live temperature queries
    pub query: QueryService,
}

impl AppState {
    /// Create new application state
    pub fn new(dataset: Dataset, query: QueryService) -> Self {
        Self { dataset, query }
    }

    /// Load the snapshot from `repository` and wrap it with a query service
    /// over the same pool
    pub async fn load(repository: Repository) -> Result<Self, storage::StorageError> {
        let dataset = Dataset::load(&repository).await?;
        Ok(Self::new(dataset, QueryService::new(repository)))
    }
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index::index))
        .route("/api/v1.0/precipitation", get(routes::observations::get_precipitation))
        .route("/api/v1.0/stations", get(routes::stations::get_stations))
        .route("/api/v1.0/tobs", get(routes::observations::get_tobs))
        .route("/api/v1.0/:start", get(routes::temperature::get_from_start))
        .route("/api/v1.0/:start/:end", get(routes::temperature::get_start_to_end))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Initialize logging
pub fn init_logging(level: Level) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}

/// Open the database, load the snapshot, then serve until Ctrl-C
pub async fn run_server(config: &ServerConfig) -> anyhow::Result<()> {
    let repository = Repository::connect(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    let state = AppState::load(repository.clone())
        .await
        .context("Failed to load climate dataset")?;
    let app = create_router(Arc::new(state));

    info!("Starting API server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    repository.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
