//! Sona Backend Service
//!
//! Main entry point for the Sona gold price and currency pressure
//! backend. This service provides:
//! - HTTP API for gold quotes and pressure snapshots
//! - Durable daily pressure score history

use sona_backend::config::AppConfig;
use sona_backend::error::{AppError, AppResult};
use sona_backend::http;
use sona_backend::providers::{GoldApiClient, OpenErApiClient};
use sona_backend::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load environment variables first
    dotenv::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        AppError::Config(e)
    })?;

    // Initialize tracing/logging with config
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("sona_backend={},tower_http=info", config.log_level).into()
            }),
        )
        .init();

    info!("╔══════════════════════════════════════════════════════════╗");
    info!("║            Sona Backend Service Starting                  ║");
    info!("╚══════════════════════════════════════════════════════════╝");
    info!("Log level: {}", config.log_level);
    info!("HTTP port: {}", config.port);
    info!("FX API: {}", config.providers.fx_base_url);
    info!("Gold API: {}", config.providers.gold_price_url);

    // =========================================================================
    // CORE SERVICES INITIALIZATION
    // =========================================================================
    info!("Initializing core services...");

    let rate_provider = Arc::new(OpenErApiClient::new(&config.providers)?);
    let spot_provider = Arc::new(GoldApiClient::new(&config.providers)?);
    info!("✓ Provider clients initialized ({}s timeout)", config.providers.timeout_secs);

    let state = Arc::new(AppState::new(config.clone(), rate_provider, spot_provider)?);
    info!(
        "✓ Application state initialized (history: {:?}, {} days)",
        state.config.pressure.history_path, state.config.pressure.max_days
    );

    let app = http::router(state);
    info!("✓ Router initialized");

    // =========================================================================
    // START SERVER
    // =========================================================================
    let addr: SocketAddr = format!("0.0.0.0:{}", config.port)
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {}", e)))?;

    info!("Starting HTTP server on {}...", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Message(format!("Failed to bind HTTP server: {}", e)))?;

    info!("╔══════════════════════════════════════════════════════════╗");
    info!("║            Sona Backend Service Ready!                    ║");
    info!("╠══════════════════════════════════════════════════════════╣");
    info!("║  HTTP API:     0.0.0.0:{}                              ║", config.port);
    info!("╚══════════════════════════════════════════════════════════╝");
    info!("Press Ctrl+C to shutdown gracefully");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Message(format!("HTTP server error: {}", e)))?;

    info!("Sona backend service shutdown complete");
    Ok(())
}

/// Resolve when a shutdown signal arrives
async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("Shutdown signal received, shutting down gracefully...");
}
