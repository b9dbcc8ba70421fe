//! Attendance Summary Engine HTTP server binary.
//!
//! Starts the REST API backed by in-memory stores and the system clock.
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)
//! - `ENGINE_CONFIG`: Path to the YAML config file (default: ./config/engine.yaml)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::{EngineConfig, load_config};
use attendance_engine::store::{
    MemoryProfileStore, MemoryPunchStore, MemorySummaryStore, SystemClock,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Attendance Summary Engine");

    let config_path =
        env::var("ENGINE_CONFIG").unwrap_or_else(|_| "./config/engine.yaml".to_string());
    let config = match load_config(&config_path) {
        Ok(config) => {
            info!(path = %config_path, "Configuration loaded");
            config
        }
        Err(err) => {
            warn!(path = %config_path, error = %err, "Using built-in defaults");
            EngineConfig::default()
        }
    };

    let state = AppState::new(
        config,
        Arc::new(MemoryPunchStore::new()),
        Arc::new(MemoryProfileStore::new()),
        Arc::new(MemorySummaryStore::new()),
        Arc::new(SystemClock),
    );
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
