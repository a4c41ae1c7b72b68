//! Medalboard API server
//!
//! Run with: cargo run --bin medalboard -- [path/to/config.toml]
//!
//! Without an explicit path the config is looked up in the default
//! locations, then environment variables are applied on top:
//! - `MEDALBOARD_DATASET`: dataset file path or URL
//! - `MEDALBOARD_API_HOST` / `MEDALBOARD_API_PORT`: bind address
//! - `MEDALBOARD_LOG_LEVEL` / `MEDALBOARD_LOG_FORMAT`: logging
//! - `RUST_LOG`: full tracing filter, wins over the configured level

use medalboard::api::{serve, AppState};
use medalboard::config::Config;
use medalboard::dataset::{from_location, SnapshotStore};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Config::load_with_env(&path)?,
        None => Config::load_default(),
    };
    let config = &loaded.config;

    medalboard::logging::init(&config.logging);
    loaded.report();

    tracing::info!("Starting Medalboard API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset location: {}", config.dataset.location);

    // serve() starts the load; handlers wait for it to settle
    let store = Arc::new(SnapshotStore::new(from_location(&config.dataset.location)));

    let state = AppState::new(store, config.api.clone());
    serve(state, &config.api).await?;

    tracing::info!("Medalboard API server stopped");

    Ok(())
}
