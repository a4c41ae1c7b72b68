//! Medalboard REST API
//!
//! Read-only HTTP layer over the dataset snapshot, built with Axum.
//!
//! # Endpoints
//!
//! ## Home view
//! - `GET /api/v1/home` - Country and participation counts, pie chart data
//! - `GET /api/v1/pie/:name` - Country id behind a pie slice label
//!
//! ## Country detail view
//! - `GET /api/v1/countries` - List countries
//! - `GET /api/v1/countries/:id` - Totals and line chart data for one country
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use medalboard::api::{serve, AppState};
//! use medalboard::config::ApiConfig;
//! use medalboard::dataset::{from_location, SnapshotStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(SnapshotStore::new(from_location("assets/mock/olympic.json")));
//!
//!     let config = ApiConfig::default();
//!     serve(AppState::new(store, config.clone()), &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method, Uri},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware.
///
/// Data routes wait for the snapshot to settle. When the router is used
/// without `serve`, the caller must start `SnapshotStore::load` itself.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Home view
        .route("/home", get(routes::home::home_summary))
        .route("/pie/:name", get(routes::home::lookup_pie_label))
        // Country detail view
        .route("/countries", get(routes::countries::list_countries))
        .route("/countries/:id", get(routes::countries::get_country));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Any path outside the routes above
async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
}

/// Start the API server.
///
/// Kicks off the dataset load in the background before binding, so the
/// handlers' waits always settle. A store that was already loaded is not
/// fetched again.
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let load_handle = Arc::clone(&state.store).start_background_load();
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Medalboard API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    load_handle.abort();
    tracing::info!("Medalboard API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
