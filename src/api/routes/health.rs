//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (dataset loaded)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;
use crate::dataset::SnapshotState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Returns 200 only once the dataset snapshot is available.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.store.state() {
        SnapshotState::Ready(_) => StatusCode::OK,
        _ => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
///
/// Full health status with dataset details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let snapshot_state = state.store.state();

    let status = match &snapshot_state {
        SnapshotState::Ready(_) => "healthy",
        SnapshotState::Loading => "starting",
        SnapshotState::Unavailable => "degraded",
    };

    let snapshot = snapshot_state.snapshot();

    Json(HealthResponse {
        status: status.to_string(),
        dataset: snapshot_state.as_str().to_string(),
        source: state.store.source(),
        countries: snapshot.as_ref().map(|s| s.len()),
        loaded_at: snapshot.as_ref().map(|s| s.loaded_at.to_rfc3339()),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
