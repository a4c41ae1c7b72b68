//! Home Routes
//!
//! - GET /api/v1/home - Distinct counts and the medals-per-country pie chart
//! - GET /api/v1/pie/:name - Resolve a pie slice label to its country id

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::aggregate::{self, HomeSummary};
use crate::api::dto::PieLookupResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dataset::Snapshot;

/// Wait for the dataset and hand back the snapshot, or fail as unavailable
pub(crate) async fn settled_snapshot(state: &AppState) -> ApiResult<Arc<Snapshot>> {
    let mut subscription = state.store.subscribe();

    subscription
        .settled()
        .await
        .snapshot()
        .ok_or(ApiError::DatasetUnavailable)
}

/// GET /api/v1/home
pub async fn home_summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<HomeSummary>> {
    let snapshot = settled_snapshot(&state).await?;

    Ok(Json(aggregate::summarize(snapshot.countries())))
}

/// GET /api/v1/pie/:name
///
/// Chart click navigation: the chart only knows the slice label.
pub async fn lookup_pie_label(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<PieLookupResponse>> {
    let snapshot = settled_snapshot(&state).await?;
    let pie = aggregate::to_pie_chart_data(snapshot.countries());

    let id = aggregate::find_by_label(&pie, &name)
        .ok_or_else(|| ApiError::NotFound(format!("No pie slice labelled {:?}", name)))?;

    Ok(Json(PieLookupResponse { id }))
}
