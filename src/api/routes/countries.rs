//! Country Routes
//!
//! - GET /api/v1/countries - List country ids and names
//! - GET /api/v1/countries/:id - Country detail view
//!
//! A malformed id answers the generic not-found; a well-formed id missing
//! from the dataset answers `COUNTRY_NOT_FOUND`.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use super::home::settled_snapshot;
use crate::aggregate::{self, CountryDetail, DetailState};
use crate::api::dto::{CountryListResponse, CountrySummaryDto};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/countries
pub async fn list_countries(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CountryListResponse>> {
    let snapshot = settled_snapshot(&state).await?;

    let countries: Vec<CountrySummaryDto> = snapshot
        .countries()
        .iter()
        .map(|c| CountrySummaryDto {
            id: c.id,
            country: c.country.clone(),
        })
        .collect();

    Ok(Json(CountryListResponse {
        total: countries.len(),
        countries,
    }))
}

/// GET /api/v1/countries/:id
pub async fn get_country(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<CountryDetail>> {
    let id = aggregate::parse_country_id(Some(raw_id.as_str()))
        .map_err(|e| ApiError::NotFound(e.to_string()))?;

    match aggregate::resolve_detail(state.store.subscribe(), id).await {
        DetailState::Success { data } => Ok(Json(data)),
        DetailState::NotFound { .. } => Err(ApiError::CountryNotFound(id)),
        DetailState::Error { .. } => Err(ApiError::DatasetUnavailable),
        DetailState::Loading => Err(ApiError::Internal(
            "detail resolved before the dataset settled".to_string(),
        )),
    }
}
