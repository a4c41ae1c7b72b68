//! Country detail aggregations
//!
//! Totals deduplicate participations by identifier (first occurrence wins).
//! The line series does not: every participation produces a point.

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

use super::types::{CountryDetail, CountryTotals, LinePoint, LineSeries};
use crate::dataset::{Country, CountryId, SnapshotState, SnapshotSubscription};

/// Message shown when the requested country is not in the dataset
pub const NOT_FOUND_MESSAGE: &str = "No data found";

/// Message shown when the dataset could not be loaded
pub const UNAVAILABLE_MESSAGE: &str = "Dataset unavailable";

/// A navigation identifier that does not name any country
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid country id: {0:?}")]
pub struct InvalidCountryId(pub String);

/// Parse the country id taken from a navigation path.
///
/// Ids are positive integers; empty, non-numeric and zero ids are rejected.
pub fn parse_country_id(raw: Option<&str>) -> Result<CountryId, InvalidCountryId> {
    let raw = raw.unwrap_or_default();

    match raw.trim().parse::<CountryId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(InvalidCountryId(raw.to_string())),
    }
}

/// The record with the given id, if any
pub fn select_country(countries: &[Country], id: CountryId) -> Option<&Country> {
    countries.iter().find(|c| c.id == id)
}

/// Distinct participations, medals and athletes, counting each
/// participation id once
pub fn totals(country: &Country) -> CountryTotals {
    let mut seen = HashSet::new();
    let mut totals = CountryTotals::default();

    for participation in &country.participations {
        if seen.insert(participation.id) {
            totals.medals += u64::from(participation.medals_count);
            totals.athletes += u64::from(participation.athlete_count);
        }
    }

    totals.distinct_participations = seen.len();
    totals
}

/// Medals per year, one point per participation in source order
pub fn to_line_series(country: &Country) -> LineSeries {
    LineSeries {
        name: country.country.clone(),
        series: country
            .participations
            .iter()
            .map(|p| LinePoint {
                name: p.year.to_string(),
                value: u64::from(p.medals_count),
            })
            .collect(),
    }
}

/// Compute the full detail view for one country
pub fn build_detail(country: &Country) -> CountryDetail {
    CountryDetail {
        id: country.id,
        country: country.country.clone(),
        totals: totals(country),
        line_chart: vec![to_line_series(country)],
    }
}

/// Lifecycle of a detail view: `Loading` moves to exactly one terminal state
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetailState {
    Loading,
    Success { data: CountryDetail },
    NotFound { message: String },
    Error { message: String },
}

impl DetailState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DetailState::Loading)
    }

    /// Derive the view state from a snapshot state without waiting
    pub fn from_snapshot(state: &SnapshotState, id: CountryId) -> Self {
        match state {
            SnapshotState::Loading => DetailState::Loading,
            SnapshotState::Unavailable => DetailState::Error {
                message: UNAVAILABLE_MESSAGE.to_string(),
            },
            SnapshotState::Ready(snapshot) => match select_country(snapshot.countries(), id) {
                Some(country) => DetailState::Success {
                    data: build_detail(country),
                },
                None => DetailState::NotFound {
                    message: NOT_FOUND_MESSAGE.to_string(),
                },
            },
        }
    }
}

/// Wait for the snapshot to settle and resolve the detail view for `id`.
///
/// The subscription is consumed and released when this returns, or when the
/// future is dropped before then. The store's `load()` must have been
/// started, otherwise this keeps waiting.
pub async fn resolve_detail(mut subscription: SnapshotSubscription, id: CountryId) -> DetailState {
    let state = subscription.settled().await;
    let detail = DetailState::from_snapshot(&state, id);

    match &detail {
        DetailState::Success { .. } => tracing::debug!(country_id = id, "Country detail resolved"),
        DetailState::NotFound { .. } => tracing::info!(country_id = id, "Country not found"),
        DetailState::Error { .. } => tracing::warn!(country_id = id, "Country detail without data"),
        DetailState::Loading => {}
    }

    detail
}
