//! Data Transfer Objects
//!
//! Response types for the API endpoints that are not chart shapes
//! themselves. Chart shapes are serialized straight from `aggregate`.

use serde::{Deserialize, Serialize};

use crate::dataset::CountryId;

/// Entry in the country listing
#[derive(Debug, Serialize, Deserialize)]
pub struct CountrySummaryDto {
    pub id: CountryId,
    pub country: String,
}

/// Country listing response
#[derive(Debug, Serialize, Deserialize)]
pub struct CountryListResponse {
    pub total: usize,
    pub countries: Vec<CountrySummaryDto>,
}

/// Pie slice label lookup response
#[derive(Debug, Serialize, Deserialize)]
pub struct PieLookupResponse {
    pub id: CountryId,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy, starting, degraded
    pub status: String,
    /// Snapshot state: loading, ready, unavailable
    pub dataset: String,
    /// Where the dataset is read from
    pub source: String,
    /// Number of countries held, when loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<usize>,
    /// RFC 3339 load time, when loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<String>,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
