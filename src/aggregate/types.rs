//! Chart-ready output shapes
//!
//! Field names follow what the charting front end consumes directly:
//! `name`/`value` pairs for pie slices and line points.

use serde::{Deserialize, Serialize};

use crate::dataset::CountryId;

/// One slice of the medals-per-country pie chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PieDatum {
    pub id: CountryId,
    /// Country name
    pub name: String,
    /// Sum of medals across every participation
    pub value: u64,
}

/// One point of a line chart: year label and medal count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinePoint {
    pub name: String,
    pub value: u64,
}

/// A named line-chart series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineSeries {
    pub name: String,
    pub series: Vec<LinePoint>,
}

/// Everything the home view shows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HomeSummary {
    pub total_countries: usize,
    pub total_participations: usize,
    pub pie_chart: Vec<PieDatum>,
}

/// Deduplicated totals for one country
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryTotals {
    pub distinct_participations: usize,
    pub medals: u64,
    pub athletes: u64,
}

/// Everything the country detail view shows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryDetail {
    pub id: CountryId,
    pub country: String,
    pub totals: CountryTotals,
    /// Always a single series; kept as a list for the chart component
    pub line_chart: Vec<LineSeries>,
}
