//! Aggregators
//!
//! Turn the participation dataset into chart-ready shapes:
//!
//! - **home**: distinct counts and the medals-per-country pie chart
//! - **detail**: per-country totals, the medals-per-year line chart and the
//!   detail view lifecycle
//! - **types**: Output shapes shared by both views
//!
//! All functions are pure and operate on borrowed slices of the snapshot.

pub mod detail;
pub mod home;
pub mod types;

pub use detail::{
    build_detail, parse_country_id, resolve_detail, select_country, to_line_series, totals,
    DetailState, InvalidCountryId, NOT_FOUND_MESSAGE, UNAVAILABLE_MESSAGE,
};
pub use home::{
    count_distinct_countries, count_distinct_participations, find_by_label, summarize,
    to_pie_chart_data,
};
pub use types::{CountryDetail, CountryTotals, HomeSummary, LinePoint, LineSeries, PieDatum};
