//! # Medalboard
//!
//! Olympic medals dashboard backend. Loads a static dataset of country
//! participation records once, holds it as an immutable snapshot, and
//! serves the chart-ready views derived from it.
//!
//! ## Modules
//!
//! - [`dataset`]: Record types, sources and the once-loaded snapshot
//! - [`aggregate`]: Home and country detail aggregations
//! - [`api`]: Read-only REST API with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use medalboard::aggregate;
//! use medalboard::dataset::{from_location, SnapshotStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = SnapshotStore::new(from_location("assets/mock/olympic.json"));
//!
//!     if let Some(snapshot) = store.load().await {
//!         let summary = aggregate::summarize(snapshot.countries());
//!         println!(
//!             "{} countries, {} JOs",
//!             summary.total_countries, summary.total_participations
//!         );
//!     }
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod config;
pub mod dataset;
pub mod logging;

// Re-export top-level types for convenience
pub use dataset::{
    Country, CountryId, DataSource, Participation, Snapshot, SnapshotState, SnapshotStore,
    SnapshotSubscription, SourceError,
};

pub use aggregate::{
    CountryDetail, CountryTotals, DetailState, HomeSummary, LinePoint, LineSeries, PieDatum,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DatasetConfig, LoadedConfig, LoggingConfig};
