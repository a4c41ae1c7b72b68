//! Dataset Adapter
//!
//! Loads the Olympic participation document once and shares it:
//!
//! - **types**: Country and participation records, the `Snapshot`
//! - **source**: Where the document is read from (file, HTTP, memory)
//! - **snapshot**: The once-only loader and watch-channel holder
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use medalboard::dataset::{from_location, SnapshotStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = SnapshotStore::new(from_location("assets/mock/olympic.json"));
//!
//!     match store.load().await {
//!         Some(snapshot) => println!("{} countries", snapshot.len()),
//!         None => println!("no data"),
//!     }
//! }
//! ```

pub mod error;
pub mod snapshot;
pub mod source;
pub mod types;

pub use error::{SourceError, SourceResult};
pub use snapshot::{SnapshotState, SnapshotStore, SnapshotSubscription};
pub use source::{from_location, DataSource, FileSource, HttpSource, StaticSource};
pub use types::{Country, CountryId, Participation, ParticipationId, Snapshot};
