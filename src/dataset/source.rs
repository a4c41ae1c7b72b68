//! Dataset Sources
//!
//! Where the participation document comes from:
//! - Local JSON file (the default fixture path)
//! - Remote JSON document over HTTP
//! - In-memory records (tests, embedding)

use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;

use super::error::{SourceError, SourceResult};
use super::types::Country;

/// Common trait for all dataset sources
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Human-readable location used in logs and health output
    fn describe(&self) -> String;

    /// Read and parse the whole document
    async fn fetch(&self) -> SourceResult<Vec<Country>>;
}

/// Build a source from a location string.
///
/// `http://` and `https://` locations are fetched over HTTP, anything else
/// is treated as a filesystem path.
pub fn from_location(location: &str) -> Box<dyn DataSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

/// Reads the dataset from a local JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> SourceResult<Vec<Country>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let countries = serde_json::from_slice(&bytes)?;
        Ok(countries)
    }
}

/// Fetches the dataset with a single HTTP GET
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> SourceResult<Vec<Country>> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        // Parse from the raw body so malformed documents surface as Parse errors
        let bytes = response.bytes().await?;
        let countries = serde_json::from_slice(&bytes)?;
        Ok(countries)
    }
}

/// Serves a fixed in-memory collection
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    countries: Vec<Country>,
}

impl StaticSource {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }
}

#[async_trait]
impl DataSource for StaticSource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn fetch(&self) -> SourceResult<Vec<Country>> {
        Ok(self.countries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{SnapshotState, SnapshotStore};
    use axum::{http::StatusCode, routing::get, Json, Router};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Serve `/olympic.json` with one country on an ephemeral port; every
    /// other path answers 404. Returns the base URL.
    async fn spawn_dataset_server() -> String {
        let app = Router::new()
            .route(
                "/olympic.json",
                get(|| async {
                    Json(vec![Country {
                        id: 1,
                        country: "France".to_string(),
                        participations: Vec::new(),
                    }])
                }),
            )
            .fallback(|| async { StatusCode::NOT_FOUND });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_file_source_reads_document() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "country": "France", "participations": [
                {{"id": 1, "year": 2000, "medalsCount": 5, "athleteCount": 10}}
            ]}}]"#
        )
        .unwrap();

        let source = FileSource::new(file.path());
        let countries = source.fetch().await.unwrap();

        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].participations.len(), 1);
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.json"));

        assert!(matches!(source.fetch().await, Err(SourceError::Io(_))));
    }

    #[tokio::test]
    async fn test_file_source_malformed_document() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"not": "an array"}}"#).unwrap();

        let source = FileSource::new(file.path());
        assert!(matches!(source.fetch().await, Err(SourceError::Parse(_))));
    }

    #[test]
    fn test_from_location() {
        assert_eq!(
            from_location("https://example.com/olympic.json").describe(),
            "https://example.com/olympic.json"
        );
        assert_eq!(
            from_location("assets/mock/olympic.json").describe(),
            "assets/mock/olympic.json"
        );
    }

    #[tokio::test]
    async fn test_http_source_reads_document() {
        let base = spawn_dataset_server().await;
        let source = HttpSource::new(format!("{}/olympic.json", base));

        let countries = source.fetch().await.unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].country, "France");
    }

    #[tokio::test]
    async fn test_http_source_error_status() {
        let base = spawn_dataset_server().await;
        let source = HttpSource::new(format!("{}/missing.json", base));

        match source.fetch().await {
            Err(SourceError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_network_error_leaves_snapshot_unavailable() {
        // Nothing listens on port 1; the connection is refused
        let source = HttpSource::new("http://127.0.0.1:1/olympic.json");
        assert!(matches!(source.fetch().await, Err(SourceError::Http(_))));

        let store = SnapshotStore::new(Box::new(HttpSource::new("http://127.0.0.1:1/olympic.json")));
        assert!(store.load().await.is_none());
        assert!(matches!(store.state(), SnapshotState::Unavailable));
    }

    #[tokio::test]
    async fn test_http_store_states() {
        let base = spawn_dataset_server().await;

        let missing = SnapshotStore::new(from_location(&format!("{}/missing.json", base)));
        assert!(missing.load().await.is_none());
        assert_eq!(missing.state().as_str(), "unavailable");

        let found = SnapshotStore::new(from_location(&format!("{}/olympic.json", base)));
        let snapshot = found.load().await.unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(found.state().as_str(), "ready");
    }
}
