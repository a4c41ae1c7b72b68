//! Dataset source error types

use thiserror::Error;

/// Errors that can occur while fetching the dataset
#[derive(Error, Debug)]
pub enum SourceError {
    /// Local file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// Document is not a valid array of country records
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for dataset fetches
pub type SourceResult<T> = Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SourceError::Status {
            status: 404,
            url: "http://localhost/olympic.json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 404 from http://localhost/olympic.json"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SourceError = io_err.into();
        assert!(matches!(err, SourceError::Io(_)));
    }
}
