//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::aggregate::{NOT_FOUND_MESSAGE, UNAVAILABLE_MESSAGE};
use crate::dataset::CountryId;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Unknown route or malformed identifier
    #[error("Not found: {0}")]
    NotFound(String),

    /// Well-formed id that is not in the dataset
    #[error("{}", NOT_FOUND_MESSAGE)]
    CountryNotFound(CountryId),

    /// The dataset failed to load
    #[error("{}", UNAVAILABLE_MESSAGE)]
    DatasetUnavailable,

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::CountryNotFound(_) => (StatusCode::NOT_FOUND, "COUNTRY_NOT_FOUND"),
            ApiError::DatasetUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "DATASET_UNAVAILABLE")
            }
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let request_id = uuid::Uuid::new_v4().to_string();

        match &self {
            ApiError::CountryNotFound(id) => tracing::info!(
                request_id = %request_id,
                country_id = id,
                "Country not found"
            ),
            ApiError::NotFound(_) => tracing::debug!(
                request_id = %request_id,
                error_message = %self,
                "Route not found"
            ),
            _ => tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "API error occurred"
            ),
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
