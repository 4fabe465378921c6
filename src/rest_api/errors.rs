//! # REST API Errors
//!
//! Error types for the HTTP handler layer, mapped once at the boundary to
//! response codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::store::StoreError;

/// Result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Malformed request body
    #[error("Invalid JSON format")]
    Parse,

    /// Missing or invalid required fields
    #[error("{0}")]
    Validation(String),

    /// Malformed item identifier in the path
    #[error("Invalid item id: {0}")]
    InvalidId(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store backend failure
    #[error("Store error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Canonical validation error for absent or mistyped `name`/`age` keys
    pub fn missing_fields() -> Self {
        ApiError::Validation("Missing name or age in the request body".to_string())
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Parse => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(id) => ApiError::InvalidId(id),
            StoreError::Backend(msg) => ApiError::Internal(msg),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Parse.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::missing_fields().status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidId("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("down".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_canonical_messages() {
        assert_eq!(ApiError::Parse.to_string(), "Invalid JSON format");
        assert_eq!(
            ApiError::missing_fields().to_string(),
            "Missing name or age in the request body"
        );
    }

    #[test]
    fn test_store_error_mapping() {
        let err = ApiError::from(StoreError::InvalidId("bad".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::from(StoreError::Backend("refused".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
