//! # Error Mapping
//!
//! The single place where failures become HTTP responses. Handlers and
//! middleware return `ApiError`; its `IntoResponse` impl picks the status
//! code and body from the error kind.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::CatalogError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Message returned to clients for any internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Error response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code,
        }
    }
}

/// Error type returned by every handler
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub CatalogError);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(CatalogError::Validation(format!(
            "Invalid JSON body: {}",
            rejection.body_text()
        )))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError(CatalogError::Validation(format!(
            "Invalid query string: {}",
            rejection.body_text()
        )))
    }
}

impl ApiError {
    /// Build the status code and body for this error
    pub fn to_parts(&self) -> (StatusCode, ErrorResponse) {
        let code = self.0.status_code();
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = match &self.0 {
            CatalogError::Internal(detail) => {
                error!("Internal error: {}", detail);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        (status, ErrorResponse::new(self.0.kind(), message, status.as_u16()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.to_parts();
        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type ApiResult<T> = Result<T, ApiError>;
