//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::services::AdvertisementError;

/// Failure reported by a document store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Backend(String),
}

/// Application error type returned by HTTP handlers
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Generic(String),
}

/// Machine-readable error code carried in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    AdvertisementNotFound,
    ValidationError,
    GenericError,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_code: ErrorCode,
    pub error_message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Generic(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::AdvertisementNotFound,
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::Generic(_) => ErrorCode::GenericError,
        }
    }
}

impl From<AdvertisementError> for AppError {
    fn from(err: AdvertisementError) -> Self {
        match err {
            AdvertisementError::NotFound(msg) => AppError::NotFound(msg),
            AdvertisementError::Validation(e) => AppError::Validation(e.to_string()),
            AdvertisementError::Generic(msg) => AppError::Generic(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        if let AppError::Generic(msg) = &self {
            tracing::error!("Generic error: {}", msg);
        }

        let body = ErrorResponse {
            error_code: code,
            error_message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
