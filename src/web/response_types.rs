//! # Web API Error Types
//!
//! HTTP error responses for the web surface. Each failure class maps to one
//! stable status/code pair with a stable message body; internal error text
//! never leaks to callers (server-class failures are logged here instead).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::error::QueuetError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found")]
    NotFound,

    #[error("Invalid request: {message}")]
    BadRequest { message: String },

    #[error("Database operation failed")]
    DatabaseError,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<QueuetError> for ApiError {
    fn from(err: QueuetError) -> Self {
        match err {
            QueuetError::Validation(message) => ApiError::BadRequest { message },
            QueuetError::NotFound => ApiError::NotFound,
            QueuetError::Database(detail) => {
                error!(error = %detail, "database operation failed");
                ApiError::DatabaseError
            }
            QueuetError::Cache(detail)
            | QueuetError::Serialization(detail)
            | QueuetError::Configuration(detail) => {
                error!(error = %detail, "internal error");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_code, message) = match &self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found"),

            ApiError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message.as_str())
            }

            ApiError::DatabaseError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Database operation failed",
            ),

            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error",
            ),
        };

        let error_response = json!({
            "error": {
                "code": error_code,
                "message": message
            }
        });

        (status_code, Json(error_response)).into_response()
    }
}
