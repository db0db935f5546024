//! # Structured Error Handling
//!
//! Crate-wide error taxonomy. Each variant maps to exactly one caller-visible
//! failure class: validation errors are rejected before any store access,
//! not-found is distinguished from server errors, and cache errors exist so
//! the service can observe them without ever surfacing them to callers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueuetError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("task not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(String),

    #[error("cache error: {0}")]
    Cache(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<sqlx::Error> for QueuetError {
    fn from(err: sqlx::Error) -> Self {
        QueuetError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for QueuetError {
    fn from(err: serde_json::Error) -> Self {
        QueuetError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QueuetError>;
