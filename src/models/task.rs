//! # Task Model
//!
//! The sole domain entity. A task is created by a single store insert
//! returning a generated id, mutated in place by conditional updates where
//! each field is independently optional, and destroyed by a single delete.
//!
//! ## Database Schema
//!
//! Maps to the `tasks` table:
//! - `id`: primary key (BIGSERIAL), never reused
//! - `title`: required, non-empty (TEXT)
//! - `description`: optional (TEXT)
//! - `status`: member of the fixed status set (TEXT)
//! - `created_at`, `updated_at`: TIMESTAMPTZ; `created_at` is fixed at
//!   creation, `updated_at` refreshed on every successful mutation

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed status set for a task. Any write carrying a status outside this set
/// is rejected before reaching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Parse a status from its wire form. Returns `None` for anything outside
    /// the fixed set.
    pub fn parse(value: &str) -> Option<TaskStatus> {
        match value {
            "pending" => Some(TaskStatus::Pending),
            "in_progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task record as held by the authoritative store.
///
/// The cached snapshot of a task, when present, is a byte-for-byte
/// `serde_json` serialization of some version of this struct that existed in
/// the store at or before the last write the service performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a new task (generated fields absent). Both timestamps
/// are set from `created_at` at insert time.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated partial update. `None` fields retain their prior values via a
/// COALESCE merge performed atomically by the store in one round trip.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

/// Body of `POST /api/v1/tasks`. A missing title deserializes to the empty
/// string so the service-level validation is the single rejection point.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `PUT /api/v1/tasks/{id}`. Status arrives as a raw string and is
/// validated against the fixed set before any store access.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
