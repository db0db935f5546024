//! # Record Store
//!
//! Durable, authoritative storage for task records. The store is the system
//! of record: the cache layer never holds the sole surviving copy of a task.
//!
//! The [`TaskStore`] trait is the seam between the service protocol and the
//! database so the protocol can be exercised against an in-memory fake with
//! call counting. The production implementation is [`PgTaskStore`].

mod postgres;

pub use postgres::PgTaskStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{NewTask, Task, TaskPatch};

/// Authoritative store operations. Each method is a single request-response
/// round trip; the store provides atomicity for the conditional update and
/// for insert/delete.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert a new record, returning the generated id.
    async fn insert(&self, new_task: NewTask) -> Result<i64>;

    /// Point lookup by id.
    async fn get_by_id(&self, task_id: i64) -> Result<Option<Task>>;

    /// Conditional update: each patch field is applied if present, otherwise
    /// the current value is retained; `updated_at` is always refreshed to
    /// `now`. Returns the full post-update record, or `None` if no row
    /// matched.
    async fn update_by_id(
        &self,
        task_id: i64,
        patch: TaskPatch,
        now: DateTime<Utc>,
    ) -> Result<Option<Task>>;

    /// Delete by id, returning the number of rows affected.
    async fn delete_by_id(&self, task_id: i64) -> Result<u64>;

    /// Paginated listing ordered by creation time descending.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Task>>;
}
