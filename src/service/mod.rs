//! # Task Service
//!
//! Orchestrates all access between callers and the two stores, implementing
//! the read-through / write-refresh cache protocol.
//!
//! ## Protocol
//!
//! - **Create** validates the title before any store access, inserts with
//!   status `pending`, and never touches the cache (population is lazy on
//!   first read).
//! - **Get** consults the cache first. A hit returns the cached snapshot
//!   verbatim without touching the store. A miss (including any cache error)
//!   falls through to the store; the record is serialized, cached with a
//!   fixed TTL, and returned. A cache-write failure after a store hit is
//!   swallowed.
//! - **Update** validates the status before any store access, performs a
//!   single conditional COALESCE update returning the post-update row, then
//!   overwrites the cache entry with the fresh serialization so the next
//!   read is an immediate hit. A cache-write failure is swallowed; the
//!   caller still sees success.
//! - **Delete** deletes from the store, treats zero affected rows as
//!   not-found, and deletes the cache entry. A cache-delete failure is
//!   swallowed.
//! - **List** bypasses the cache entirely in both directions.
//!
//! ## Ordering and staleness
//!
//! Within one update or delete, the store mutation strictly precedes the
//! cache mutation, and success is only reported after the store mutation is
//! durable. The cache may therefore briefly disagree with the store after a
//! response, never the reverse. A swallowed cache-write failure extends that
//! window until the TTL of the last successful cache write expires.
//!
//! Concurrent updates to the same id race last-writer-wins at the cache:
//! their refresh writes may land in either order, so the cache can end up
//! holding the row of the update that lost at the database. There is no
//! version token to detect this. Known limitation, kept for compatibility
//! with the original behavior.
//!
//! The service is stateless between calls; all durable state lives in the
//! injected [`TaskStore`] and [`TaskCache`].

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, CacheStatsSnapshot, TaskCache};
use crate::constants::{task_cache_key, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::error::{QueuetError, Result};
use crate::models::{CreateTaskRequest, NewTask, Task, TaskPatch, TaskStatus, UpdateTaskRequest};
use crate::store::TaskStore;

pub struct TaskService {
    store: Arc<dyn TaskStore>,
    cache: Arc<dyn TaskCache>,
    cache_ttl: Duration,
    cache_stats: CacheStats,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>, cache: Arc<dyn TaskCache>, cache_ttl: Duration) -> Self {
        Self {
            store,
            cache,
            cache_ttl,
            cache_stats: CacheStats::default(),
        }
    }

    /// Snapshot of the cache health counters, for the health endpoint.
    pub fn cache_stats(&self) -> CacheStatsSnapshot {
        self.cache_stats.snapshot()
    }

    /// Create a task with status `pending`, returning the generated id.
    /// One store insert; no cache interaction.
    pub async fn create(&self, request: CreateTaskRequest) -> Result<i64> {
        if request.title.is_empty() {
            return Err(QueuetError::Validation("title is required".to_string()));
        }

        let now = Utc::now();
        let task_id = self
            .store
            .insert(NewTask {
                title: request.title,
                description: request.description,
                status: TaskStatus::Pending,
                created_at: now,
            })
            .await?;

        info!(task_id, "task created");
        Ok(task_id)
    }

    /// Read-through get. Returns the serialized task snapshot: verbatim
    /// cached bytes on a hit, a fresh serialization of the store row on a
    /// miss.
    pub async fn get(&self, task_id: i64) -> Result<Vec<u8>> {
        let key = task_cache_key(task_id);

        match self.cache.get(&key).await {
            Ok(Some(snapshot)) => {
                self.cache_stats.record_hit();
                debug!(task_id, "cache hit");
                return Ok(snapshot);
            }
            Ok(None) => {
                self.cache_stats.record_miss();
                debug!(task_id, "cache miss");
            }
            Err(err) => {
                // A cache error is a miss: fall through to the store.
                self.cache_stats.record_read_failure();
                warn!(task_id, error = %err, "cache read failed, falling back to store");
            }
        }

        let task = self
            .store
            .get_by_id(task_id)
            .await?
            .ok_or(QueuetError::NotFound)?;

        let snapshot = serde_json::to_vec(&task)?;
        if let Err(err) = self.cache.set(&key, &snapshot, self.cache_ttl).await {
            self.cache_stats.record_write_failure();
            warn!(task_id, error = %err, "cache populate failed after store read");
        }

        Ok(snapshot)
    }

    /// Conditional update followed by a cache refresh. Omitted fields retain
    /// their prior values; `updated_at` is always refreshed.
    pub async fn update(&self, task_id: i64, request: UpdateTaskRequest) -> Result<Task> {
        let patch = patch_from_request(request)?;

        let now = Utc::now();
        let task = self
            .store
            .update_by_id(task_id, patch, now)
            .await?
            .ok_or(QueuetError::NotFound)?;

        // Store write is durable here. Refresh rather than invalidate, so
        // the next read is an immediate hit with correct data.
        self.refresh_cache(&task).await;

        info!(task_id, status = %task.status, "task updated");
        Ok(task)
    }

    /// Delete from the store, then drop the cache entry.
    pub async fn delete(&self, task_id: i64) -> Result<()> {
        let rows_affected = self.store.delete_by_id(task_id).await?;
        if rows_affected == 0 {
            return Err(QueuetError::NotFound);
        }

        let key = task_cache_key(task_id);
        if let Err(err) = self.cache.delete(&key).await {
            self.cache_stats.record_delete_failure();
            warn!(
                task_id,
                error = %err,
                "cache delete failed, stale entry remains until TTL expiry"
            );
        }

        info!(task_id, "task deleted");
        Ok(())
    }

    /// Paginated listing, newest first. Never touches the cache in either
    /// direction. Invalid or non-positive parameters fall back to defaults.
    pub async fn list(&self, page: Option<u32>, size: Option<u32>) -> Result<Vec<Task>> {
        let (limit, offset) = page_window(page, size);
        self.store.list(limit, offset).await
    }

    /// Overwrite the cache entry for `task` with its fresh serialization.
    /// Failures are swallowed, counted, and logged: the store mutation has
    /// already succeeded and the caller must see success.
    async fn refresh_cache(&self, task: &Task) {
        let key = task_cache_key(task.id);
        let snapshot = match serde_json::to_vec(task) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                self.cache_stats.record_write_failure();
                warn!(task_id = task.id, error = %err, "task snapshot serialization failed");
                return;
            }
        };
        if let Err(err) = self.cache.set(&key, &snapshot, self.cache_ttl).await {
            self.cache_stats.record_write_failure();
            warn!(
                task_id = task.id,
                error = %err,
                "cache refresh failed, entry may be stale until TTL expiry"
            );
        }
    }
}

/// Validate an update request into a store patch. Status values outside the
/// fixed set are rejected here, before any store access. Empty strings are
/// treated as omitted fields, matching the store's COALESCE merge.
fn patch_from_request(request: UpdateTaskRequest) -> Result<TaskPatch> {
    let status = match request.status.as_deref() {
        None | Some("") => None,
        Some(value) => Some(TaskStatus::parse(value).ok_or_else(|| {
            QueuetError::Validation(format!("invalid status value: {value}"))
        })?),
    };

    Ok(TaskPatch {
        title: request.title.filter(|t| !t.is_empty()),
        description: request.description.filter(|d| !d.is_empty()),
        status,
    })
}

/// Normalize pagination parameters into a (limit, offset) window. Invalid or
/// non-positive values fall back to the defaults rather than erroring.
fn page_window(page: Option<u32>, size: Option<u32>) -> (i64, i64) {
    let page = page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE);
    let size = size.filter(|s| *s >= 1).unwrap_or(DEFAULT_PAGE_SIZE);
    let offset = i64::from(page - 1).saturating_mul(i64::from(size));
    (i64::from(size), offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn page_window_defaults_when_absent() {
        assert_eq!(page_window(None, None), (10, 0));
    }

    #[test]
    fn page_window_defaults_when_non_positive() {
        assert_eq!(page_window(Some(0), Some(0)), (10, 0));
    }

    #[test]
    fn page_window_computes_offset() {
        assert_eq!(page_window(Some(3), Some(25)), (25, 50));
    }

    #[test]
    fn patch_rejects_status_outside_fixed_set() {
        let request = UpdateTaskRequest {
            status: Some("done".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            patch_from_request(request),
            Err(QueuetError::Validation(_))
        ));
    }

    #[test]
    fn patch_treats_empty_strings_as_omitted() {
        let request = UpdateTaskRequest {
            title: Some(String::new()),
            description: Some(String::new()),
            status: Some(String::new()),
        };
        let patch = patch_from_request(request).unwrap();
        assert_eq!(patch.title, None);
        assert_eq!(patch.description, None);
        assert_eq!(patch.status, None);
    }

    #[test]
    fn patch_passes_valid_fields_through() {
        let request = UpdateTaskRequest {
            title: Some("New title".to_string()),
            description: None,
            status: Some("in_progress".to_string()),
        };
        let patch = patch_from_request(request).unwrap();
        assert_eq!(patch.title.as_deref(), Some("New title"));
        assert_eq!(patch.description, None);
        assert_eq!(patch.status, Some(TaskStatus::InProgress));
    }

    proptest! {
        #[test]
        fn page_window_is_always_a_valid_store_window(
            page in proptest::option::of(any::<u32>()),
            size in proptest::option::of(any::<u32>()),
        ) {
            let (limit, offset) = page_window(page, size);
            prop_assert!(limit >= 1);
            prop_assert!(offset >= 0);

            // Valid inputs produce exactly the requested window.
            if let (Some(p), Some(s)) = (page, size) {
                if p >= 1 && s >= 1 {
                    prop_assert_eq!(limit, i64::from(s));
                    prop_assert_eq!(
                        offset,
                        i64::from(p - 1).saturating_mul(i64::from(s))
                    );
                }
            }
        }
    }
}
