//! Shared test fixtures: an in-memory record store with call counting, a
//! cache wrapper that counts operations, and a cache that fails every
//! operation for exercising the fallback paths.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use queuet::cache::{CacheError, CacheResult, MemoryCache, TaskCache};
use queuet::error::Result;
use queuet::models::{NewTask, Task, TaskPatch};
use queuet::store::TaskStore;

/// In-memory [`TaskStore`] with a call counter, so tests can assert that
/// validation happens before any store access and that cache hits never
/// reach the store.
pub struct InMemoryStore {
    tasks: Mutex<HashMap<i64, Task>>,
    next_id: AtomicI64,
    calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            calls: AtomicUsize::new(0),
        }
    }

    /// Total number of store operations issued so far.
    pub fn store_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryStore {
    async fn insert(&self, new_task: NewTask) -> Result<i64> {
        self.record_call();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let task = Task {
            id,
            title: new_task.title,
            description: new_task.description,
            status: new_task.status,
            created_at: new_task.created_at,
            updated_at: new_task.created_at,
        };
        self.tasks.lock().unwrap().insert(id, task);
        Ok(id)
    }

    async fn get_by_id(&self, task_id: i64) -> Result<Option<Task>> {
        self.record_call();
        Ok(self.tasks.lock().unwrap().get(&task_id).cloned())
    }

    async fn update_by_id(
        &self,
        task_id: i64,
        patch: TaskPatch,
        now: DateTime<Utc>,
    ) -> Result<Option<Task>> {
        self.record_call();
        let mut tasks = self.tasks.lock().unwrap();
        let Some(task) = tasks.get_mut(&task_id) else {
            return Ok(None);
        };
        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = Some(description);
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        task.updated_at = now;
        Ok(Some(task.clone()))
    }

    async fn delete_by_id(&self, task_id: i64) -> Result<u64> {
        self.record_call();
        let removed = self.tasks.lock().unwrap().remove(&task_id);
        Ok(u64::from(removed.is_some()))
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Task>> {
        self.record_call();
        let mut tasks: Vec<Task> = self.tasks.lock().unwrap().values().cloned().collect();
        // Newest first; id breaks creation-time ties deterministically.
        tasks.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(tasks
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }
}

/// [`MemoryCache`] wrapper counting every cache operation, so tests can
/// assert that create and list never touch the cache.
#[derive(Default)]
pub struct CountingCache {
    inner: MemoryCache,
    gets: AtomicUsize,
    sets: AtomicUsize,
    deletes: AtomicUsize,
}

impl CountingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskCache for CountingCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> CacheResult<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(key).await
    }
}

/// Cache whose every operation fails, simulating an unavailable cache node.
pub struct FailingCache;

#[async_trait]
impl TaskCache for FailingCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
        Err(CacheError("injected cache failure".to_string()))
    }

    async fn set(&self, _key: &str, _value: &[u8], _ttl: Duration) -> CacheResult<()> {
        Err(CacheError("injected cache failure".to_string()))
    }

    async fn delete(&self, _key: &str) -> CacheResult<()> {
        Err(CacheError("injected cache failure".to_string()))
    }
}
