//! # Fast-Path Cache
//!
//! Key-value cache mapping a task id to a serialized snapshot of that task,
//! with time-based expiration. The cache is best-effort: an entry may be
//! absent at any time without correctness impact, and cache failures never
//! fail a request.
//!
//! The [`TaskCache`] trait is an injected capability rather than a
//! module-level singleton, so the service can be tested against an in-memory
//! implementation of the same get/set/delete contract. Backends:
//! [`RedisCache`] for production, [`MemoryCache`] for tests and cache-less
//! development.

mod memory;
mod redis;
mod stats;

pub use memory::MemoryCache;
pub use redis::RedisCache;
pub use stats::{CacheStats, CacheStatsSnapshot};

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Error from a cache backend. Never surfaced to callers: the service treats
/// a read failure as a miss and swallows write/delete failures after
/// counting them.
#[derive(Debug, Error)]
#[error("cache operation failed: {0}")]
pub struct CacheError(pub String);

pub type CacheResult<T> = std::result::Result<T, CacheError>;

/// Cache operations. Each is individually atomic at the backend.
#[async_trait]
pub trait TaskCache: Send + Sync {
    /// Fetch the value at `key`, or `None` if absent or expired.
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>>;

    /// Store `value` at `key` with the given time-to-live.
    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> CacheResult<()>;

    /// Remove the entry at `key`. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> CacheResult<()>;
}
