//! # Queuet
//!
//! Task-management HTTP service backed by a Postgres record store with a
//! Redis read-through cache.
//!
//! ## Overview
//!
//! The service exposes five operations over tasks (create, get, update,
//! delete, list) and mediates every one of them through a cache-consistency
//! protocol: reads go through the fast-path cache and fall back to the
//! authoritative store, mutations hit the store first and then reconcile the
//! cache. The cache is a derived, disposable artifact; its absence or failure
//! never produces a wrong answer, only a slower one.
//!
//! ## Module Organization
//!
//! - [`models`] - Task entity, status set, and request types
//! - [`store`] - Authoritative record store ([`store::TaskStore`] trait and
//!   the Postgres implementation)
//! - [`cache`] - Fast-path cache ([`cache::TaskCache`] trait, Redis and
//!   in-memory backends, failure counters)
//! - [`service`] - The read-through / write-refresh protocol
//! - [`web`] - Axum HTTP surface
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured tracing initialization

pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod service;
pub mod store;
pub mod web;

pub use cache::{CacheStats, CacheStatsSnapshot, MemoryCache, RedisCache, TaskCache};
pub use config::QueuetConfig;
pub use error::{QueuetError, Result};
pub use models::{CreateTaskRequest, NewTask, Task, TaskPatch, TaskStatus, UpdateTaskRequest};
pub use service::TaskService;
pub use store::{PgTaskStore, TaskStore};
