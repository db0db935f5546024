//! # Web API Application State
//!
//! Shared state for request handlers: the task service, which owns the store
//! and cache handles. The service is stateless between calls, so handlers
//! may run fully concurrently.

use std::sync::Arc;

use crate::service::TaskService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TaskService>,
}

impl AppState {
    pub fn new(service: Arc<TaskService>) -> Self {
        Self { service }
    }
}
