//! # Web API
//!
//! Axum HTTP surface over the task service. Routing and parameter parsing
//! only; all protocol logic lives in [`crate::service`].

pub mod handlers;
pub mod response_types;
pub mod state;

use axum::routing::get;
use axum::Router;

use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/api/v1/tasks",
            get(handlers::tasks::list_tasks).post(handlers::tasks::create_task),
        )
        .route(
            "/api/v1/tasks/{id}",
            get(handlers::tasks::get_task)
                .put(handlers::tasks::update_task)
                .delete(handlers::tasks::delete_task),
        )
        .with_state(state)
}
