//! # Task Handlers
//!
//! Thin HTTP adapters over [`TaskService`](crate::service::TaskService); all
//! validation and cache-protocol logic lives there. The get handler returns
//! the service's serialized snapshot verbatim so a cache hit is never
//! re-encoded.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CreateTaskRequest, Task, UpdateTaskRequest};
use crate::web::response_types::ApiResult;
use crate::web::state::AppState;

/// Response for successful task creation.
#[derive(Debug, Serialize)]
pub struct TaskCreatedResponse {
    pub id: i64,
}

/// Query parameters for task listing. Raw strings: values that do not parse
/// as positive integers fall back to defaults rather than erroring.
#[derive(Debug, Deserialize)]
pub struct TaskListQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

/// POST /api/v1/tasks
pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskCreatedResponse>)> {
    let id = state.service.create(request).await?;
    Ok((StatusCode::CREATED, Json(TaskCreatedResponse { id })))
}

/// GET /api/v1/tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> ApiResult<Response> {
    let snapshot = state.service.get(task_id).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], snapshot).into_response())
}

/// PUT /api/v1/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    Json(request): Json<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    let task = state.service.update(task_id, request).await?;
    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.service.delete(task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/tasks?page=&size=
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<TaskListQuery>,
) -> ApiResult<Json<Vec<Task>>> {
    let page = query.page.as_deref().and_then(|p| p.parse::<u32>().ok());
    let size = query.size.as_deref().and_then(|s| s.parse::<u32>().ok());
    debug!(?page, ?size, "listing tasks");

    let tasks = state.service.list(page, size).await?;
    Ok(Json(tasks))
}
