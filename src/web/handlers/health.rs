//! # Health Check Handler
//!
//! Liveness endpoint that also exposes the cache health counters, so a
//! degraded cache is visible to operators even though cache failures never
//! fail requests.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::cache::CacheStatsSnapshot;
use crate::web::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
    cache: CacheStatsSnapshot,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        cache: state.service.cache_stats(),
    })
}
