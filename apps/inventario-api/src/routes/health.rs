//! `GET /health`

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

pub(super) fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// 200 with migration counts while the database answers, 503 otherwise.
async fn health(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    if !state.db.health_check().await {
        return Err(ApiError::unavailable("Database unavailable"));
    }

    let (total, applied) = state.db.migration_status().await?;

    Ok(Json(json!({
        "status": "ok",
        "migrations": { "total": total, "applied": applied },
    })))
}
