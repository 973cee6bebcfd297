use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tokio::task;
use wanderplan_core::navigation::{nav_items, NavItem};
use wanderplan_storage_sqlite::db;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the database answers a trivial query.
async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    let pool = state.db_pool.clone();
    task::spawn_blocking(move || db::ping(&pool))
        .await
        .map_err(|e| ApiError::Internal(format!("Readiness check aborted: {}", e)))??;
    Ok("ok")
}

async fn navigation() -> Json<Vec<NavItem>> {
    Json(nav_items())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/navigation", get(navigation))
}
