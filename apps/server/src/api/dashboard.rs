use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use wanderplan_core::dashboard::{DashboardView, TripExpenses};

use crate::{error::ApiResult, main_lib::AppState};

async fn get_dashboard(State(state): State<Arc<AppState>>) -> ApiResult<Json<DashboardView>> {
    let view = state.dashboard_service.get_dashboard().await?;
    Ok(Json(view))
}

async fn get_trip_expenses(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TripExpenses>> {
    let expenses = state.dashboard_service.get_trip_expenses(&id).await?;
    Ok(Json(expenses))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/trips/{id}/expenses", get(get_trip_expenses))
}
