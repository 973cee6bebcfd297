use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::sync::mpsc;
use wanderplan_core::{
    notifications::Notice,
    trips::{PlanningStarted, TripFormOptions, TripRequest, TripRequestForm},
};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanTripResponse {
    trip_request: TripRequest,
    notice: Notice,
    path: String,
}

async fn get_form_options(State(state): State<Arc<AppState>>) -> Json<TripFormOptions> {
    Json(state.trip_planner.form_options())
}

async fn validate_trip(
    State(state): State<Arc<AppState>>,
    Json(form): Json<TripRequestForm>,
) -> ApiResult<Json<TripRequest>> {
    let trip_request = state.trip_planner.validate(&form)?;
    Ok(Json(trip_request))
}

/// Accepts the form and answers once the simulated planning delay has elapsed.
/// A client that disconnects first drops the pending hand-off with this future.
async fn plan_trip(
    State(state): State<Arc<AppState>>,
    Json(form): Json<TripRequestForm>,
) -> ApiResult<Json<PlanTripResponse>> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let PlanningStarted {
        trip_request,
        notice,
        pending,
    } = state.trip_planner.submit(&form, tx)?;

    let navigation = rx
        .recv()
        .await
        .ok_or_else(|| ApiError::Internal("Trip planning was interrupted".to_string()))?;
    drop(pending);

    Ok(Json(PlanTripResponse {
        trip_request,
        notice,
        path: navigation.path,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/trips/options", get(get_form_options))
        .route("/trips/validate", post(validate_trip))
        .route("/trips/plan", post(plan_trip))
}
