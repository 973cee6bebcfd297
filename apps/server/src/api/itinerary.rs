use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use wanderplan_core::{
    itinerary::{ActivityEdit, Itinerary, ItineraryPage, ItineraryView, ViewMode},
    notifications::Notice,
    trips::TripRequest,
};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct PresentItineraryRequest {
    trip_request: Option<TripRequest>,
    view_mode: ViewMode,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EditActivityRequest {
    itinerary: Itinerary,
    edit: ActivityEdit,
    #[serde(default)]
    view_mode: ViewMode,
}

async fn present_itinerary(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PresentItineraryRequest>,
) -> ApiResult<Json<ItineraryPage>> {
    let page = state
        .itinerary_service
        .present(body.trip_request.as_ref(), body.view_mode)
        .await?;
    Ok(Json(page))
}

async fn edit_activity(
    Path(id): Path<u32>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<EditActivityRequest>,
) -> ApiResult<Json<ItineraryView>> {
    let (_, view) =
        state
            .itinerary_service
            .edit_activity(body.itinerary, id, &body.edit, body.view_mode)?;
    Ok(Json(view))
}

async fn save_itinerary(
    State(state): State<Arc<AppState>>,
    Json(itinerary): Json<Itinerary>,
) -> Json<Notice> {
    Json(state.itinerary_service.save_itinerary(&itinerary))
}

async fn export_itinerary(
    State(state): State<Arc<AppState>>,
    Json(itinerary): Json<Itinerary>,
) -> Json<Notice> {
    Json(state.itinerary_service.export_pdf(&itinerary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/itinerary", post(present_itinerary))
        .route("/itinerary/activities/{id}", post(edit_activity))
        .route("/itinerary/save", post(save_itinerary))
        .route("/itinerary/export", post(export_itinerary))
}
