use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use wanderplan_core::{
    notifications::Notice,
    profile::{PasswordChange, Profile},
};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileView {
    #[serde(flatten)]
    profile: Profile,
    initials: String,
}

impl From<Profile> for ProfileView {
    fn from(profile: Profile) -> Self {
        Self {
            initials: profile.initials(),
            profile,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveProfileResponse {
    profile: ProfileView,
    notice: Notice,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordResponse {
    passwords: PasswordChange,
    notice: Notice,
}

async fn get_profile(State(state): State<Arc<AppState>>) -> ApiResult<Json<ProfileView>> {
    let profile = state.profile_service.get_profile()?;
    Ok(Json(profile.into()))
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    Json(profile): Json<Profile>,
) -> ApiResult<Json<SaveProfileResponse>> {
    let (profile, notice) = state.profile_service.save_profile(profile)?;
    Ok(Json(SaveProfileResponse {
        profile: profile.into(),
        notice,
    }))
}

async fn change_password(
    State(state): State<Arc<AppState>>,
    Json(mut passwords): Json<PasswordChange>,
) -> ApiResult<Json<ChangePasswordResponse>> {
    let notice = state.profile_service.change_password(&mut passwords)?;
    Ok(Json(ChangePasswordResponse { passwords, notice }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/profile/password", post(change_password))
}
