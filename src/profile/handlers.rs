use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::jwt::AuthUser,
    error::AppError,
    profile::{
        dto::{BodyMetrics, ProfileResponse, UpdateProfileRequest},
        repo,
    },
    state::AppState,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(get_profile).put(update_profile).delete(delete_account),
        )
        .route("/profile/metrics", get(get_metrics))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = repo::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    payload.validate()?;
    let user = repo::update_profile(&state.db, user_id, &payload)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    info!(user_id = %user.id, "profile updated");
    Ok(Json(user.into()))
}

#[instrument(skip(state))]
pub async fn get_metrics(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<BodyMetrics>, AppError> {
    let user = repo::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(Json(BodyMetrics::from(&user)))
}

#[instrument(skip(state))]
pub async fn delete_account(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<StatusCode, AppError> {
    if !repo::delete_user(&state.db, user_id).await? {
        return Err(AppError::not_found("User not found"));
    }
    info!(user_id = %user_id, "account deleted");
    Ok(StatusCode::NO_CONTENT)
}
