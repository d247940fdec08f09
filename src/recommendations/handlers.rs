use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    analysis::{analyzer::analyze, gaps::identify_gaps, score::health_score},
    auth::jwt::AuthUser,
    error::AppError,
    meals::{dto::today, repo as meals_repo},
    profile::repo as profile_repo,
    recommendations::{dto::RecommendationResponse, generator::render_report, repo},
    state::AppState,
};

pub fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route("/recommendations", post(generate).get(list_all))
        .route("/recommendations/latest", get(latest))
}

/// Analyze today's intake, render the report and persist it.
#[instrument(skip(state))]
pub async fn generate(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<(StatusCode, Json<RecommendationResponse>), AppError> {
    let user = profile_repo::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    let totals = meals_repo::day_totals(&state.db, user_id, today()).await?;

    let analysis = analyze(&user, &totals);
    let score = health_score(&analysis);
    let gaps = identify_gaps(&analysis);
    let text = render_report(score, &gaps);

    let recommendation = repo::insert(&state.db, user_id, &text, score).await?;
    info!(user_id = %user_id, score, "recommendation generated");
    Ok((StatusCode::CREATED, Json(recommendation.into())))
}

#[instrument(skip(state))]
pub async fn latest(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<RecommendationResponse>, AppError> {
    let recommendation = repo::latest(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("No recommendation found"))?;
    Ok(Json(recommendation.into()))
}

#[instrument(skip(state))]
pub async fn list_all(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<RecommendationResponse>>, AppError> {
    let recommendations = repo::list_all(&state.db, user_id).await?;
    Ok(Json(
        recommendations
            .into_iter()
            .map(RecommendationResponse::from)
            .collect(),
    ))
}
