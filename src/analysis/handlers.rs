use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::instrument;

use crate::{
    analysis::{
        analyzer::{analyze, DailyAnalysis},
        gaps::identify_gaps,
        score::{health_score, ScoreCategory},
    },
    auth::jwt::AuthUser,
    error::AppError,
    meals::{dto::today, repo as meals_repo},
    profile::repo as profile_repo,
    state::AppState,
};

pub fn analysis_routes() -> Router<AppState> {
    Router::new().route("/analysis/today", get(analyze_today))
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    #[serde(flatten)]
    pub analysis: DailyAnalysis,
    pub health_score: i32,
    pub score_category: ScoreCategory,
    pub gaps: Vec<String>,
}

#[instrument(skip(state))]
pub async fn analyze_today(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<AnalysisResponse>, AppError> {
    let user = profile_repo::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    let totals = meals_repo::day_totals(&state.db, user_id, today()).await?;

    let analysis = analyze(&user, &totals);
    let score = health_score(&analysis);
    let gaps = identify_gaps(&analysis);

    Ok(Json(AnalysisResponse {
        analysis,
        health_score: score,
        score_category: ScoreCategory::from_score(score),
        gaps,
    }))
}
