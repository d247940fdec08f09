use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    error::AppError,
    meals::{
        dto::{parse_date, parse_range, today, CreateMealRequest, ListQuery, MealResponse, RangeQuery},
        history::{render_csv, summarize, HistorySummary},
        repo,
    },
    state::AppState,
};

pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals).post(create_meal))
        .route("/meals/summary", get(meal_summary))
        .route("/meals/export", get(export_meals))
        .route("/meals/:id", axum::routing::delete(delete_meal))
}

#[instrument(skip(state, payload))]
pub async fn create_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateMealRequest>,
) -> Result<(StatusCode, Json<MealResponse>), AppError> {
    payload.validate()?;
    let log_date = payload.log_date()?;

    let meal = repo::insert(
        &state.db,
        &repo::NewMeal {
            user_id,
            meal_name: payload.meal_name.trim(),
            meal_type: payload.meal_type,
            calories: payload.calories,
            protein_g: payload.protein_g,
            carbs_g: payload.carbs_g,
            fat_g: payload.fat_g,
            portion_size_g: payload.portion_size_g,
            notes: payload.notes.as_deref(),
            log_date,
        },
    )
    .await?;

    info!(user_id = %user_id, meal_id = %meal.id, %log_date, "meal logged");
    Ok((StatusCode::CREATED, Json(meal.into())))
}

/// Today's meals by default; `?date=` for another day, `?start=&end=` for a
/// range.
#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<MealResponse>>, AppError> {
    if query.date.is_some() && (query.start.is_some() || query.end.is_some()) {
        return Err(AppError::validation("date cannot be combined with start/end"));
    }

    let meals = if let Some((start, end)) = parse_range(&query.start, &query.end)? {
        repo::list_for_range(&state.db, user_id, start, end).await?
    } else {
        let date = match &query.date {
            Some(s) => parse_date(s)?,
            None => today(),
        };
        repo::list_for_day(&state.db, user_id, date).await?
    };

    Ok(Json(meals.into_iter().map(MealResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(meal_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !repo::delete(&state.db, user_id, meal_id).await? {
        return Err(AppError::not_found(format!("Meal not found: {meal_id}")));
    }
    info!(user_id = %user_id, meal_id = %meal_id, "meal deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Totals over the full history, or over `?start=&end=`.
#[instrument(skip(state))]
pub async fn meal_summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<RangeQuery>,
) -> Result<Json<HistorySummary>, AppError> {
    let meals = match parse_range(&query.start, &query.end)? {
        Some((start, end)) => repo::list_for_range(&state.db, user_id, start, end).await?,
        None => repo::list_all(&state.db, user_id).await?,
    };
    Ok(Json(summarize(&meals)))
}

#[instrument(skip(state))]
pub async fn export_meals(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<RangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let meals = match parse_range(&query.start, &query.end)? {
        Some((start, end)) => repo::list_for_range(&state.db, user_id, start, end).await?,
        None => repo::list_all(&state.db, user_id).await?,
    };

    info!(user_id = %user_id, rows = meals.len(), "meal history exported");
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"meal_history.csv\"",
            ),
        ],
        render_csv(&meals),
    ))
}
