use axum::{
    extract::{FromRef, State},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, RefreshRequest, RegisterRequest},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo,
    },
    error::AppError,
    profile::model::User,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}

fn public_user(user: &User) -> PublicUser {
    PublicUser {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        name: user.name.clone(),
        created_at: user.created_at,
    }
}

fn token_pair(keys: &JwtKeys, user: &User) -> Result<(String, String), AppError> {
    let access = keys.sign_access(user.id)?;
    let refresh = keys.sign_refresh(user.id)?;
    Ok((access, refresh))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.username = payload.username.trim().to_string();
    payload.email = payload.email.trim().to_lowercase();
    payload.validate()?;

    if repo::username_exists(&state.db, &payload.username).await? {
        warn!(username = %payload.username, "username already taken");
        return Err(AppError::Duplicate("Username already taken".into()));
    }
    if repo::email_exists(&state.db, &payload.email).await? {
        warn!(email = %payload.email, "email already registered");
        return Err(AppError::Duplicate("Email already registered".into()));
    }

    let hash = hash_password(&payload.password)?;
    let user = repo::insert_user(
        &state.db,
        &repo::NewUser {
            username: &payload.username,
            email: &payload.email,
            password_hash: &hash,
            name: &payload.name,
            age: payload.age,
            sex: payload.sex,
            height_cm: payload.height_cm,
            weight_kg: payload.weight_kg,
            activity_level: payload.activity_level,
        },
    )
    .await?;

    let keys = JwtKeys::from_ref(&state);
    let (access_token, refresh_token) = token_pair(&keys, &user)?;

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user: public_user(&user),
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.username = payload.username.trim().to_string();

    // Unknown username and wrong password produce the same answer.
    let user = repo::find_by_username(&state.db, &payload.username)
        .await?
        .ok_or_else(|| {
            warn!(username = %payload.username, "login unknown username");
            AppError::Unauthorized("Invalid username or password".into())
        })?;

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(AppError::Unauthorized("Invalid username or password".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let (access_token, refresh_token) = token_pair(&keys, &user)?;

    info!(user_id = %user.id, username = %user.username, "user logged in");
    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user: public_user(&user),
    }))
}

#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys
        .verify_refresh(&payload.refresh_token)
        .map_err(|e| AppError::Unauthorized(e.to_string()))?;

    let user = crate::profile::repo::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".into()))?;

    let (access_token, refresh_token) = token_pair(&keys, &user)?;
    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user: public_user(&user),
    }))
}
