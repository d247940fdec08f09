pub mod dto;
pub mod generator;
pub mod handlers;
pub mod repo;

use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    handlers::recommendation_routes()
}
