pub mod analyzer;
pub mod gaps;
pub mod handlers;
pub mod score;

use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    handlers::analysis_routes()
}
