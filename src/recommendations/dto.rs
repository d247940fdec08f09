use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::recommendations::repo::Recommendation;

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub id: Uuid,
    pub recommendation_text: String,
    pub health_score: i32,
    pub created_at: OffsetDateTime,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(r: Recommendation) -> Self {
        Self {
            id: r.id,
            recommendation_text: r.recommendation_text,
            health_score: r.health_score,
            created_at: r.created_at,
        }
    }
}
