use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// A stored recommendation. Append-only; never updated after the insert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recommendation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recommendation_text: String,
    pub health_score: i32,
    pub created_at: OffsetDateTime,
}

const COLUMNS: &str = "id, user_id, recommendation_text, health_score, created_at";

pub async fn insert(
    db: &PgPool,
    user_id: Uuid,
    text: &str,
    health_score: i32,
) -> sqlx::Result<Recommendation> {
    // The scorer clamps to 0..=100; the schema CHECK backs this up.
    debug_assert!((0..=100).contains(&health_score));
    sqlx::query_as::<_, Recommendation>(&format!(
        r#"
        INSERT INTO recommendations (user_id, recommendation_text, health_score)
        VALUES ($1, $2, $3)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(text)
    .bind(health_score)
    .fetch_one(db)
    .await
}

pub async fn latest(db: &PgPool, user_id: Uuid) -> sqlx::Result<Option<Recommendation>> {
    sqlx::query_as::<_, Recommendation>(&format!(
        r#"
        SELECT {COLUMNS}
        FROM recommendations
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT 1
        "#
    ))
    .bind(user_id)
    .fetch_optional(db)
    .await
}

pub async fn list_all(db: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<Recommendation>> {
    sqlx::query_as::<_, Recommendation>(&format!(
        r#"
        SELECT {COLUMNS}
        FROM recommendations
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#
    ))
    .bind(user_id)
    .fetch_all(db)
    .await
}
