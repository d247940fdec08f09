use sqlx::PgPool;
use uuid::Uuid;

use crate::profile::dto::UpdateProfileRequest;
use crate::profile::model::User;

const USER_COLUMNS: &str = "id, username, email, password_hash, name, age, sex, \
     height_cm, weight_kg, activity_level, created_at, updated_at";

pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<User>> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn update_profile(
    db: &PgPool,
    id: Uuid,
    update: &UpdateProfileRequest,
) -> sqlx::Result<Option<User>> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE users
        SET name = $2, age = $3, sex = $4, height_cm = $5, weight_kg = $6,
            activity_level = $7, updated_at = now()
        WHERE id = $1
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(update.name.as_str())
    .bind(update.age)
    .bind(update.sex)
    .bind(update.height_cm)
    .bind(update.weight_kg)
    .bind(update.activity_level)
    .fetch_optional(db)
    .await
}

/// Delete a user account. Meals and recommendations go with it via the
/// foreign keys.
pub async fn delete_user(db: &PgPool, id: Uuid) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
