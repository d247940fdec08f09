use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "meal_type", rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn display_name(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

/// One logged meal. Immutable once written, except for deletion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Meal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub meal_name: String,
    pub meal_type: MealType,
    pub calories: f64,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub portion_size_g: Option<f64>,
    pub notes: Option<String>,
    pub log_date: Date,
    pub created_at: OffsetDateTime,
}

/// Macro sums and meal count for one user-day. Missing macros count as zero.
#[derive(Debug, Clone, Copy, Default, FromRow)]
pub struct DayTotals {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub meal_count: i64,
}

pub struct NewMeal<'a> {
    pub user_id: Uuid,
    pub meal_name: &'a str,
    pub meal_type: MealType,
    pub calories: f64,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub portion_size_g: Option<f64>,
    pub notes: Option<&'a str>,
    pub log_date: Date,
}

const MEAL_COLUMNS: &str = "id, user_id, meal_name, meal_type, calories, protein_g, \
     carbs_g, fat_g, portion_size_g, notes, log_date, created_at";

pub async fn insert(db: &PgPool, new: &NewMeal<'_>) -> sqlx::Result<Meal> {
    sqlx::query_as::<_, Meal>(&format!(
        r#"
        INSERT INTO meal_log (user_id, meal_name, meal_type, calories, protein_g,
                              carbs_g, fat_g, portion_size_g, notes, log_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING {MEAL_COLUMNS}
        "#
    ))
    .bind(new.user_id)
    .bind(new.meal_name)
    .bind(new.meal_type)
    .bind(new.calories)
    .bind(new.protein_g)
    .bind(new.carbs_g)
    .bind(new.fat_g)
    .bind(new.portion_size_g)
    .bind(new.notes)
    .bind(new.log_date)
    .fetch_one(db)
    .await
}

pub async fn list_for_day(db: &PgPool, user_id: Uuid, date: Date) -> sqlx::Result<Vec<Meal>> {
    sqlx::query_as::<_, Meal>(&format!(
        r#"
        SELECT {MEAL_COLUMNS}
        FROM meal_log
        WHERE user_id = $1 AND log_date = $2
        ORDER BY created_at ASC
        "#
    ))
    .bind(user_id)
    .bind(date)
    .fetch_all(db)
    .await
}

pub async fn list_for_range(
    db: &PgPool,
    user_id: Uuid,
    start: Date,
    end: Date,
) -> sqlx::Result<Vec<Meal>> {
    sqlx::query_as::<_, Meal>(&format!(
        r#"
        SELECT {MEAL_COLUMNS}
        FROM meal_log
        WHERE user_id = $1 AND log_date BETWEEN $2 AND $3
        ORDER BY log_date DESC, created_at DESC
        "#
    ))
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
}

pub async fn list_all(db: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<Meal>> {
    sqlx::query_as::<_, Meal>(&format!(
        r#"
        SELECT {MEAL_COLUMNS}
        FROM meal_log
        WHERE user_id = $1
        ORDER BY log_date DESC, created_at DESC
        "#
    ))
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn day_totals(db: &PgPool, user_id: Uuid, date: Date) -> sqlx::Result<DayTotals> {
    sqlx::query_as::<_, DayTotals>(
        r#"
        SELECT COALESCE(SUM(calories), 0)  AS calories,
               COALESCE(SUM(protein_g), 0) AS protein_g,
               COALESCE(SUM(carbs_g), 0)   AS carbs_g,
               COALESCE(SUM(fat_g), 0)     AS fat_g,
               COUNT(*)                    AS meal_count
        FROM meal_log
        WHERE user_id = $1 AND log_date = $2
        "#,
    )
    .bind(user_id)
    .bind(date)
    .fetch_one(db)
    .await
}

pub async fn delete(db: &PgPool, user_id: Uuid, meal_id: Uuid) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM meal_log WHERE id = $1 AND user_id = $2")
        .bind(meal_id)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
