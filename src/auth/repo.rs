use sqlx::PgPool;

use crate::profile::model::{ActivityLevel, Sex, User};

const USER_COLUMNS: &str = "id, username, email, password_hash, name, age, sex, \
     height_cm, weight_kg, activity_level, created_at, updated_at";

pub async fn find_by_username(db: &PgPool, username: &str) -> sqlx::Result<Option<User>> {
    sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
    ))
    .bind(username)
    .fetch_optional(db)
    .await
}

pub async fn username_exists(db: &PgPool, username: &str) -> sqlx::Result<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE username = $1)")
        .bind(username)
        .fetch_one(db)
        .await
}

pub async fn email_exists(db: &PgPool, email: &str) -> sqlx::Result<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(db)
        .await
}

pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub name: &'a str,
    pub age: i32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
}

pub async fn insert_user(db: &PgPool, new: &NewUser<'_>) -> sqlx::Result<User> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (username, email, password_hash, name, age, sex,
                           height_cm, weight_kg, activity_level)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(new.username)
    .bind(new.email)
    .bind(new.password_hash)
    .bind(new.name)
    .bind(new.age)
    .bind(new.sex)
    .bind(new.height_cm)
    .bind(new.weight_kg)
    .bind(new.activity_level)
    .fetch_one(db)
    .await
}
