use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::AppError;
use crate::profile::model::{ActivityLevel, Sex};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Request body for user registration. Carries the credentials plus the
/// biometric profile the nutrition formulas work from.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub age: i32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.username.is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        if !is_valid_email(&self.email) {
            return Err(AppError::validation("Invalid email"));
        }
        if self.password.len() < 8 {
            return Err(AppError::validation("Password too short"));
        }
        if self.password != self.confirm_password {
            return Err(AppError::validation("Passwords do not match"));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        validate_biometrics(self.age, self.height_cm, self.weight_kg)
    }
}

pub(crate) fn validate_biometrics(age: i32, height_cm: f64, weight_kg: f64) -> Result<(), AppError> {
    if age <= 0 {
        return Err(AppError::validation("Age must be greater than 0"));
    }
    if !(height_cm > 0.0) {
        return Err(AppError::validation("Height must be greater than 0"));
    }
    if !(weight_kg > 0.0) {
        return Err(AppError::validation("Weight must be greater than 0"));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Response returned after login, register or refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: PublicUser,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub name: String,
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "hunter2hunter2".into(),
            confirm_password: "hunter2hunter2".into(),
            name: "Alice".into(),
            age: 30,
            sex: Sex::Female,
            height_cm: 165.0,
            weight_kg: 60.0,
            activity_level: ActivityLevel::Moderate,
        }
    }

    #[test]
    fn accepts_valid_registration() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@example.com "));
        assert!(!is_valid_email("user@nodot"));
    }

    #[test]
    fn rejects_password_mismatch() {
        let mut req = valid_request();
        req.confirm_password = "different-password".into();
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("do not match"));
    }

    #[test]
    fn rejects_short_password() {
        let mut req = valid_request();
        req.password = "short".into();
        req.confirm_password = "short".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_nonpositive_biometrics() {
        assert!(validate_biometrics(0, 170.0, 70.0).is_err());
        assert!(validate_biometrics(30, 0.0, 70.0).is_err());
        assert!(validate_biometrics(30, 170.0, -1.0).is_err());
        assert!(validate_biometrics(30, 170.0, 70.0).is_ok());
    }
}
