use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::dto::validate_biometrics;
use crate::error::AppError;
use crate::profile::model::{ActivityLevel, Sex, User};

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub name: String,
    pub age: i32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<User> for ProfileResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            name: u.name,
            age: u.age,
            sex: u.sex,
            height_cm: u.height_cm,
            weight_kg: u.weight_kg,
            activity_level: u.activity_level,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Explicit profile update; credentials are not touched here.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub age: i32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        validate_biometrics(self.age, self.height_cm, self.weight_kg)
    }
}

/// Derived body metrics. BMI and its category are absent when undefined.
#[derive(Debug, Serialize)]
pub struct BodyMetrics {
    pub bmi: Option<f64>,
    pub bmi_category: Option<String>,
    pub bmi_advisory: Option<String>,
    pub bmr: f64,
    pub daily_calorie_needs: f64,
}

impl From<&User> for BodyMetrics {
    fn from(user: &User) -> Self {
        let category = user.bmi_category();
        Self {
            bmi: user.bmi(),
            bmi_category: category.map(|c| c.display_name().to_string()),
            bmi_advisory: category.map(|c| c.advisory().to_string()),
            bmr: user.bmr(),
            daily_calorie_needs: user.daily_calorie_needs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::model::tests::test_user;

    #[test]
    fn metrics_for_valid_profile() {
        let user = test_user(Sex::Male, 30, 180.0, 80.0, ActivityLevel::Sedentary);
        let metrics = BodyMetrics::from(&user);
        assert!(metrics.bmi.is_some());
        assert_eq!(metrics.bmi_category.as_deref(), Some("Normal Weight"));
        assert!(metrics.bmi_advisory.is_some());
        assert!(metrics.bmr > 0.0);
    }

    #[test]
    fn metrics_omit_bmi_when_undefined() {
        let user = test_user(Sex::Other, 30, 0.0, 80.0, ActivityLevel::Sedentary);
        let metrics = BodyMetrics::from(&user);
        assert!(metrics.bmi.is_none());
        assert!(metrics.bmi_category.is_none());
        assert!(metrics.bmi_advisory.is_none());
    }

    #[test]
    fn update_request_validation() {
        let req = UpdateProfileRequest {
            name: "Alice".into(),
            age: 31,
            sex: Sex::Female,
            height_cm: 165.0,
            weight_kg: 61.0,
            activity_level: ActivityLevel::Active,
        };
        assert!(req.validate().is_ok());

        let bad = UpdateProfileRequest { name: "  ".into(), ..req };
        assert!(bad.validate().is_err());
    }
}
