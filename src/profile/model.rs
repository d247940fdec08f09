use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "sex", rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "activity_level", rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied on top of BMR.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

impl Default for ActivityLevel {
    // A missing level falls back to the sedentary multiplier.
    fn default() -> Self {
        ActivityLevel::Sedentary
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn advisory(self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Consider consulting a nutritionist to ensure adequate calorie intake"
            }
            BmiCategory::Normal => {
                "Maintain your current weight through balanced diet and regular exercise"
            }
            BmiCategory::Overweight => "Aim for gradual weight loss through diet and exercise",
            BmiCategory::Obese => {
                "Consult with a healthcare professional for a personalized weight management plan"
            }
        }
    }
}

/// User record: credentials plus the biometric inputs the nutrition
/// formulas work from.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub age: i32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl User {
    /// Body mass index, or `None` when height or weight make it undefined.
    pub fn bmi(&self) -> Option<f64> {
        if self.height_cm <= 0.0 || self.weight_kg <= 0.0 {
            return None;
        }
        let height_m = self.height_cm / 100.0;
        Some(self.weight_kg / (height_m * height_m))
    }

    pub fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi().map(BmiCategory::from_bmi)
    }

    /// Basal metabolic rate, Mifflin-St Jeor style coefficients split by sex.
    pub fn bmr(&self) -> f64 {
        match self.sex {
            Sex::Male => {
                88.362 + (13.397 * self.weight_kg) + (4.799 * self.height_cm)
                    - (5.677 * self.age as f64)
            }
            Sex::Female | Sex::Other => {
                447.593 + (9.247 * self.weight_kg) + (3.098 * self.height_cm)
                    - (4.330 * self.age as f64)
            }
        }
    }

    /// BMR scaled by the activity multiplier.
    pub fn daily_calorie_needs(&self) -> f64 {
        self.bmr() * self.activity_level.multiplier()
    }
}
