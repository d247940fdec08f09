use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date, OffsetDateTime};
use uuid::Uuid;

use crate::error::AppError;
use crate::meals::repo::{Meal, MealType};

pub fn parse_date(s: &str) -> Result<Date, AppError> {
    let fmt = format_description!("[year]-[month]-[day]");
    Date::parse(s, &fmt)
        .map_err(|_| AppError::validation(format!("Invalid date: {s} (expected YYYY-MM-DD)")))
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    pub meal_name: String,
    pub meal_type: MealType,
    pub calories: f64,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub portion_size_g: Option<f64>,
    pub notes: Option<String>,
    /// Defaults to today when omitted.
    pub log_date: Option<String>,
}

impl CreateMealRequest {
    /// The validation contract: calories strictly positive, optional macros
    /// and portion size strictly positive when provided (a given-but-zero
    /// value is rejected), bounded text fields.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.meal_name.trim().is_empty() {
            return Err(AppError::validation("Meal name is required"));
        }
        if self.meal_name.chars().count() > 150 {
            return Err(AppError::validation("Meal name must be at most 150 characters"));
        }
        if !(self.calories > 0.0) {
            return Err(AppError::validation("Calories must be greater than 0"));
        }
        for (label, value) in [
            ("Protein", self.protein_g),
            ("Carbs", self.carbs_g),
            ("Fat", self.fat_g),
            ("Portion size", self.portion_size_g),
        ] {
            if let Some(v) = value {
                if !(v > 0.0) {
                    return Err(AppError::validation(format!(
                        "{label} must be greater than 0 when provided"
                    )));
                }
            }
        }
        if let Some(notes) = &self.notes {
            if notes.chars().count() > 500 {
                return Err(AppError::validation("Notes must be at most 500 characters"));
            }
        }
        Ok(())
    }

    pub fn log_date(&self) -> Result<Date, AppError> {
        match &self.log_date {
            Some(s) => parse_date(s),
            None => Ok(today()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Resolve an optional start/end pair; both or neither must be given.
pub fn parse_range(
    start: &Option<String>,
    end: &Option<String>,
) -> Result<Option<(Date, Date)>, AppError> {
    match (start, end) {
        (Some(s), Some(e)) => {
            let (start, end) = (parse_date(s)?, parse_date(e)?);
            if start > end {
                return Err(AppError::validation("start must not be after end"));
            }
            Ok(Some((start, end)))
        }
        (None, None) => Ok(None),
        _ => Err(AppError::validation("start and end must be provided together")),
    }
}

#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub id: Uuid,
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

impl From<Meal> for MealResponse {
    fn from(m: Meal) -> Self {
        Self {
            id: m.id,
            meal_name: m.meal_name,
            meal_type: m.meal_type,
            calories: m.calories,
            protein_g: m.protein_g,
            carbs_g: m.carbs_g,
            fat_g: m.fat_g,
            portion_size_g: m.portion_size_g,
            notes: m.notes,
            log_date: m.log_date,
            created_at: m.created_at,
        }
    }
}
