use serde::Serialize;

use crate::meals::repo::DayTotals;
use crate::profile::model::User;

/// One day's intake measured against the profile's targets. Derived on
/// demand, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct DailyAnalysis {
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub recommended_calories: f64,
    pub recommended_protein: f64,
    pub recommended_carbs: f64,
    pub recommended_fat: f64,
    /// Positive when intake is under target.
    pub calorie_deficit: f64,
    pub protein_percent: f64,
    pub carbs_percent: f64,
    pub fat_percent: f64,
    pub is_balanced: bool,
    pub meal_count: i64,
}

/// Protein band of a balanced diet, in percent of macro calories.
pub const PROTEIN_BAND: (f64, f64) = (10.0, 35.0);
pub const CARBS_BAND: (f64, f64) = (45.0, 65.0);
pub const FAT_BAND: (f64, f64) = (20.0, 35.0);

const PROTEIN_KCAL_PER_G: f64 = 4.0;
const CARBS_KCAL_PER_G: f64 = 4.0;
const FAT_KCAL_PER_G: f64 = 9.0;

/// Compare a day's totals against the profile's needs. Total function:
/// absent data yields zeros, never a failure.
pub fn analyze(user: &User, totals: &DayTotals) -> DailyAnalysis {
    let recommended_calories = user.daily_calorie_needs();
    // 1.6 g protein per kg body weight; carbs at 50% and fat at 30% of the
    // calorie target.
    let recommended_protein = user.weight_kg * 1.6;
    let recommended_carbs = (recommended_calories * 0.5) / CARBS_KCAL_PER_G;
    let recommended_fat = (recommended_calories * 0.3) / FAT_KCAL_PER_G;

    let calorie_deficit = recommended_calories - totals.calories;

    let protein_calories = totals.protein_g * PROTEIN_KCAL_PER_G;
    let carbs_calories = totals.carbs_g * CARBS_KCAL_PER_G;
    let fat_calories = totals.fat_g * FAT_KCAL_PER_G;
    let total_macro_calories = protein_calories + carbs_calories + fat_calories;

    let percent_of = |part: f64| {
        if total_macro_calories > 0.0 {
            part / total_macro_calories * 100.0
        } else {
            0.0
        }
    };
    let protein_percent = percent_of(protein_calories);
    let carbs_percent = percent_of(carbs_calories);
    let fat_percent = percent_of(fat_calories);

    let within = |p: f64, band: (f64, f64)| p >= band.0 && p <= band.1;
    let is_balanced = within(protein_percent, PROTEIN_BAND)
        && within(carbs_percent, CARBS_BAND)
        && within(fat_percent, FAT_BAND);

    DailyAnalysis {
        total_calories: totals.calories,
        total_protein: totals.protein_g,
        total_carbs: totals.carbs_g,
        total_fat: totals.fat_g,
        recommended_calories,
        recommended_protein,
        recommended_carbs,
        recommended_fat,
        calorie_deficit,
        protein_percent,
        carbs_percent,
        fat_percent,
        is_balanced,
        meal_count: totals.meal_count,
    }
}
