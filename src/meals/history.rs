use std::collections::HashMap;

use serde::Serialize;

use crate::meals::repo::Meal;

pub const CSV_HEADER: &str = "Date,MealType,Food,Calories,Protein,Carbs,Fat";

/// Render a meal list as CSV, one row per meal, numeric fields to two
/// decimal places. Absent macros export as 0.00.
pub fn render_csv(meals: &[Meal]) -> String {
    let mut out = String::with_capacity(64 * (meals.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for meal in meals {
        out.push_str(&format!(
            "{},{},{},{:.2},{:.2},{:.2},{:.2}\n",
            meal.log_date,
            meal.meal_type.display_name(),
            meal.meal_name,
            meal.calories,
            meal.protein_g.unwrap_or(0.0),
            meal.carbs_g.unwrap_or(0.0),
            meal.fat_g.unwrap_or(0.0),
        ));
    }
    out
}

/// Aggregate view over a stretch of meal history.
#[derive(Debug, Serialize)]
pub struct HistorySummary {
    pub total_meals: usize,
    pub avg_calories: f64,
    pub most_common_meal: Option<String>,
}

pub fn summarize(meals: &[Meal]) -> HistorySummary {
    let total_meals = meals.len();
    let avg_calories = if total_meals == 0 {
        0.0
    } else {
        meals.iter().map(|m| m.calories).sum::<f64>() / total_meals as f64
    };

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for meal in meals {
        *counts.entry(meal.meal_name.as_str()).or_default() += 1;
    }
    let most_common_meal = counts
        .into_iter()
        // Ties resolve to the alphabetically first name.
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(a.0)))
        .map(|(name, _)| name.to_string());

    HistorySummary {
        total_meals,
        avg_calories,
        most_common_meal,
    }
}
