use serde::Serialize;

use crate::analysis::analyzer::{DailyAnalysis, CARBS_BAND, FAT_BAND, PROTEIN_BAND};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreCategory {
    pub fn from_score(score: i32) -> Self {
        if score >= 90 {
            ScoreCategory::Excellent
        } else if score >= 75 {
            ScoreCategory::Good
        } else if score >= 60 {
            ScoreCategory::Fair
        } else {
            ScoreCategory::NeedsImprovement
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ScoreCategory::Excellent => "Excellent",
            ScoreCategory::Good => "Good",
            ScoreCategory::Fair => "Fair",
            ScoreCategory::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Score a day's intake 0-100. Starts at 100 and applies independent
/// penalties, each checked once, then clamps.
pub fn health_score(analysis: &DailyAnalysis) -> i32 {
    let mut score = 100;

    if analysis.total_calories > analysis.recommended_calories + 500.0 {
        score -= 20;
    }
    if analysis.total_calories < analysis.recommended_calories - 300.0 {
        score -= 15;
    }

    let outside = |p: f64, band: (f64, f64)| p < band.0 || p > band.1;
    if outside(analysis.protein_percent, PROTEIN_BAND) {
        score -= 15;
    }
    if outside(analysis.carbs_percent, CARBS_BAND) {
        score -= 10;
    }
    if outside(analysis.fat_percent, FAT_BAND) {
        score -= 10;
    }

    if analysis.meal_count < 3 {
        score -= 10;
    }

    score.clamp(0, 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::{analyze, tests::reference_user};
    use crate::meals::repo::DayTotals;

    fn analysis_with(
        total_calories: f64,
        recommended_calories: f64,
        protein_percent: f64,
        carbs_percent: f64,
        fat_percent: f64,
        meal_count: i64,
    ) -> DailyAnalysis {
        DailyAnalysis {
            total_calories,
            total_protein: 0.0,
            total_carbs: 0.0,
            total_fat: 0.0,
            recommended_calories,
            recommended_protein: 0.0,
            recommended_carbs: 0.0,
            recommended_fat: 0.0,
            calorie_deficit: recommended_calories - total_calories,
            protein_percent,
            carbs_percent,
            fat_percent,
            is_balanced: false,
            meal_count,
        }
    }

    #[test]
    fn perfect_day_scores_100() {
        let analysis = analysis_with(2000.0, 2000.0, 20.0, 50.0, 30.0, 3);
        assert_eq!(health_score(&analysis), 100);
    }

    #[test]
    fn each_penalty_applies_once() {
        let base = analysis_with(2000.0, 2000.0, 20.0, 50.0, 30.0, 3);

        let over = analysis_with(2501.0, 2000.0, 20.0, 50.0, 30.0, 3);
        assert_eq!(health_score(&over), 80);

        let under = analysis_with(1699.0, 2000.0, 20.0, 50.0, 30.0, 3);
        assert_eq!(health_score(&under), 85);

        let low_protein = analysis_with(2000.0, 2000.0, 9.0, 50.0, 30.0, 3);
        assert_eq!(health_score(&low_protein), 85);

        let high_carbs = analysis_with(2000.0, 2000.0, 20.0, 66.0, 30.0, 3);
        assert_eq!(health_score(&high_carbs), 90);

        let low_fat = analysis_with(2000.0, 2000.0, 20.0, 50.0, 19.0, 3);
        assert_eq!(health_score(&low_fat), 90);

        let few_meals = analysis_with(2000.0, 2000.0, 20.0, 50.0, 30.0, 2);
        assert_eq!(health_score(&few_meals), 90);

        assert_eq!(health_score(&base), 100);
    }

    #[test]
    fn boundary_calorie_deviations_are_not_penalized() {
        let at_upper = analysis_with(2500.0, 2000.0, 20.0, 50.0, 30.0, 3);
        assert_eq!(health_score(&at_upper), 100);

        let at_lower = analysis_with(1700.0, 2000.0, 20.0, 50.0, 30.0, 3);
        assert_eq!(health_score(&at_lower), 100);
    }

    #[test]
    fn score_is_clamped_to_zero() {
        // Calories under, every band missed, too few meals: 100 - 60 = 40.
        let worst = analysis_with(0.0, 2000.0, 0.0, 0.0, 0.0, 0);
        let score = health_score(&worst);
        assert_eq!(score, 40);
        assert!((0..=100).contains(&score));
    }

    #[test]
    fn empty_day_scores_through_analyzer() {
        let user = reference_user();
        let analysis = analyze(&user, &DayTotals::default());
        assert_eq!(health_score(&analysis), 40);
    }

    #[test]
    fn category_thresholds() {
        assert_eq!(ScoreCategory::from_score(100), ScoreCategory::Excellent);
        assert_eq!(ScoreCategory::from_score(90), ScoreCategory::Excellent);
        assert_eq!(ScoreCategory::from_score(89), ScoreCategory::Good);
        assert_eq!(ScoreCategory::from_score(75), ScoreCategory::Good);
        assert_eq!(ScoreCategory::from_score(74), ScoreCategory::Fair);
        assert_eq!(ScoreCategory::from_score(60), ScoreCategory::Fair);
        assert_eq!(
            ScoreCategory::from_score(59),
            ScoreCategory::NeedsImprovement
        );
        assert_eq!(ScoreCategory::from_score(0), ScoreCategory::NeedsImprovement);
    }
}
