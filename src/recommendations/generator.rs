use crate::analysis::score::ScoreCategory;

const PROTEIN_INCREASE: &str = "\
• Add lean protein sources: chicken breast, fish, eggs, Greek yogurt, legumes, or tofu
• Aim for protein in every meal to meet your daily requirements";

const PROTEIN_REDUCE: &str = "\
• Balance your protein intake with more vegetables and whole grains
• Focus on moderate portions of lean protein sources";

const CARBS_REDUCE: &str = "\
• Reduce refined carbohydrates (white bread, pastries, sugary drinks)
• Replace with vegetables, lean proteins, and healthy fats
• Choose smaller portions of whole grains";

const CARBS_INCREASE: &str = "\
• Include complex carbohydrates: oats, quinoa, brown rice, sweet potatoes
• Add more fruits and vegetables to your meals
• These provide energy and essential nutrients";

const HEALTHY_FATS: &str = "\
• Include healthy fat sources: avocados, nuts, seeds, olive oil, fatty fish
• Add a handful of almonds or walnuts as a snack
• Use olive oil for cooking and salad dressings
• Aim for omega-3 rich foods like salmon or chia seeds";

const MEAL_FREQUENCY: &str =
    "• Try to spread your meals throughout the day to maintain energy levels.";

const CALORIES_INCREASE: &str = "\
• Add nutrient-dense snacks between meals
• Include healthy fats and complex carbohydrates
• Consider adding smoothies or protein shakes";

const CALORIES_REDUCE: &str = "\
• Practice portion control using smaller plates
• Focus on high-volume, low-calorie foods like vegetables
• Reduce high-calorie beverages and processed snacks
• Eat mindfully and avoid distractions during meals";

const GENERAL_TIPS: &str = "\
• Stay hydrated - aim for 8 glasses of water daily
• Include a variety of colorful vegetables in your meals
• Choose whole grains over refined carbohydrates
• Plan your meals ahead to maintain consistency";

/// Suggestion block for one gap, keyed by substring. The well-balanced
/// message matches no key and gets no suggestion.
fn suggestion_for(gap: &str) -> Option<&'static str> {
    let lower = gap.to_lowercase();
    if gap.contains("protein") {
        Some(if lower.contains("increase") {
            PROTEIN_INCREASE
        } else {
            PROTEIN_REDUCE
        })
    } else if gap.contains("carb") {
        Some(if lower.contains("reduce") {
            CARBS_REDUCE
        } else {
            CARBS_INCREASE
        })
    } else if gap.contains("fat") {
        Some(HEALTHY_FATS)
    } else if gap.contains("meal frequency") {
        Some(MEAL_FREQUENCY)
    } else if gap.contains("calorie") {
        Some(if lower.contains("increase") {
            CALORIES_INCREASE
        } else {
            CALORIES_REDUCE
        })
    } else {
        None
    }
}

/// Render the full recommendation report. Pure: identical inputs produce
/// identical text.
pub fn render_report(health_score: i32, gaps: &[String]) -> String {
    let category = ScoreCategory::from_score(health_score);

    let mut text = String::new();
    text.push_str("=== Dietary Recommendation Report ===\n\n");
    text.push_str(&format!(
        "Health Score: {}/100 ({})\n\n",
        health_score,
        category.display_name()
    ));

    text.push_str("Nutritional Analysis:\n");
    for gap in gaps {
        text.push_str(&format!("• {gap}\n"));
    }

    text.push_str("\nPersonalized Suggestions:\n");
    for gap in gaps {
        if let Some(suggestion) = suggestion_for(gap) {
            text.push_str(suggestion);
            text.push('\n');
        }
    }

    text.push_str("\nGeneral Tips:\n");
    text.push_str(GENERAL_TIPS);
    text.push('\n');

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::gaps::WELL_BALANCED;

    #[test]
    fn report_has_all_sections() {
        let gaps = vec!["Increase protein intake".to_string()];
        let report = render_report(85, &gaps);

        assert!(report.starts_with("=== Dietary Recommendation Report ===\n"));
        assert!(report.contains("Health Score: 85/100 (Good)"));
        assert!(report.contains("Nutritional Analysis:\n• Increase protein intake\n"));
        assert!(report.contains("Personalized Suggestions:\n"));
        assert!(report.contains("General Tips:\n"));
        assert!(report.contains("Stay hydrated"));
    }

    #[test]
    fn suggestions_dispatch_on_gap_text() {
        assert_eq!(
            suggestion_for("Increase protein intake"),
            Some(PROTEIN_INCREASE)
        );
        assert_eq!(
            suggestion_for("Reduce protein intake slightly"),
            Some(PROTEIN_REDUCE)
        );
        assert_eq!(
            suggestion_for("Reduce carbohydrate intake"),
            Some(CARBS_REDUCE)
        );
        assert_eq!(
            suggestion_for("Increase complex carbohydrate intake"),
            Some(CARBS_INCREASE)
        );
        assert_eq!(suggestion_for("Add more healthy fats"), Some(HEALTHY_FATS));
        assert_eq!(suggestion_for("Reduce fat intake"), Some(HEALTHY_FATS));
        assert_eq!(
            suggestion_for("Increase meal frequency to at least 3 meals per day"),
            Some(MEAL_FREQUENCY)
        );
        assert_eq!(
            suggestion_for("Increase overall calorie intake"),
            Some(CALORIES_INCREASE)
        );
        assert_eq!(
            suggestion_for("Reduce overall calorie intake"),
            Some(CALORIES_REDUCE)
        );
    }

    #[test]
    fn well_balanced_gap_gets_no_suggestion() {
        assert_eq!(suggestion_for(WELL_BALANCED), None);

        let report = render_report(100, &[WELL_BALANCED.to_string()]);
        assert!(report.contains("Health Score: 100/100 (Excellent)"));
        assert!(report.contains(WELL_BALANCED));
        // Suggestions section is present but empty.
        assert!(report.contains("Personalized Suggestions:\n\nGeneral Tips:"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let gaps = vec![
            "Increase protein intake".to_string(),
            "Add more healthy fats".to_string(),
        ];
        assert_eq!(render_report(75, &gaps), render_report(75, &gaps));
    }
}
