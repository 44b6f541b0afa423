use crate::models::{FoodItem, UserProfile};
use crate::planner::constants::PROMPT_SAMPLE_SIZE;

/// Natural-language request sent to the remote generator.
///
/// Quotes at most `PROMPT_SAMPLE_SIZE` catalog items, in catalog order.
pub fn build_prompt(profile: &UserProfile, monthly_budget: f64, catalog: &[FoodItem]) -> String {
    let sample = catalog
        .iter()
        .take(PROMPT_SAMPLE_SIZE)
        .map(|f| format!("{} ({:.2})", f.name, f.unit_price))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "As a nutrition assistant, create an affordable daily meal plan for:\n\
         - Age: {} years, Gender: {}\n\
         - Weight: {}kg, Height: {}cm\n\
         - Goal: {}, Activity: {}\n\
         - Monthly budget: {:.2}\n\
         - Available foods: {}\n\
         \n\
         Suggest breakfast, lunch, dinner and a snack that fit the budget.",
        profile.age,
        profile.gender.as_str(),
        profile.weight,
        profile.height,
        profile.goal.as_str(),
        profile.activity_level.as_str(),
        monthly_budget,
        sample
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Gender, Goal};

    #[test]
    fn test_prompt_caps_catalog_sample() {
        let profile = UserProfile {
            age: 25,
            gender: Gender::Female,
            weight: 60.0,
            height: 165.0,
            activity_level: ActivityLevel::Light,
            goal: Goal::WeightLoss,
        };
        let catalog: Vec<FoodItem> = (0..8)
            .map(|i| FoodItem::new(&format!("Food{}", i), i as f64, "100g", 10))
            .collect();

        let prompt = build_prompt(&profile, 450.0, &catalog);

        assert!(prompt.contains("Age: 25 years, Gender: female"));
        assert!(prompt.contains("Goal: weight_loss, Activity: light"));
        assert!(prompt.contains("Monthly budget: 450.00"));
        assert!(prompt.contains("Food4 (4.00)"));
        assert!(!prompt.contains("Food5"));
    }
}
