#[macro_use]
extern crate assert_float_eq;

use budget_diet_rs::models::{ActivityLevel, Gender, Goal, UserProfile};
use budget_diet_rs::planner::{
    activity_multiplier, basal_metabolic_rate, daily_budget, daily_calorie_target,
    energy_breakdown, MEAL_SLOTS,
};

fn make_profile(
    age: u32,
    gender: Gender,
    height: f64,
    weight: f64,
    activity: ActivityLevel,
    goal: Goal,
) -> UserProfile {
    UserProfile {
        age,
        gender,
        weight,
        height,
        activity_level: activity,
        goal,
    }
}

#[test]
fn test_male_moderate_maintain() {
    let profile = make_profile(30, Gender::Male, 180.0, 80.0, ActivityLevel::Moderate, Goal::Maintain);

    // 10*80 + 6.25*180 - 5*30 + 5
    assert_eq!(basal_metabolic_rate(&profile), 1780.0);
    assert_float_absolute_eq!(daily_calorie_target(&profile), 1780.0 * 1.55, 1e-9);
}

#[test]
fn test_female_sedentary_weight_loss() {
    let profile = make_profile(
        25,
        Gender::Female,
        165.0,
        60.0,
        ActivityLevel::Sedentary,
        Goal::WeightLoss,
    );

    // 10*60 + 6.25*165 - 5*25 - 161
    assert_eq!(basal_metabolic_rate(&profile), 1345.25);
    let energy = energy_breakdown(&profile);
    assert_float_absolute_eq!(energy.tdee, 1614.3, 1e-9);
    assert_float_absolute_eq!(energy.daily_calories, 1114.3, 1e-9);
}

#[test]
fn test_activity_multipliers_increase() {
    let levels = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];
    let multipliers: Vec<f64> = levels.iter().map(|l| activity_multiplier(*l)).collect();
    assert_eq!(multipliers, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
}

#[test]
fn test_unknown_labels_fall_back_to_defaults() {
    let known = make_profile(
        40,
        Gender::Female,
        160.0,
        55.0,
        ActivityLevel::Sedentary,
        Goal::Maintain,
    );
    let parsed = make_profile(
        40,
        Gender::from_label("unspecified"),
        160.0,
        55.0,
        ActivityLevel::from_label("athlete"),
        Goal::from_label("recomp"),
    );
    assert_eq!(daily_calorie_target(&parsed), daily_calorie_target(&known));
}

#[test]
fn test_daily_budget_exact_division() {
    for monthly in [0.01, 1.0, 99.99, 300.0, 450.0, 1234.56, 1e6] {
        assert_eq!(daily_budget(monthly), monthly / 30.0);
    }
}

#[test]
fn test_slot_ratios_sum_to_one() {
    let sum: f64 = MEAL_SLOTS.iter().map(|s| s.ratio).sum();
    assert_eq!(sum, 1.0);
}
