use crate::models::{ActivityLevel, Gender, Goal, UserProfile};
use crate::planner::constants::*;

/// Energy figures derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyBreakdown {
    pub bmr: f64,
    pub tdee: f64,
    pub daily_calories: f64,
}

/// Basal metabolic rate (Mifflin–St Jeor).
pub fn basal_metabolic_rate(profile: &UserProfile) -> f64 {
    let offset = match profile.gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    };
    BMR_WEIGHT_COEF * profile.weight + BMR_HEIGHT_COEF * profile.height
        - BMR_AGE_COEF * profile.age as f64
        + offset
}

/// Multiplier turning BMR into total daily expenditure.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Additive calorie offset for a goal.
pub fn goal_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => -500.0,
        Goal::Maintain => 0.0,
        Goal::GainMuscle => 300.0,
    }
}

/// BMR, TDEE and the goal-adjusted daily target in one pass.
pub fn energy_breakdown(profile: &UserProfile) -> EnergyBreakdown {
    let bmr = basal_metabolic_rate(profile);
    let tdee = bmr * activity_multiplier(profile.activity_level);
    EnergyBreakdown {
        bmr,
        tdee,
        daily_calories: tdee + goal_adjustment(profile.goal),
    }
}

/// Daily caloric target. Not clamped; pathological profiles can go negative.
pub fn daily_calorie_target(profile: &UserProfile) -> f64 {
    energy_breakdown(profile).daily_calories
}

/// Daily share of a monthly budget.
#[inline]
pub fn daily_budget(monthly_budget: f64) -> f64 {
    monthly_budget / DAYS_PER_MONTH
}

/// Round to a fixed number of decimal places, ties to even.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
