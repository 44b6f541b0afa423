use crate::models::{DietPlan, GenerationSource, MacroTotals, Meal};
use crate::planner::calculations::round_to;

/// Budget and energy figures a plan is built around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanTargets {
    pub daily_budget: f64,
    pub monthly_budget: f64,
    pub daily_calories: f64,
}

/// Assemble the final plan from composed meals and the macros gathered while composing them.
pub fn aggregate_plan(meals: Vec<Meal>, totals: MacroTotals, targets: PlanTargets) -> DietPlan {
    let total_cost: f64 = meals.iter().map(|m| m.cost).sum();

    DietPlan {
        daily_budget: targets.daily_budget,
        monthly_budget: targets.monthly_budget,
        daily_calories: targets.daily_calories,
        total_daily_cost: round_to(total_cost, 2),
        total_proteins: round_to(totals.protein, 1),
        total_carbs: round_to(totals.carbs, 1),
        total_fat: round_to(totals.fat, 1),
        meals,
        generation_source: GenerationSource::LocalAlgorithm,
    }
}
