use crate::models::{DietPlan, FoodItem, MacroTotals, UserProfile};
use crate::planner::aggregate::{aggregate_plan, PlanTargets};
use crate::planner::calculations::{daily_budget, daily_calorie_target};
use crate::planner::composer::{compose_meal, SlotRequest};
use crate::planner::constants::MEAL_SLOTS;
use crate::planner::filter::affordable_items;
use crate::planner::picker::ItemPicker;

/// Generate a plan with the local algorithm.
///
/// Calorie target, then per-slot filtering and composition, then aggregation.
/// Never fails: an empty or unaffordable catalog yields a sparse plan.
pub fn generate_local_plan(
    profile: &UserProfile,
    monthly_budget: f64,
    catalog: &[FoodItem],
    picker: &mut dyn ItemPicker,
) -> DietPlan {
    let targets = PlanTargets {
        daily_budget: daily_budget(monthly_budget),
        monthly_budget,
        daily_calories: daily_calorie_target(profile),
    };

    let mut totals = MacroTotals::default();
    let mut meals = Vec::with_capacity(MEAL_SLOTS.len());

    for slot in MEAL_SLOTS.iter() {
        let candidates = affordable_items(catalog, targets.daily_budget, slot.ratio);
        let request = SlotRequest {
            name: slot.name,
            target_calories: targets.daily_calories * slot.ratio,
            daily_budget: targets.daily_budget,
            ratio: slot.ratio,
        };

        if let Some(meal) = compose_meal(&candidates, request, picker, &mut totals) {
            meals.push(meal);
        }
    }

    let plan = aggregate_plan(meals, totals, targets);
    tracing::info!(
        "local plan: {} meals, {:.2} of {:.2} daily budget, {:.0} kcal",
        plan.meals.len(),
        plan.total_daily_cost,
        plan.daily_budget,
        plan.daily_calories
    );
    plan
}
