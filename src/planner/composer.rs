use crate::models::{FoodItem, FoodPortion, MacroTotals, Meal};
use crate::planner::calculations::round_to;
use crate::planner::constants::{MAX_ITEMS_PER_MEAL, PORTION_COST_FACTOR};
use crate::planner::picker::ItemPicker;

/// Inputs for composing one meal slot.
#[derive(Debug, Clone, Copy)]
pub struct SlotRequest<'a> {
    pub name: &'a str,
    pub target_calories: f64,
    pub daily_budget: f64,
    pub ratio: f64,
}

/// Candidates eligible for a slot: macro-bearing and within the slot's budget share.
pub fn eligible_items<'a>(
    candidates: &[&'a FoodItem],
    daily_budget: f64,
    slot_ratio: f64,
) -> Vec<&'a FoodItem> {
    let slot_budget = daily_budget * slot_ratio;
    candidates
        .iter()
        .copied()
        .filter(|f| f.has_macros() && f.unit_price <= slot_budget)
        .collect()
}

/// Compose one meal from the filtered candidates.
///
/// Returns `None` when no candidate is eligible, in which case the slot is
/// left out of the plan. Macros of every selected item are added to `totals`
/// in full; only the cost is dampened by the portion factor.
pub fn compose_meal(
    candidates: &[&FoodItem],
    slot: SlotRequest<'_>,
    picker: &mut dyn ItemPicker,
    totals: &mut MacroTotals,
) -> Option<Meal> {
    let eligible = eligible_items(candidates, slot.daily_budget, slot.ratio);
    if eligible.is_empty() {
        tracing::debug!("{}: no eligible items, slot omitted", slot.name);
        return None;
    }

    let selected: Vec<&FoodItem> = picker
        .pick(eligible.len(), MAX_ITEMS_PER_MEAL)
        .into_iter()
        .filter_map(|i| eligible.get(i).copied())
        .collect();

    let raw_cost: f64 = selected.iter().map(|f| f.unit_price).sum();

    for food in &selected {
        totals.protein += food.protein_or_zero();
        totals.carbs += food.carbs_or_zero();
        totals.fat += food.fat_or_zero();
    }

    let meal = Meal {
        name: slot.name.to_string(),
        foods: selected
            .iter()
            .map(|f| FoodPortion {
                name: f.name.clone(),
                portion: f.portion_size.clone(),
            })
            .collect(),
        calories: round_to(slot.target_calories, 0),
        cost: round_to(raw_cost * PORTION_COST_FACTOR, 2),
    };

    tracing::debug!(
        "{}: {} of {} eligible, cost {:.2}",
        meal.name,
        meal.foods.len(),
        eligible.len(),
        meal.cost
    );

    Some(meal)
}
