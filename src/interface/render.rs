use crate::catalog::FoodCatalog;
use crate::generation::GenerationOutcome;
use crate::models::{DietPlan, FoodItem, UserProfile};
use crate::planner::{affordable_items, EnergyBreakdown, MEAL_SLOTS};

/// Display a plan as a formatted table.
pub fn display_plan(plan: &DietPlan) {
    println!();
    println!("=== Diet Plan ({}) ===", plan.generation_source.as_str());
    println!();

    if plan.meals.is_empty() {
        println!("No meals could be composed from the catalog.");
    }

    for meal in &plan.meals {
        println!(
            "{:<10} {:>5.0} kcal  {:>7.2}",
            meal.name, meal.calories, meal.cost
        );
        for food in &meal.foods {
            println!("    - {} ({})", food.name, food.portion);
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Daily calories:   {:.0}", plan.daily_calories);
    println!(
        "Daily cost:       {:.2} of {:.2}{}",
        plan.total_daily_cost,
        plan.daily_budget,
        if plan.within_budget() { "" } else { "  [over budget]" }
    );
    println!(
        "Monthly cost:     {:.2} of {:.2}",
        plan.monthly_cost(),
        plan.monthly_budget
    );
    println!(
        "Macros:           P {:.1}g  C {:.1}g  F {:.1}g",
        plan.total_proteins, plan.total_carbs, plan.total_fat
    );
    println!();
}

/// Display a generation outcome, noting when the local fallback was used.
pub fn display_outcome(outcome: &GenerationOutcome) {
    if let Some(reason) = outcome.fallback_reason() {
        println!("Remote generation unavailable ({}); using local algorithm.", reason);
    }
    display_plan(outcome.plan());
}

/// Display the energy figures for a profile.
pub fn display_energy(profile: &UserProfile, energy: &EnergyBreakdown) {
    println!();
    println!("Profile: {}", profile);
    println!("BMR:              {:.1} kcal", energy.bmr);
    println!("TDEE:             {:.1} kcal", energy.tdee);
    println!("Daily target:     {:.1} kcal", energy.daily_calories);
    println!();
}

/// Display the items affordable for each meal slot under a daily budget.
pub fn display_affordable(catalog: &FoodCatalog, daily_budget: f64) {
    if catalog.is_empty() {
        println!("Catalog: (none)");
        return;
    }

    println!();
    println!("=== Affordable items ({:.2}/day) ===", daily_budget);

    for slot in MEAL_SLOTS.iter() {
        let items = affordable_items(catalog.items(), daily_budget, slot.ratio);
        println!();
        println!("{} ({} items)", slot.name, items.len());
        for food in items {
            println!("    {}", food.debug_string());
        }
    }

    println!();
}

/// Display catalog search results.
pub fn display_search(query: &str, results: &[&FoodItem]) {
    println!();
    if query.trim().is_empty() {
        println!("=== Catalog ({} items) ===", results.len());
    } else {
        println!("=== Matches for '{}' ({}) ===", query.trim(), results.len());
    }

    if results.is_empty() {
        println!("    (none)");
    }
    for food in results {
        println!("    {}", food.debug_string());
    }
    println!();
}
