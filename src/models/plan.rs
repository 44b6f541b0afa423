use serde::{Deserialize, Serialize};

use crate::planner::constants::DAYS_PER_MONTH;

/// A single food placed into a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodPortion {
    pub name: String,
    pub portion: String,
}

/// One meal slot of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub foods: Vec<FoodPortion>,
    /// Target calories for the slot, rounded to the nearest unit.
    pub calories: f64,
    /// Dampened cost of the selected portions, rounded to cents.
    pub cost: f64,
}

/// Which path produced a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationSource {
    #[serde(rename = "smart_algorithm", alias = "local_algorithm")]
    LocalAlgorithm,
    #[serde(rename = "external_model")]
    ExternalModel,
}

impl GenerationSource {
    /// Label matching the serialized `generated_by` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationSource::LocalAlgorithm => "smart_algorithm",
            GenerationSource::ExternalModel => "external_model",
        }
    }
}

/// Running macro sums accumulated while meals are composed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroTotals {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// A complete daily plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    pub daily_budget: f64,
    pub monthly_budget: f64,
    pub daily_calories: f64,
    pub total_daily_cost: f64,
    pub total_proteins: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub meals: Vec<Meal>,
    #[serde(rename = "generated_by")]
    pub generation_source: GenerationSource,
}

impl DietPlan {
    /// Whether the plan fits within its daily budget.
    pub fn within_budget(&self) -> bool {
        self.total_daily_cost <= self.daily_budget
    }

    /// Projected 30-day spend for this plan.
    pub fn monthly_cost(&self) -> f64 {
        self.total_daily_cost * DAYS_PER_MONTH
    }
}
