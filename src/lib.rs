pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;

pub use catalog::FoodCatalog;
pub use error::{PlanError, Result};
pub use generation::{DietPlanService, GenerationOutcome};
pub use models::{DietPlan, FoodItem, Meal, UserProfile};
