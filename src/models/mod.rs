pub mod food;
pub mod plan;
pub mod profile;

pub use food::FoodItem;
pub use plan::{DietPlan, FoodPortion, GenerationSource, MacroTotals, Meal};
pub use profile::{ActivityLevel, Gender, Goal, UserProfile};
