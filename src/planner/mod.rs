pub mod aggregate;
pub mod calculations;
pub mod composer;
pub mod constants;
pub mod filter;
pub mod picker;
pub mod pipeline;

pub use aggregate::{aggregate_plan, PlanTargets};
pub use calculations::{
    activity_multiplier, basal_metabolic_rate, daily_budget, daily_calorie_target,
    energy_breakdown, goal_adjustment, round_to, EnergyBreakdown,
};
pub use composer::{compose_meal, eligible_items, SlotRequest};
pub use constants::*;
pub use filter::{affordability_threshold, affordable_items, cheapest_items};
pub use picker::{FirstPicker, ItemPicker, RandomPicker};
pub use pipeline::generate_local_plan;
