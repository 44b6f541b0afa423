pub mod prompts;
pub mod render;

pub use prompts::{check_monthly_budget, complete_profile, prompt_monthly_budget, PartialProfile};
pub use render::{
    display_affordable, display_energy, display_outcome, display_plan, display_search,
};
