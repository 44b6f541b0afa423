use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::generation::remote::{DisabledRemote, HttpRemoteGenerator, RemoteGenerator};
use crate::models::{DietPlan, FoodItem, UserProfile};
use crate::planner::{generate_local_plan, ItemPicker};

/// Result of one generation request.
#[derive(Debug)]
pub enum GenerationOutcome {
    /// The remote generator produced a usable plan.
    Generated { plan: DietPlan },
    /// The remote attempt failed; the plan comes from the local algorithm.
    FallbackUsed { plan: DietPlan, reason: PlanError },
}

impl GenerationOutcome {
    pub fn plan(&self) -> &DietPlan {
        match self {
            GenerationOutcome::Generated { plan } => plan,
            GenerationOutcome::FallbackUsed { plan, .. } => plan,
        }
    }

    pub fn into_plan(self) -> DietPlan {
        match self {
            GenerationOutcome::Generated { plan } => plan,
            GenerationOutcome::FallbackUsed { plan, .. } => plan,
        }
    }

    pub fn fallback_reason(&self) -> Option<&PlanError> {
        match self {
            GenerationOutcome::Generated { .. } => None,
            GenerationOutcome::FallbackUsed { reason, .. } => Some(reason),
        }
    }

    pub fn used_fallback(&self) -> bool {
        self.fallback_reason().is_some()
    }
}

/// Entry point for plan generation.
///
/// Each call tries the remote generator once and falls back to the local
/// algorithm on any failure. Holds no state between calls.
pub struct DietPlanService {
    remote: Box<dyn RemoteGenerator>,
}

impl DietPlanService {
    pub fn new(remote: Box<dyn RemoteGenerator>) -> Self {
        Self { remote }
    }

    /// Build from configuration: HTTP generator when enabled, otherwise local only.
    pub fn from_config(config: &PlannerConfig) -> Self {
        if config.remote.enabled {
            Self::new(Box::new(HttpRemoteGenerator::new(&config.remote)))
        } else {
            Self::local_only()
        }
    }

    pub fn local_only() -> Self {
        Self::new(Box::new(DisabledRemote))
    }

    pub fn generate(
        &self,
        profile: &UserProfile,
        monthly_budget: f64,
        catalog: &[FoodItem],
        picker: &mut dyn ItemPicker,
    ) -> GenerationOutcome {
        match self.remote.generate(profile, monthly_budget, catalog) {
            Ok(plan) => {
                tracing::info!("remote generator produced {} meals", plan.meals.len());
                GenerationOutcome::Generated { plan }
            }
            Err(reason) => {
                match &reason {
                    PlanError::RemoteDisabled => tracing::debug!("remote generation disabled"),
                    other => {
                        tracing::warn!("remote generation failed, using local algorithm: {}", other)
                    }
                }
                let plan = generate_local_plan(profile, monthly_budget, catalog, picker);
                GenerationOutcome::FallbackUsed { plan, reason }
            }
        }
    }
}
