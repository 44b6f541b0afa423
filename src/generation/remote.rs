use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::RemoteConfig;
use crate::error::{PlanError, Result};
use crate::generation::prompt::build_prompt;
use crate::models::{DietPlan, FoodItem, GenerationSource, UserProfile};
use crate::planner::daily_budget;

/// A remote service able to produce a plan from a prompt.
pub trait RemoteGenerator {
    fn generate(
        &self,
        profile: &UserProfile,
        monthly_budget: f64,
        catalog: &[FoodItem],
    ) -> Result<DietPlan>;
}

/// Stand-in used when remote generation is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledRemote;

impl RemoteGenerator for DisabledRemote {
    fn generate(&self, _: &UserProfile, _: f64, _: &[FoodItem]) -> Result<DietPlan> {
        Err(PlanError::RemoteDisabled)
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
}

/// Blocking HTTP client for a text-generation inference endpoint.
#[derive(Debug, Clone)]
pub struct HttpRemoteGenerator {
    endpoint: String,
    api_token: String,
    timeout: Duration,
}

impl HttpRemoteGenerator {
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            api_token: config.api_token.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

impl RemoteGenerator for HttpRemoteGenerator {
    fn generate(
        &self,
        profile: &UserProfile,
        monthly_budget: f64,
        catalog: &[FoodItem],
    ) -> Result<DietPlan> {
        let prompt = build_prompt(profile, monthly_budget, catalog);

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        tracing::debug!("remote: POST {} (timeout {:?})", self.endpoint, self.timeout);

        let response = client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(&InferenceRequest { inputs: &prompt })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlanError::RemoteStatus(status.as_u16()));
        }

        let body = response.text()?;
        decode_response(&body, monthly_budget)
    }
}

/// Decode an inference response into a plan for `monthly_budget`.
///
/// The generated text must itself be a JSON plan in the published output
/// shape with at least one meal, carrying the requested monthly budget and
/// its exact daily share. Free-form prose is rejected.
pub fn decode_response(body: &str, monthly_budget: f64) -> Result<DietPlan> {
    let parsed: InferenceResponse = serde_json::from_str(body)
        .map_err(|e| PlanError::UndecodableResponse(format!("unexpected envelope: {}", e)))?;

    let text = match parsed {
        InferenceResponse::Batch(items) => items
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .ok_or_else(|| PlanError::UndecodableResponse("empty response".to_string()))?,
        InferenceResponse::Single(g) => g.generated_text,
    };

    let json = extract_json_object(&text)
        .ok_or_else(|| PlanError::UndecodableResponse("no JSON plan in generated text".to_string()))?;

    let mut plan: DietPlan = serde_json::from_str(json)
        .map_err(|e| PlanError::UndecodableResponse(format!("invalid plan: {}", e)))?;

    if plan.meals.is_empty() {
        return Err(PlanError::UndecodableResponse("plan has no meals".to_string()));
    }
    if !same_amount(plan.monthly_budget, monthly_budget) {
        return Err(PlanError::UndecodableResponse(format!(
            "plan is for a monthly budget of {}, requested {}",
            plan.monthly_budget, monthly_budget
        )));
    }
    if !same_amount(plan.daily_budget, daily_budget(monthly_budget)) {
        return Err(PlanError::UndecodableResponse(format!(
            "daily budget {} is not a 30-day share of {}",
            plan.daily_budget, monthly_budget
        )));
    }

    plan.generation_source = GenerationSource::ExternalModel;
    Ok(plan)
}

/// Equal up to float parsing error.
fn same_amount(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

/// Slice from the first `{` to the last `}`.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
