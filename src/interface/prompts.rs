use dialoguer::{Input, Select};

use crate::error::{PlanError, Result};
use crate::models::{ActivityLevel, Gender, Goal, UserProfile};

/// Profile fields supplied on the command line; missing ones are prompted for.
#[derive(Debug, Clone, Default)]
pub struct PartialProfile {
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub activity: Option<String>,
    pub goal: Option<String>,
}

impl PartialProfile {
    /// Complete the profile only from what was given, failing on the first gap.
    pub fn into_profile(self) -> Result<UserProfile> {
        let missing = |field: &str| PlanError::InvalidInput(format!("missing --{}", field));
        Ok(UserProfile {
            age: self.age.ok_or_else(|| missing("age"))?,
            gender: Gender::from_label(&self.gender.ok_or_else(|| missing("gender"))?),
            weight: self.weight.ok_or_else(|| missing("weight"))?,
            height: self.height.ok_or_else(|| missing("height"))?,
            activity_level: ActivityLevel::from_label(
                &self.activity.ok_or_else(|| missing("activity"))?,
            ),
            goal: Goal::from_label(&self.goal.ok_or_else(|| missing("goal"))?),
        })
    }

    pub fn is_complete(&self) -> bool {
        self.age.is_some()
            && self.gender.is_some()
            && self.weight.is_some()
            && self.height.is_some()
            && self.activity.is_some()
            && self.goal.is_some()
    }
}

fn prompt_number<T: std::str::FromStr>(prompt: &str, default: &str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Invalid number: {}", input)))
}

fn prompt_choice(prompt: &str, labels: &[&str], default: usize) -> Result<String> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(labels)
        .default(default)
        .interact()?;
    Ok(labels[selection].to_string())
}

/// Reject negative or non-numeric monthly budgets.
pub fn check_monthly_budget(budget: f64) -> Result<f64> {
    if !budget.is_finite() || budget < 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "Budget must be a non-negative number, got {}",
            budget
        )));
    }
    Ok(budget)
}

/// Prompt for the monthly food budget.
pub fn prompt_monthly_budget() -> Result<f64> {
    let budget: f64 = prompt_number("What is your monthly food budget?", "300")?;
    check_monthly_budget(budget)
}

/// Fill in any missing profile fields interactively.
pub fn complete_profile(partial: PartialProfile) -> Result<UserProfile> {
    if partial.is_complete() {
        return partial.into_profile();
    }

    let age = match partial.age {
        Some(age) => age,
        None => prompt_number("Age (years)?", "30")?,
    };
    let gender = match partial.gender {
        Some(g) => g,
        None => prompt_choice("Gender", Gender::LABELS, 0)?,
    };
    let weight = match partial.weight {
        Some(w) => w,
        None => prompt_number("Weight (kg)?", "70")?,
    };
    let height = match partial.height {
        Some(h) => h,
        None => prompt_number("Height (cm)?", "170")?,
    };
    let activity = match partial.activity {
        Some(a) => a,
        None => prompt_choice("Activity level", ActivityLevel::LABELS, 2)?,
    };
    let goal = match partial.goal {
        Some(g) => g,
        None => prompt_choice("Goal", Goal::LABELS, 1)?,
    };

    PartialProfile {
        age: Some(age),
        gender: Some(gender),
        weight: Some(weight),
        height: Some(height),
        activity: Some(activity),
        goal: Some(goal),
    }
    .into_profile()
}
