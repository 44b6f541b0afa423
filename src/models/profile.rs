use std::fmt;

use serde::{Deserialize, Serialize};

/// Biological sex used by the BMR formula.
///
/// Any label other than "male" selects the female constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const LABELS: &'static [&'static str] = &["male", "female"];

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => {
                warn_if_unknown("gender", label, Self::LABELS);
                Gender::Female
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl From<String> for Gender {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

/// Activity level. Unknown labels collapse to `Sedentary` (multiplier 1.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const LABELS: &'static [&'static str] =
        &["sedentary", "light", "moderate", "active", "very_active"];

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "very_active" => ActivityLevel::VeryActive,
            _ => {
                warn_if_unknown("activity level", label, Self::LABELS);
                ActivityLevel::Sedentary
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

/// Dietary goal. Unknown labels collapse to `Maintain` (no offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Goal {
    WeightLoss,
    Maintain,
    GainMuscle,
}

impl Goal {
    pub const LABELS: &'static [&'static str] = &["weight_loss", "maintain", "gain_muscle"];

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "weight_loss" => Goal::WeightLoss,
            "maintain" => Goal::Maintain,
            "gain_muscle" => Goal::GainMuscle,
            _ => {
                warn_if_unknown("goal", label, Self::LABELS);
                Goal::Maintain
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::Maintain => "maintain",
            Goal::GainMuscle => "gain_muscle",
        }
    }
}

impl From<String> for Goal {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

/// Closest known label by Jaro-Winkler similarity, if any is reasonably close.
pub fn closest_label<'a>(input: &str, labels: &[&'a str]) -> Option<&'a str> {
    let input = input.trim().to_lowercase();
    labels
        .iter()
        .map(|l| (*l, strsim::jaro_winkler(l, &input)))
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(l, _)| l)
}

fn warn_if_unknown(field: &str, label: &str, labels: &[&str]) {
    match closest_label(label, labels) {
        Some(suggestion) => tracing::warn!(
            "unknown {} '{}', using default (did you mean '{}'?)",
            field,
            label,
            suggestion
        ),
        None => tracing::warn!("unknown {} '{}', using default", field, label),
    }
}

/// Biometric and activity profile of the person the plan is generated for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    /// Weight in kilograms.
    pub weight: f64,
    /// Height in centimetres.
    pub height: f64,
    #[serde(alias = "activity_level")]
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {}, {}kg, {}cm, {}, goal {}",
            self.age,
            self.gender.as_str(),
            self.weight,
            self.height,
            self.activity_level.as_str(),
            self.goal.as_str()
        )
    }
}
