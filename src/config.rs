use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Inference endpoint used when none is configured.
pub const DEFAULT_REMOTE_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/microsoft/DialoGPT-medium";

/// Placeholder credential; requests made with it are expected to be rejected.
pub const DEFAULT_REMOTE_TOKEN: &str = "hf_your_free_token_here";

pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 10;

/// Settings for the remote generation attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub api_token: String,
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_REMOTE_ENDPOINT.to_string(),
            api_token: DEFAULT_REMOTE_TOKEN.to_string(),
            timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
        }
    }
}

impl RemoteConfig {
    /// Apply `DIET_REMOTE_*` environment overrides. Unparseable values are ignored.
    pub fn apply_env(&mut self) {
        if let Some(enabled) = env::var("DIET_REMOTE_ENABLED")
            .ok()
            .and_then(|s| parse_bool(&s))
        {
            self.enabled = enabled;
        }
        if let Ok(endpoint) = env::var("DIET_REMOTE_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Ok(token) = env::var("DIET_REMOTE_TOKEN") {
            self.api_token = token;
        }
        if let Some(secs) = env::var("DIET_REMOTE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.timeout_secs = secs;
        }
    }
}

/// Top-level planner configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub remote: RemoteConfig,
}

impl PlannerConfig {
    /// Load from an optional JSON file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.remote.apply_env();
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
