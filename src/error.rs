use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Remote generation disabled")]
    RemoteDisabled,

    #[error("Remote service returned HTTP {0}")]
    RemoteStatus(u16),

    #[error("Could not decode remote response: {0}")]
    UndecodableResponse(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
