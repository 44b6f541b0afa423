pub mod prompt;
pub mod remote;
pub mod strategy;

pub use prompt::build_prompt;
pub use remote::{decode_response, DisabledRemote, HttpRemoteGenerator, RemoteGenerator};
pub use strategy::{DietPlanService, GenerationOutcome};
