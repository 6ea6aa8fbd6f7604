//! End-to-end integration module
//!
//! This module connects the components of the assistant:
//! Input -> Generate -> Classify -> Parse -> Speak -> Log

mod assistant;
mod config;
mod orchestrator;
mod submission;

pub use assistant::Assistant;
pub use config::{
    AppConfig, SpeechConfig, API_KEY_VAR, ENDPOINT_VAR, LOG_PATH_VAR, MODEL_ID_VAR,
    STT_COMMAND_VAR, TIMEOUT_VAR, TTS_COMMAND_VAR,
};
pub use orchestrator::{Orchestrator, OrchestratorCommand, OrchestratorEvent, OrchestratorHandle};
pub use submission::{InputError, InputMode, Query, SubmissionOutcome, SubmissionStage};
