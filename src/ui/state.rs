//! Application state management
//!
//! This module provides the central state for the assistant window. The
//! state owns the orchestrator handle and folds its events into what the
//! panels display.

use crate::integration::{
    InputError, InputMode, OrchestratorEvent, OrchestratorHandle, Query, SubmissionStage,
};
use crate::llm::classifier::ClassifiedResponse;
use crate::llm::gateway::MODEL_KEYS;
use std::thread::JoinHandle;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Modal warning shown over the window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub title: String,
    pub message: String,
}

impl Warning {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&InputError> for Warning {
    fn from(err: &InputError) -> Self {
        Self::new(err.title(), err.to_string())
    }
}

/// Central application state
pub struct AppState {
    /// Query being typed
    pub input_text: String,
    /// Selected model key
    pub model_key: String,
    /// Keys offered by the model selector
    pub model_keys: Vec<String>,
    /// Text or speech input
    pub mode: InputMode,

    /// Last rendered reply
    pub response: Option<ClassifiedResponse>,
    /// Stage of the submission in flight
    pub stage: Option<SubmissionStage>,
    /// Request id of the submission in flight
    pub pending_request: Option<Uuid>,
    pub warning: Option<Warning>,

    handle: Option<OrchestratorHandle>,
    worker: Option<JoinHandle<()>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MODEL_KEYS.iter().map(|k| k.to_string()).collect())
    }
}

impl AppState {
    /// Create state offering the given model keys; the first is selected
    pub fn new(model_keys: Vec<String>) -> Self {
        Self {
            input_text: String::new(),
            model_key: model_keys.first().cloned().unwrap_or_default(),
            model_keys,
            mode: InputMode::default(),
            response: None,
            stage: None,
            pending_request: None,
            warning: None,
            handle: None,
            worker: None,
        }
    }

    /// Attach the orchestrator handle
    pub fn with_handle(mut self, handle: OrchestratorHandle) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Attach the worker thread so `shutdown` can wait for it
    pub fn with_worker(mut self, worker: JoinHandle<()>) -> Self {
        self.worker = Some(worker);
        self
    }

    /// Whether a submission is in flight
    pub fn is_busy(&self) -> bool {
        self.pending_request.is_some()
    }

    /// Queue the current input; returns whether a submission was sent
    ///
    /// Blank typed text is refused here so the worker never sees it.
    pub fn submit(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }

        if self.mode == InputMode::Text {
            if let Err(err) = Query::new(&self.input_text) {
                warn!("Submission refused: {}", err);
                self.warning = Some(Warning::from(&err));
                return false;
            }
        }

        let Some(handle) = &self.handle else {
            self.warning = Some(Warning::new("Error", "The assistant is not running."));
            return false;
        };

        match handle.submit(&self.model_key, self.mode, &self.input_text) {
            Ok(request_id) => {
                info!("Submitted request {} with model {}", request_id, self.model_key);
                self.warning = None;
                self.pending_request = Some(request_id);
                self.stage = None;
                true
            }
            Err(e) => {
                error!("Failed to submit: {}", e);
                self.warning = Some(Warning::new("Error", e.user_message()));
                false
            }
        }
    }

    /// Poll for events from the orchestrator
    pub fn poll_events(&mut self) {
        let Some(handle) = self.handle.clone() else {
            return;
        };
        while let Some(event) = handle.try_recv_event() {
            self.apply_event(event);
        }
    }

    /// Fold one orchestrator event into the state
    pub fn apply_event(&mut self, event: OrchestratorEvent) {
        if let Some(request_id) = event.request_id() {
            if self.pending_request != Some(request_id) {
                debug!("Ignoring event for stale request {}", request_id);
                return;
            }
        }

        match event {
            OrchestratorEvent::Stage { stage, .. } => {
                self.stage = Some(stage);
            }
            OrchestratorEvent::Rejected { error, .. } => {
                self.warning = Some(Warning::from(&error));
                self.finish();
            }
            OrchestratorEvent::Completed { outcome, .. } => {
                self.response = Some(outcome.response);
                self.finish();
            }
            OrchestratorEvent::Error(message) => {
                error!("Orchestrator error: {}", message);
                self.warning = Some(Warning::new("Error", message));
                self.finish();
            }
            OrchestratorEvent::Shutdown => {
                info!("Orchestrator shut down");
                self.handle = None;
                self.finish();
            }
        }
    }

    fn finish(&mut self) {
        self.pending_request = None;
        self.stage = None;
    }

    pub fn dismiss_warning(&mut self) {
        self.warning = None;
    }

    pub fn intro(&self) -> &str {
        self.response.as_ref().map_or("", |r| r.intro.as_str())
    }

    pub fn code(&self) -> &str {
        self.response.as_ref().map_or("", |r| r.code.as_str())
    }

    pub fn other(&self) -> &str {
        self.response.as_ref().map_or("", |r| r.other.as_str())
    }

    /// The narrative panel is hidden while Other is empty
    pub fn show_narrative(&self) -> bool {
        !self.other().is_empty()
    }

    /// Status line text
    pub fn status_text(&self) -> Option<&'static str> {
        match (self.stage, self.is_busy()) {
            (Some(stage), _) => Some(stage.label()),
            (None, true) => Some("Working..."),
            (None, false) => None,
        }
    }

    /// Stop the worker and wait until its last record is logged
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.shutdown() {
                warn!("Failed to stop orchestrator: {}", e);
            }
        }
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("Orchestrator worker panicked");
            }
        }
    }
}
