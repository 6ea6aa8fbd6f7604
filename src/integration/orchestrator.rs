//! Orchestrator running submissions off the UI thread
//!
//! A single worker thread owns a tokio runtime and the `Assistant`. The UI
//! sends `OrchestratorCommand`s and polls `OrchestratorEvent`s each frame.
//! Submissions are handled one at a time in arrival order.

use crate::integration::assistant::Assistant;
use crate::integration::config::AppConfig;
use crate::integration::submission::{InputError, InputMode, SubmissionOutcome, SubmissionStage};
use crate::{JarvisError, Result};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Commands that can be sent to the orchestrator
#[derive(Debug, Clone)]
pub enum OrchestratorCommand {
    /// Run one submission
    Submit {
        request_id: Uuid,
        model_key: String,
        mode: InputMode,
        /// Typed text; ignored in speech mode
        text: String,
    },

    /// Shutdown the orchestrator
    Shutdown,
}

/// Events emitted by the orchestrator
#[derive(Debug, Clone)]
pub enum OrchestratorEvent {
    /// The submission moved to a new stage
    Stage {
        request_id: Uuid,
        stage: SubmissionStage,
    },

    /// Refused before any network call
    Rejected {
        request_id: Uuid,
        error: InputError,
    },

    /// Reply ready to render; speech and logging follow on the worker
    Completed {
        request_id: Uuid,
        outcome: SubmissionOutcome,
    },

    /// The worker could not start
    Error(String),

    /// Orchestrator has shut down
    Shutdown,
}

impl OrchestratorEvent {
    pub fn request_id(&self) -> Option<Uuid> {
        match self {
            OrchestratorEvent::Stage { request_id, .. }
            | OrchestratorEvent::Rejected { request_id, .. }
            | OrchestratorEvent::Completed { request_id, .. } => Some(*request_id),
            OrchestratorEvent::Error(_) | OrchestratorEvent::Shutdown => None,
        }
    }
}

/// Handle for controlling the orchestrator from the UI
#[derive(Clone)]
pub struct OrchestratorHandle {
    command_tx: Sender<OrchestratorCommand>,
    event_rx: Receiver<OrchestratorEvent>,
}

impl OrchestratorHandle {
    /// Send a command to the orchestrator
    pub fn send_command(&self, cmd: OrchestratorCommand) -> Result<()> {
        self.command_tx
            .send(cmd)
            .map_err(|e| JarvisError::ChannelError(format!("Failed to send command: {}", e)))
    }

    /// Queue a submission and return its request id
    pub fn submit(&self, model_key: &str, mode: InputMode, text: &str) -> Result<Uuid> {
        let request_id = Uuid::new_v4();
        self.send_command(OrchestratorCommand::Submit {
            request_id,
            model_key: model_key.to_string(),
            mode,
            text: text.to_string(),
        })?;
        Ok(request_id)
    }

    /// Try to receive an event from the orchestrator
    pub fn try_recv_event(&self) -> Option<OrchestratorEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next event
    pub fn recv_event_timeout(&self, timeout: Duration) -> Option<OrchestratorEvent> {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    pub fn shutdown(&self) -> Result<()> {
        self.send_command(OrchestratorCommand::Shutdown)
    }
}

/// Owns the assistant until `start` moves it onto the worker thread
pub struct Orchestrator {
    assistant: Assistant,
    command_rx: Receiver<OrchestratorCommand>,
    event_tx: Sender<OrchestratorEvent>,
}

impl Orchestrator {
    /// Create an orchestrator around an assembled assistant
    pub fn new(assistant: Assistant) -> (Self, OrchestratorHandle) {
        let (command_tx, command_rx) = bounded(100);
        let (event_tx, event_rx) = bounded(100);

        let handle = OrchestratorHandle {
            command_tx,
            event_rx,
        };
        let orchestrator = Self {
            assistant,
            command_rx,
            event_tx,
        };

        (orchestrator, handle)
    }

    /// Create an orchestrator with the default HTTP transport and speech
    pub fn from_config(config: &AppConfig) -> Result<(Self, OrchestratorHandle)> {
        Ok(Self::new(Assistant::from_config(config)?))
    }

    /// Start the worker thread
    pub fn start(self) -> Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("jarvis-orchestrator".to_string())
            .spawn(move || self.run())
            .map_err(|e| JarvisError::OrchestratorError(format!("Failed to spawn worker: {}", e)))
    }

    fn run(self) {
        info!("Orchestrator worker starting");

        let runtime = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                error!("Failed to create tokio runtime: {}", e);
                let _ = self
                    .event_tx
                    .send(OrchestratorEvent::Error(format!("Runtime creation failed: {}", e)));
                let _ = self.event_tx.send(OrchestratorEvent::Shutdown);
                return;
            }
        };

        loop {
            match self.command_rx.recv() {
                Ok(OrchestratorCommand::Submit {
                    request_id,
                    model_key,
                    mode,
                    text,
                }) => {
                    debug!("Processing submission {}", request_id);
                    self.handle_submission(&runtime, request_id, &model_key, mode, &text);
                }
                Ok(OrchestratorCommand::Shutdown) => {
                    info!("Orchestrator shutdown requested");
                    let _ = self.event_tx.send(OrchestratorEvent::Shutdown);
                    break;
                }
                Err(e) => {
                    warn!("Command channel disconnected: {}", e);
                    break;
                }
            }
        }

        info!("Orchestrator worker stopped");
    }

    fn handle_submission(
        &self,
        runtime: &Runtime,
        request_id: Uuid,
        model_key: &str,
        mode: InputMode,
        text: &str,
    ) {
        let emit_stage = |stage: SubmissionStage| {
            debug!("Submission {} stage: {:?}", request_id, stage);
            let _ = self.event_tx.send(OrchestratorEvent::Stage { request_id, stage });
        };

        if mode == InputMode::Speech {
            emit_stage(SubmissionStage::Listening);
        }

        let query = match self.assistant.prepare(mode, text) {
            Ok(query) => query,
            Err(error) => {
                warn!("Submission {} rejected: {}", request_id, error);
                let _ = self
                    .event_tx
                    .send(OrchestratorEvent::Rejected { request_id, error });
                return;
            }
        };

        info!("Submitting query with model key {}", model_key);
        let outcome = runtime.block_on(self.assistant.answer(model_key, query, emit_stage));

        let _ = self.event_tx.send(OrchestratorEvent::Completed {
            request_id,
            outcome: outcome.clone(),
        });

        self.assistant.deliver(&outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orchestrator_creation() {
        let result = Orchestrator::from_config(&AppConfig::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_start_and_shutdown() {
        let (orchestrator, handle) = Orchestrator::from_config(&AppConfig::default()).unwrap();
        let worker = orchestrator.start().unwrap();

        handle.shutdown().unwrap();
        let event = handle.recv_event_timeout(Duration::from_secs(5));
        assert!(matches!(event, Some(OrchestratorEvent::Shutdown)));
        worker.join().unwrap();
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let (orchestrator, handle) = Orchestrator::from_config(&AppConfig::default()).unwrap();
        let _worker = orchestrator.start().unwrap();

        let request_id = handle.submit("Express", InputMode::Text, "   ").unwrap();
        match handle.recv_event_timeout(Duration::from_secs(5)) {
            Some(OrchestratorEvent::Rejected { request_id: id, error }) => {
                assert_eq!(id, request_id);
                assert_eq!(error, InputError::Empty);
            }
            other => panic!("unexpected event: {:?}", other),
        }

        handle.shutdown().unwrap();
    }

    #[test]
    fn test_event_request_id() {
        let id = Uuid::new_v4();
        let event = OrchestratorEvent::Stage {
            request_id: id,
            stage: SubmissionStage::Generating,
        };
        assert_eq!(event.request_id(), Some(id));
        assert_eq!(OrchestratorEvent::Shutdown.request_id(), None);
    }
}
