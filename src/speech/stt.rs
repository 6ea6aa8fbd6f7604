//! Speech-to-text capability

use crate::speech::split_command_line;
use std::process::Command;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Transcript a recognizer prints when it heard nothing usable
pub const NO_INPUT_SENTINEL: &str = "none";

/// Recognition produced no usable text
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("No input recognized")]
pub struct NoInputRecognized;

/// Capture one utterance and return it as text
pub trait SpeechToText: Send + Sync {
    fn recognize(&self) -> Result<String, NoInputRecognized>;
}

/// Map a raw recognizer transcript to a result
///
/// Only the `none` sentinel (any case) counts as failure. Blank output is
/// returned as an empty transcript and refused later as empty input.
pub fn interpret_transcript(raw: &str) -> Result<String, NoInputRecognized> {
    let text = raw.trim();
    if text.eq_ignore_ascii_case(NO_INPUT_SENTINEL) {
        return Err(NoInputRecognized);
    }
    Ok(text.to_string())
}

/// Recognizer that runs an external program and reads its stdout
#[derive(Clone, Debug)]
pub struct CommandRecognizer {
    program: String,
    args: Vec<String>,
}

impl CommandRecognizer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a whitespace-separated command line, e.g. `listen --once`
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        split_command_line(command_line).map(|(program, args)| Self::new(program, args))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl SpeechToText for CommandRecognizer {
    fn recognize(&self) -> Result<String, NoInputRecognized> {
        info!("Listening via {}", self.program);

        let output = match Command::new(&self.program).args(&self.args).output() {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to run recognizer {}: {}", self.program, e);
                return Err(NoInputRecognized);
            }
        };

        if !output.status.success() {
            warn!("Recognizer {} exited with {}", self.program, output.status);
            return Err(NoInputRecognized);
        }

        let transcript = String::from_utf8_lossy(&output.stdout);
        debug!("Recognizer output: {:?}", transcript);
        interpret_transcript(&transcript)
    }
}

/// Recognizer used when no speech backend is configured
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRecognizer;

impl SpeechToText for NoRecognizer {
    fn recognize(&self) -> Result<String, NoInputRecognized> {
        warn!("Speech input requested but no recognizer is configured");
        Err(NoInputRecognized)
    }
}
