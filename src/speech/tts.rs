//! Text-to-speech capability

use crate::speech::split_command_line;
use std::process::Command;
use tracing::{debug, info, warn};

/// Vocalize a piece of text; blocks until speech finishes
pub trait TextToSpeech: Send + Sync {
    fn speak(&self, text: &str);
}

/// Speaker that runs an external program with the text as last argument
///
/// Works with `espeak`, `say`, `spd-say` and similar tools.
#[derive(Clone, Debug)]
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
}

impl CommandSpeaker {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_command_line(command_line: &str) -> Option<Self> {
        split_command_line(command_line).map(|(program, args)| Self::new(program, args))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl TextToSpeech for CommandSpeaker {
    fn speak(&self, text: &str) {
        if text.trim().is_empty() {
            return;
        }

        debug!("Speaking {} chars via {}", text.len(), self.program);
        match Command::new(&self.program).args(&self.args).arg(text).status() {
            Ok(status) if status.success() => {}
            Ok(status) => warn!("Speaker {} exited with {}", self.program, status),
            Err(e) => warn!("Failed to run speaker {}: {}", self.program, e),
        }
    }
}

/// Speaker used when no TTS backend is configured
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentSpeaker;

impl TextToSpeech for SilentSpeaker {
    fn speak(&self, text: &str) {
        info!("(silent) {}", text);
    }
}
