//! Speech capabilities used by the assistant
//!
//! This module provides:
//! - Speech-to-text (STT) behind the `SpeechToText` trait
//! - Text-to-speech (TTS) behind the `TextToSpeech` trait
//!
//! Both are opaque to the rest of the crate. The bundled implementations
//! either shell out to a configured program or do nothing.

pub mod stt;
pub mod tts;

// Re-export commonly used types
pub use stt::{
    interpret_transcript, CommandRecognizer, NoInputRecognized, NoRecognizer, SpeechToText,
    NO_INPUT_SENTINEL,
};
pub use tts::{CommandSpeaker, SilentSpeaker, TextToSpeech};

/// Split a configured command line into program and arguments
pub(crate) fn split_command_line(command_line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = command_line.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    Some((program, parts.collect()))
}
