//! Types describing one submission from input to rendered reply

use crate::llm::classifier::ClassifiedResponse;
use crate::speech::stt::NoInputRecognized;
use thiserror::Error;

/// How the query is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Typed into the input area
    #[default]
    Text,
    /// Captured by the speech recognizer
    Speech,
}

/// Reasons a submission is refused before any network call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter or speak some text!")]
    Empty,

    #[error("No input recognized. Please try again.")]
    NotRecognized,
}

impl From<NoInputRecognized> for InputError {
    fn from(_: NoInputRecognized) -> Self {
        InputError::NotRecognized
    }
}

impl InputError {
    /// Title of the warning shown to the user
    pub fn title(&self) -> &'static str {
        match self {
            InputError::Empty => "Input Error",
            InputError::NotRecognized => "Speech Error",
        }
    }
}

/// Trimmed, non-empty user text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(raw: &str) -> Result<Self, InputError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(InputError::Empty);
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Progress of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStage {
    Listening,
    Generating,
    Classifying,
}

impl SubmissionStage {
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStage::Listening => "Listening...",
            SubmissionStage::Generating => "Generating...",
            SubmissionStage::Classifying => "Classifying...",
        }
    }
}

/// Result of a submission that reached the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    /// The query that was sent
    pub query: String,

    /// Classified reply or error text, exactly as logged
    pub output: String,

    /// Output split into panels
    pub response: ClassifiedResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(Query::new("  hello \n").unwrap().as_str(), "hello");
    }

    #[test]
    fn test_blank_query_is_rejected() {
        assert_eq!(Query::new(" \t\n "), Err(InputError::Empty));
        assert_eq!(Query::new(""), Err(InputError::Empty));
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(InputError::Empty.to_string(), "Please enter or speak some text!");
        assert_eq!(InputError::Empty.title(), "Input Error");
        let err: InputError = NoInputRecognized.into();
        assert_eq!(err.to_string(), "No input recognized. Please try again.");
        assert_eq!(err.title(), "Speech Error");
    }
}
