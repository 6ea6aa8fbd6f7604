//! One submission, end to end
//!
//! Input → generate → classify → parse → speak intro → log. Every failure
//! after input validation becomes text in the Other panel, so there is no
//! partial-success path: an accepted query always yields an outcome and a
//! log record.

use crate::integration::config::AppConfig;
use crate::integration::submission::{InputError, InputMode, Query, SubmissionOutcome, SubmissionStage};
use crate::interaction_log::InteractionLog;
use crate::llm::classifier::parse_classified;
use crate::llm::gateway::Gateway;
use crate::llm::prompts::markers;
use crate::llm::transport::HttpTransport;
use crate::speech::{
    CommandRecognizer, CommandSpeaker, NoRecognizer, SilentSpeaker, SpeechToText, TextToSpeech,
};
use crate::{JarvisError, Result};
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct Assistant {
    gateway: Gateway,
    log: InteractionLog,
    recognizer: Arc<dyn SpeechToText>,
    speaker: Arc<dyn TextToSpeech>,
}

impl Assistant {
    pub fn new(
        gateway: Gateway,
        log: InteractionLog,
        recognizer: Arc<dyn SpeechToText>,
        speaker: Arc<dyn TextToSpeech>,
    ) -> Self {
        Self {
            gateway,
            log,
            recognizer,
            speaker,
        }
    }

    /// Wire the HTTP transport and speech programs named in the config
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.gateway)
            .map_err(|e| JarvisError::ConfigError(format!("HTTP client: {}", e)))?;
        let gateway = Gateway::new(config.models.clone(), Arc::new(transport));

        let recognizer: Arc<dyn SpeechToText> = match config
            .speech
            .stt_command
            .as_deref()
            .and_then(CommandRecognizer::from_command_line)
        {
            Some(recognizer) => Arc::new(recognizer),
            None => Arc::new(NoRecognizer),
        };

        let speaker: Arc<dyn TextToSpeech> = match config
            .speech
            .tts_command
            .as_deref()
            .and_then(CommandSpeaker::from_command_line)
        {
            Some(speaker) => Arc::new(speaker),
            None => Arc::new(SilentSpeaker),
        };

        Ok(Self::new(
            gateway,
            InteractionLog::new(&config.log_path),
            recognizer,
            speaker,
        ))
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn log(&self) -> &InteractionLog {
        &self.log
    }

    /// Turn input into a validated query
    ///
    /// In speech mode the typed text is ignored and the recognizer is
    /// asked for an utterance instead.
    pub fn prepare(&self, mode: InputMode, typed: &str) -> std::result::Result<Query, InputError> {
        match mode {
            InputMode::Text => Query::new(typed),
            InputMode::Speech => {
                let heard = self.recognizer.recognize()?;
                info!("Recognized speech: {}", heard);
                Query::new(&heard)
            }
        }
    }

    /// Run the generate and classify calls and split the result
    ///
    /// A failed generate skips the classify call; its error text is parsed
    /// like any other reply.
    pub async fn answer(
        &self,
        model_key: &str,
        query: Query,
        mut on_stage: impl FnMut(SubmissionStage),
    ) -> SubmissionOutcome {
        on_stage(SubmissionStage::Generating);
        let output = match self.gateway.generate(model_key, query.as_str()).await {
            Ok(generated) => {
                if markers::contains_markers(&generated) {
                    warn!("Generated text already contains layout delimiters");
                }
                on_stage(SubmissionStage::Classifying);
                self.gateway
                    .classify(model_key, &generated)
                    .await
                    .unwrap_or_else(|e| e.to_string())
            }
            Err(e) => e.to_string(),
        };

        let response = parse_classified(&output);
        if !response.is_parsed() {
            warn!("Reply did not follow the delimiter layout");
        }

        SubmissionOutcome {
            query: query.into_inner(),
            output,
            response,
        }
    }

    /// Speak the intro and append the log record
    pub fn deliver(&self, outcome: &SubmissionOutcome) {
        self.speaker.speak(&outcome.response.intro);

        if let Err(e) = self.log.log(&outcome.query, &outcome.output) {
            error!("Failed to write interaction log {:?}: {}", self.log.path(), e);
        }
    }

    /// Prepare, answer and deliver in one call
    pub async fn submit(
        &self,
        model_key: &str,
        mode: InputMode,
        typed: &str,
        on_stage: impl FnMut(SubmissionStage),
    ) -> std::result::Result<SubmissionOutcome, InputError> {
        let query = self.prepare(mode, typed)?;
        let outcome = self.answer(model_key, query, on_stage).await;
        self.deliver(&outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::config::SpeechConfig;
    use crate::llm::gateway::ModelCatalog;
    use crate::llm::prompts::PARSE_FAILURE_INTRO;
    use crate::llm::transport::{ChatTransport, TransportError};
    use crate::speech::NoInputRecognized;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Echoes the prompt for generate, returns a fixed reply for classify
    struct EchoTransport {
        classified: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ChatTransport for EchoTransport {
        async fn complete(&self, _credential: &str, prompt: &str) -> std::result::Result<String, TransportError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n == 0 {
                Ok(prompt.to_string())
            } else {
                Ok(self.classified.to_string())
            }
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl ChatTransport for FailingTransport {
        async fn complete(&self, _credential: &str, _prompt: &str) -> std::result::Result<String, TransportError> {
            Err(TransportError::Unexpected("operation timed out".into()))
        }
    }

    #[derive(Default)]
    struct RecordingSpeaker {
        spoken: Mutex<Vec<String>>,
    }

    impl TextToSpeech for RecordingSpeaker {
        fn speak(&self, text: &str) {
            self.spoken.lock().unwrap().push(text.to_string());
        }
    }

    struct FixedRecognizer(std::result::Result<&'static str, NoInputRecognized>);

    impl SpeechToText for FixedRecognizer {
        fn recognize(&self) -> std::result::Result<String, NoInputRecognized> {
            self.0.map(str::to_string)
        }
    }

    fn assistant(
        transport: Arc<dyn ChatTransport>,
        recognizer: Arc<dyn SpeechToText>,
        speaker: Arc<dyn TextToSpeech>,
        dir: &tempfile::TempDir,
    ) -> Assistant {
        Assistant::new(
            Gateway::new(ModelCatalog::shared("sk"), transport),
            InteractionLog::new(dir.path().join("ai_log.txt")),
            recognizer,
            speaker,
        )
    }

    #[tokio::test]
    async fn test_answer_reports_stages_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let transport = Arc::new(EchoTransport {
            classified: "Hi*&$x!@^y",
            calls: AtomicUsize::new(0),
        });
        let assistant = assistant(transport, Arc::new(NoRecognizer), Arc::new(SilentSpeaker), &dir);

        let mut stages = Vec::new();
        let outcome = assistant
            .answer("Express", Query::new("hello").unwrap(), |s| stages.push(s))
            .await;

        assert_eq!(stages, vec![SubmissionStage::Generating, SubmissionStage::Classifying]);
        assert_eq!(outcome.output, "Hi*&$x!@^y");
        assert_eq!(outcome.response.intro, "Hi");
    }

    #[tokio::test]
    async fn test_failed_generate_skips_classify() {
        let dir = tempfile::tempdir().unwrap();
        let assistant = assistant(
            Arc::new(FailingTransport),
            Arc::new(NoRecognizer),
            Arc::new(SilentSpeaker),
            &dir,
        );

        let mut stages = Vec::new();
        let outcome = assistant
            .answer("Express", Query::new("hello").unwrap(), |s| stages.push(s))
            .await;

        assert_eq!(stages, vec![SubmissionStage::Generating]);
        assert_eq!(outcome.output, "API call failed: operation timed out");
        assert_eq!(outcome.response.intro, PARSE_FAILURE_INTRO);
        assert_eq!(outcome.response.other, outcome.output);
    }

    #[tokio::test]
    async fn test_deliver_speaks_intro_and_logs() {
        let dir = tempfile::tempdir().unwrap();
        let speaker = Arc::new(RecordingSpeaker::default());
        let assistant = assistant(
            Arc::new(FailingTransport),
            Arc::new(NoRecognizer),
            speaker.clone(),
            &dir,
        );

        let outcome = assistant
            .submit("Express", InputMode::Text, "hello", |_| {})
            .await
            .unwrap();

        assert_eq!(*speaker.spoken.lock().unwrap(), vec![PARSE_FAILURE_INTRO.to_string()]);
        let logged = std::fs::read_to_string(assistant.log().path()).unwrap();
        assert!(logged.contains(&format!("INPUT:\nhello\nOUTPUT:\n{}\n", outcome.output)));
    }

    #[tokio::test]
    async fn test_speech_mode_uses_recognizer() {
        let dir = tempfile::tempdir().unwrap();
        let transport = Arc::new(EchoTransport {
            classified: "a*&$b!@^c",
            calls: AtomicUsize::new(0),
        });
        let assistant = assistant(
            transport,
            Arc::new(FixedRecognizer(Ok("what is rust"))),
            Arc::new(SilentSpeaker),
            &dir,
        );

        let outcome = assistant
            .submit("Express", InputMode::Speech, "typed text is ignored", |_| {})
            .await
            .unwrap();
        assert_eq!(outcome.query, "what is rust");
    }

    #[tokio::test]
    async fn test_speech_failure_aborts_without_log() {
        let dir = tempfile::tempdir().unwrap();
        let assistant = assistant(
            Arc::new(FailingTransport),
            Arc::new(FixedRecognizer(Err(NoInputRecognized))),
            Arc::new(SilentSpeaker),
            &dir,
        );

        let err = assistant
            .submit("Express", InputMode::Speech, "", |_| {})
            .await
            .unwrap_err();
        assert_eq!(err, InputError::NotRecognized);
        assert!(!assistant.log().path().exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_blank_speech_is_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let recognizer = CommandRecognizer::from_command_line("echo").unwrap();
        let assistant = assistant(
            Arc::new(FailingTransport),
            Arc::new(recognizer),
            Arc::new(SilentSpeaker),
            &dir,
        );

        let err = assistant
            .submit("Express", InputMode::Speech, "typed text is ignored", |_| {})
            .await
            .unwrap_err();
        assert_eq!(err, InputError::Empty);
        assert_eq!(err.title(), "Input Error");
        assert!(!assistant.log().path().exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_from_config_uses_configured_speech_and_log() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("custom.log");
        let config = AppConfig::default()
            .with_log_path(log_path.clone())
            .with_speech(SpeechConfig {
                stt_command: Some("echo what is rust".to_string()),
                tts_command: Some("true".to_string()),
            });
        let assistant = Assistant::from_config(&config).unwrap();
        assert_eq!(assistant.log().path(), log_path.as_path());

        let query = assistant.prepare(InputMode::Speech, "").unwrap();
        assert_eq!(query.as_str(), "what is rust");
    }

    #[test]
    fn test_from_config_selects_null_speech() {
        let assistant = Assistant::from_config(&AppConfig::default()).unwrap();
        assert_eq!(assistant.gateway().catalog().len(), 2);
        assert_eq!(assistant.log().path(), std::path::Path::new("ai_log.txt"));
    }
}
