//! Configuration for the integration layer
//!
//! Provides centralized configuration for all components. Values come
//! from the process environment, with `.env` loaded first.

use crate::interaction_log::DEFAULT_LOG_PATH;
use crate::llm::config::GatewayConfig;
use crate::llm::gateway::ModelCatalog;
use std::path::PathBuf;
use std::time::Duration;

/// Credential shared by every model key
pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
pub const ENDPOINT_VAR: &str = "JARVIS_ENDPOINT";
pub const MODEL_ID_VAR: &str = "JARVIS_MODEL_ID";
pub const TIMEOUT_VAR: &str = "JARVIS_TIMEOUT_SECS";
pub const LOG_PATH_VAR: &str = "JARVIS_LOG_PATH";
pub const STT_COMMAND_VAR: &str = "JARVIS_STT_COMMAND";
pub const TTS_COMMAND_VAR: &str = "JARVIS_TTS_COMMAND";

/// External speech programs; `None` selects the null implementation
#[derive(Clone, Debug, Default)]
pub struct SpeechConfig {
    pub stt_command: Option<String>,
    pub tts_command: Option<String>,
}

/// Configuration for the complete application
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// HTTP transport configuration
    pub gateway: GatewayConfig,

    /// Menu keys and their credentials
    pub models: ModelCatalog,

    /// Interaction log file
    pub log_path: PathBuf,

    /// Speech programs
    pub speech: SpeechConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            models: ModelCatalog::shared(""),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            speech: SpeechConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from the environment after reading `.env` if present
    pub fn from_env() -> Self {
        // A missing .env is normal
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        config.models = ModelCatalog::shared(lookup(API_KEY_VAR).unwrap_or_default());

        if let Some(endpoint) = non_blank(ENDPOINT_VAR) {
            config.gateway.endpoint = endpoint;
        }
        if let Some(model_id) = non_blank(MODEL_ID_VAR) {
            config.gateway.model_id = model_id;
        }
        if let Some(secs) = non_blank(TIMEOUT_VAR).and_then(|v| v.trim().parse::<u64>().ok()) {
            config.gateway.timeout = Duration::from_secs(secs);
        }
        if let Some(path) = non_blank(LOG_PATH_VAR) {
            config.log_path = PathBuf::from(path);
        }
        config.speech.stt_command = non_blank(STT_COMMAND_VAR);
        config.speech.tts_command = non_blank(TTS_COMMAND_VAR);

        config
    }

    /// Set the gateway configuration
    pub fn with_gateway(mut self, gateway: GatewayConfig) -> Self {
        self.gateway = gateway;
        self
    }

    /// Set the model catalog
    pub fn with_models(mut self, models: ModelCatalog) -> Self {
        self.models = models;
        self
    }

    /// Set the interaction log path
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    /// Set the speech programs
    pub fn with_speech(mut self, speech: SpeechConfig) -> Self {
        self.speech = speech;
        self
    }

    /// Validate the configuration
    ///
    /// Returns warnings for settings that will make calls fail at the
    /// remote end, and an error for settings that cannot work at all.
    pub fn validate(&self) -> Result<Vec<String>, String> {
        if self.models.is_empty() {
            return Err("No models configured".to_string());
        }
        if self.gateway.endpoint.trim().is_empty() {
            return Err("Gateway endpoint is required".to_string());
        }
        if self.gateway.timeout.is_zero() {
            return Err("Gateway timeout must be greater than zero".to_string());
        }

        Ok(self
            .models
            .missing_credentials()
            .into_iter()
            .map(|key| format!("API key for {key} not found! Check your .env file."))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.log_path, PathBuf::from("ai_log.txt"));
        assert_eq!(config.gateway.timeout, Duration::from_secs(15));
        assert_eq!(config.models.len(), 2);
        assert!(config.speech.stt_command.is_none());
    }

    #[test]
    fn test_from_lookup_shares_credential() {
        let config = AppConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "sk-or-1")]));
        assert_eq!(config.models.lookup("Express").unwrap().credential, "sk-or-1");
        assert_eq!(config.models.lookup("Advanced").unwrap().credential, "sk-or-1");
        assert!(config.validate().unwrap().is_empty());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENDPOINT_VAR, "http://localhost:1234/v1/chat/completions"),
            (MODEL_ID_VAR, "local"),
            (TIMEOUT_VAR, "30"),
            (LOG_PATH_VAR, "/tmp/jarvis.log"),
            (TTS_COMMAND_VAR, "espeak"),
            (STT_COMMAND_VAR, "  "),
        ]));

        assert_eq!(config.gateway.endpoint, "http://localhost:1234/v1/chat/completions");
        assert_eq!(config.gateway.model_id, "local");
        assert_eq!(config.gateway.timeout, Duration::from_secs(30));
        assert_eq!(config.log_path, PathBuf::from("/tmp/jarvis.log"));
        assert_eq!(config.speech.tts_command.as_deref(), Some("espeak"));
        assert!(config.speech.stt_command.is_none());
    }

    #[test]
    fn test_unparseable_timeout_keeps_default() {
        let config = AppConfig::from_lookup(lookup_from(&[(TIMEOUT_VAR, "soon")]));
        assert_eq!(config.gateway.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_missing_credentials_warn() {
        let warnings = AppConfig::default().validate().unwrap();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("Express"));
        assert!(warnings[1].contains("Advanced"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let config = AppConfig::default()
            .with_gateway(GatewayConfig::default().with_timeout(Duration::ZERO));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let config = AppConfig::default().with_models(ModelCatalog::new());
        assert!(config.validate().is_err());
    }
}
