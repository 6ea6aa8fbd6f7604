//! Gateway configuration for the chat-completion endpoint

use std::time::Duration;

/// OpenRouter chat-completion endpoint
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Model requested for both the generate and the classify call
pub const DEFAULT_MODEL_ID: &str = "google/gemma-3-27b-it:free";

/// Per-call timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration for the HTTP transport
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Full URL of the chat-completion endpoint
    pub endpoint: String,

    /// Model identifier sent in every request body
    pub model_id: String,

    /// Timeout applied to each request individually
    pub timeout: Duration,

    /// Value of the `OpenAI-Organization` header (omitted when `None`)
    pub organization: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            organization: Some("openrouter".to_string()),
        }
    }
}

impl GatewayConfig {
    /// Create a configuration for a custom endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the model id
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Set the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set or clear the organization header
    pub fn with_organization(mut self, organization: Option<String>) -> Self {
        self.organization = organization;
        self
    }
}
