//! Chat-completion transport
//!
//! `ChatTransport` is the seam between the gateway and the network. The
//! production implementation, `HttpTransport`, speaks the OpenAI-compatible
//! `/chat/completions` protocol through reqwest.

use crate::llm::config::GatewayConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Errors raised while performing a single completion
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection, timeout or non-2xx status
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Body was not the expected JSON
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// JSON decoded but `choices[0].message.content` was absent
    #[error("response has no choices[0].message.content")]
    MissingContent,

    /// Any other failure reported by a transport implementation
    #[error("{0}")]
    Unexpected(String),
}

/// A single chat message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for `/chat/completions`
#[derive(Clone, Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    /// A request whose only message is the given user prompt
    pub fn single(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(prompt)],
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice
    pub fn into_first_content(self) -> Result<String, TransportError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(TransportError::MissingContent)
    }
}

/// Performs one chat completion for a prompt
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send `prompt` as the sole user message and return the reply content
    async fn complete(&self, credential: &str, prompt: &str) -> Result<String, TransportError>;
}

/// reqwest-backed transport
pub struct HttpTransport {
    client: Client,
    config: GatewayConfig,
}

impl HttpTransport {
    /// Build a client with the configured per-request timeout
    pub fn new(config: &GatewayConfig) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn complete(&self, credential: &str, prompt: &str) -> Result<String, TransportError> {
        let body = ChatCompletionRequest::single(&self.config.model_id, prompt);

        let mut request = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(credential)
            .json(&body);
        if let Some(organization) = &self.config.organization {
            request = request.header("OpenAI-Organization", organization.as_str());
        }

        let response = request.send().await?.error_for_status()?;
        let text = response.text().await?;
        debug!("Completion response: {} bytes", text.len());

        let parsed: ChatCompletionResponse = serde_json::from_str(&text)?;
        parsed.into_first_content()
    }
}
