//! API gateway: model-key lookup plus the generate and classify calls
//!
//! Every failure is reduced to a `GatewayError` whose `Display` is the
//! text shown to the user, so callers can render it like any reply.

use crate::llm::prompts::build_classification_prompt;
use crate::llm::transport::ChatTransport;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

/// Keys offered in the model menu, in display order
pub const MODEL_KEYS: [&str; 2] = ["Express", "Advanced"];

/// Errors from a gateway call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The key is not in the catalog; no request was sent
    #[error("Invalid model selected.")]
    UnknownModel(String),

    /// The request failed in transit or its reply could not be read
    #[error("API call failed: {0}")]
    CallFailed(String),
}

/// Credential bound to a menu key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelProfile {
    pub key: String,
    pub credential: String,
}

/// Ordered lookup table from menu key to credential
#[derive(Clone, Debug, Default)]
pub struct ModelCatalog {
    profiles: Vec<ModelProfile>,
}

impl ModelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every key in `MODEL_KEYS` mapped to the same credential
    pub fn shared(credential: impl Into<String>) -> Self {
        let credential = credential.into();
        MODEL_KEYS
            .iter()
            .fold(Self::new(), |catalog, key| catalog.with_model(*key, credential.clone()))
    }

    /// Add or replace a key
    pub fn with_model(mut self, key: impl Into<String>, credential: impl Into<String>) -> Self {
        let key = key.into();
        let credential = credential.into();
        match self.profiles.iter_mut().find(|p| p.key == key) {
            Some(profile) => profile.credential = credential,
            None => self.profiles.push(ModelProfile { key, credential }),
        }
        self
    }

    pub fn lookup(&self, key: &str) -> Option<&ModelProfile> {
        self.profiles.iter().find(|p| p.key == key)
    }

    /// Keys in menu order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.key.as_str())
    }

    /// Keys whose credential is blank
    pub fn missing_credentials(&self) -> Vec<&str> {
        self.profiles
            .iter()
            .filter(|p| p.credential.trim().is_empty())
            .map(|p| p.key.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Issues the generate and classify calls for a model key
#[derive(Clone)]
pub struct Gateway {
    catalog: ModelCatalog,
    transport: Arc<dyn ChatTransport>,
}

impl Gateway {
    pub fn new(catalog: ModelCatalog, transport: Arc<dyn ChatTransport>) -> Self {
        Self { catalog, transport }
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    /// Ask the model to answer the query
    pub async fn generate(&self, model_key: &str, query: &str) -> Result<String, GatewayError> {
        debug!("Generating with model key {}", model_key);
        self.call(model_key, query).await
    }

    /// Ask the model to re-emit `generated` in the delimiter layout
    pub async fn classify(&self, model_key: &str, generated: &str) -> Result<String, GatewayError> {
        debug!("Classifying {} chars with model key {}", generated.len(), model_key);
        self.call(model_key, &build_classification_prompt(generated))
            .await
    }

    async fn call(&self, model_key: &str, prompt: &str) -> Result<String, GatewayError> {
        let profile = self
            .catalog
            .lookup(model_key)
            .ok_or_else(|| GatewayError::UnknownModel(model_key.to_string()))?;

        // A blank credential is still sent; the endpoint rejects it
        match self.transport.complete(&profile.credential, prompt).await {
            Ok(content) => Ok(content.trim().to_string()),
            Err(e) => {
                error!("Chat completion failed: {}", e);
                Err(GatewayError::CallFailed(e.to_string()))
            }
        }
    }
}
