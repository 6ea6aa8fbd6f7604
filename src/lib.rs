pub mod integration;
pub mod interaction_log;
pub mod llm;
pub mod speech;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum JarvisError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IOError(String),

    #[error("Channel error: {0}")]
    ChannelError(String),

    #[error("Orchestrator error: {0}")]
    OrchestratorError(String),
}

impl From<std::io::Error> for JarvisError {
    fn from(e: std::io::Error) -> Self {
        JarvisError::IOError(e.to_string())
    }
}

impl JarvisError {
    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Bad settings need the user to fix the environment
            JarvisError::ConfigError(_) => false,
            JarvisError::IOError(_) => false,
            JarvisError::ChannelError(_) => false,
            // The worker may be restarted
            JarvisError::OrchestratorError(_) => true,
        }
    }

    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            JarvisError::ConfigError(_) => {
                "Configuration error. Please check your .env file.".to_string()
            }
            JarvisError::IOError(_) => "File system error occurred.".to_string(),
            JarvisError::ChannelError(_) => {
                "Internal communication error. Please restart the application.".to_string()
            }
            JarvisError::OrchestratorError(_) => {
                "System error occurred. Please try again.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, JarvisError>;
