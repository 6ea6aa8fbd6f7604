//! Remote chat-completion integration
//!
//! This module turns a user query into a classified, three-part reply:
//! one call generates the answer, a second call asks the model to
//! re-emit that answer in a delimiter-separated layout, and the
//! classifier splits the result into intro, code and other content.
//!
//! # Architecture
//!
//! - **config**: Endpoint, model id and timeout for the HTTP transport
//! - **prompts**: Delimiter tokens and the classification instruction
//! - **classifier**: Parser that recovers the three fields
//! - **transport**: Wire types and the `ChatTransport` seam (reqwest)
//! - **gateway**: Model-key lookup and the generate / classify calls
//!
//! # Usage
//!
//! ```rust,ignore
//! use jarvis::llm::{parse_classified, Gateway, GatewayConfig, HttpTransport, ModelCatalog};
//! use std::sync::Arc;
//!
//! let transport = HttpTransport::new(&GatewayConfig::default())?;
//! let gateway = Gateway::new(ModelCatalog::shared("secret"), Arc::new(transport));
//!
//! let answer = gateway.generate("Express", "Write hello world in Python").await?;
//! let classified = gateway.classify("Express", &answer).await?;
//! let response = parse_classified(&classified);
//! println!("{}", response.intro);
//! ```

pub mod classifier;
pub mod config;
pub mod gateway;
pub mod prompts;
pub mod transport;

// Re-export commonly used types
pub use classifier::{parse_classified, ClassifiedResponse};
pub use config::GatewayConfig;
pub use gateway::{Gateway, GatewayError, ModelCatalog, ModelProfile, MODEL_KEYS};
pub use prompts::{build_classification_prompt, markers, CLASSIFY_INSTRUCTION, PARSE_FAILURE_INTRO};
pub use transport::{ChatTransport, HttpTransport, TransportError};
