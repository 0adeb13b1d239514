//! deepseek-client
//!
//! A minimal async client for the DeepSeek chat-completion API: build the
//! request, attach the bearer token, decode the response, map every failure
//! into a closed error taxonomy. One endpoint, one request per call —
//! streaming, retries, and rate-limit handling are deliberately absent.
//!
//! # Quick start
//! ```rust,no_run
//! use deepseek_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DeepSeekClient::new(DeepSeekConfig::new(
//!         std::env::var("DEEPSEEK_API_KEY")?,
//!     ));
//!
//!     let request = ChatCompletionRequest::new(vec![ChatMessage::user("Hello, DeepSeek!")]);
//!     let response = client.chat(request).await?;
//!     if let Some(choice) = response.choices.first() {
//!         println!("{}", choice.message.content);
//!     }
//!     Ok(())
//! }
//! ```
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::DeepSeekClient;
pub use config::{DeepSeekConfig, DEFAULT_BASE_URL};
pub use error::DeepSeekError;
pub use types::{models, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice};

/// Convenience re-exports for the common case.
pub mod prelude {
    pub use crate::client::DeepSeekClient;
    pub use crate::config::DeepSeekConfig;
    pub use crate::error::DeepSeekError;
    pub use crate::types::{
        models, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice,
    };
}
