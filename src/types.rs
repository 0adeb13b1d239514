//! Wire types for the DeepSeek chat-completion endpoint.
//!
//! These mirror the request and response bodies of
//! `POST {base_url}/chat/completions` exactly. All types are plain value
//! objects: construct, serialize, compare; nothing here holds state.

use serde::{Deserialize, Serialize};

/// DeepSeek model constants.
pub mod models {
    /// General-purpose chat model.
    pub const CHAT: &str = "deepseek-chat";

    /// Reasoning model with chain-of-thought output.
    pub const REASONER: &str = "deepseek-reasoner";
}

/// A single message in a conversation.
///
/// `role` is a free-form string rather than an enum: the server, not the
/// client, defines the set of valid roles. The constructors cover the
/// conventional ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}

/// Request body for a chat-completion call.
///
/// The caller supplies the full message history each time; the client keeps
/// no conversation state. Unset sampling parameters are omitted from the
/// serialized body, not sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatCompletionRequest {
    /// Create a request for [`models::CHAT`] with no sampling parameters.
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: models::CHAT.to_string(),
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// One generated completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Response body of a successful chat-completion call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub choices: Vec<Choice>,
}

/// Error body the API returns on non-200 statuses, decoded best-effort.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiError {
    pub message: String,
}
