//! The DeepSeek chat-completion client.

use tracing::{debug, warn};

use crate::config::DeepSeekConfig;
use crate::error::DeepSeekError;
use crate::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};

/// Asynchronous client for `POST {base_url}/chat/completions`.
///
/// The client holds only immutable state after construction (configuration
/// plus a pooled `reqwest::Client` handle), so it is cheap to clone and safe
/// to share across tasks without locking. Concurrent `chat` calls are
/// independent and unordered with respect to each other; each call issues
/// exactly one outbound request.
///
/// # Example
/// ```rust,no_run
/// use deepseek_client::{ChatCompletionRequest, ChatMessage, DeepSeekClient, DeepSeekConfig};
///
/// # async fn run() -> Result<(), deepseek_client::DeepSeekError> {
/// let client = DeepSeekClient::new(DeepSeekConfig::new("your-api-key"));
///
/// let request = ChatCompletionRequest::new(vec![ChatMessage::user("Hello!")])
///     .with_temperature(0.7)
///     .with_max_tokens(1000);
///
/// let response = client.chat(request).await?;
/// if let Some(choice) = response.choices.first() {
///     println!("{}", choice.message.content);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DeepSeekClient {
    config: DeepSeekConfig,
}

impl DeepSeekClient {
    /// Create a client from a configuration. Infallible: URL and key
    /// problems are reported by [`chat`](Self::chat), not here.
    pub fn new(config: DeepSeekConfig) -> Self {
        Self { config }
    }

    /// Perform one chat-completion call.
    ///
    /// Sends the full request as-is; no validation, no retry, no state kept
    /// between calls. Dropping the returned future aborts the in-flight
    /// request. Every failure maps to one of the five
    /// [`DeepSeekError`] kinds.
    pub async fn chat(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, DeepSeekError> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let url = reqwest::Url::parse(&url).map_err(|_| DeepSeekError::InvalidUrl)?;

        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "sending chat completion request"
        );

        let response = self
            .config
            .http_client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(DeepSeekError::RequestFailed)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|_| DeepSeekError::InvalidResponse)?;

        if status.as_u16() != 200 {
            // Best-effort decode of the error body; the message falls back
            // to a fixed string when the body is not the documented shape.
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .ok()
                .and_then(|e| e.error)
                .map(|e| e.message)
                .unwrap_or_else(|| "Unknown error".to_string());
            warn!(status = status.as_u16(), %message, "chat completion request rejected");
            return Err(DeepSeekError::ApiError(message));
        }

        let response: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(DeepSeekError::DecodingFailed)?;
        debug!(id = %response.id, choices = response.choices.len(), "chat completion received");
        Ok(response)
    }
}
