//! Error types for the DeepSeek client.
//!
//! Every failure `chat()` can produce is one of the five variants below;
//! no other error type escapes the client. `RequestFailed` and
//! `DecodingFailed` keep the underlying cause available through
//! [`std::error::Error::source`].

use thiserror::Error;

/// The closed set of failures a chat-completion call can surface.
#[derive(Debug, Error)]
pub enum DeepSeekError {
    /// The request URL could not be built from the configured base URL.
    /// No network request was issued.
    #[error("invalid request URL")]
    InvalidUrl,

    /// A response arrived but its body could not be read.
    #[error("invalid HTTP response")]
    InvalidResponse,

    /// The transport failed before a response was received (connection
    /// error, timeout, cancellation).
    #[error("request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    /// The server returned 200 but the body was not a valid chat
    /// completion response.
    #[error("failed to decode response: {0}")]
    DecodingFailed(#[source] serde_json::Error),

    /// The server returned a non-200 status. Carries the server-supplied
    /// error message when the body contained one, `"Unknown error"`
    /// otherwise.
    #[error("API error: {0}")]
    ApiError(String),
}
