//! Client configuration.

/// Default DeepSeek API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";

/// Immutable configuration for a [`DeepSeekClient`](crate::DeepSeekClient).
///
/// The API key is passed through as-is; the client does not validate it.
/// The base URL is kept unparsed so that a malformed value surfaces as
/// [`DeepSeekError::InvalidUrl`](crate::DeepSeekError::InvalidUrl) from the
/// call that would use it, not as a construction failure.
///
/// Timeout, proxy, and connection-pool policy belong to the injected
/// `reqwest::Client`; this crate configures none of its own.
#[derive(Debug, Clone)]
pub struct DeepSeekConfig {
    pub api_key: String,
    pub base_url: String,
    pub http_client: reqwest::Client,
}

impl DeepSeekConfig {
    /// Create a configuration with the default base URL and a
    /// default-constructed HTTP client.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Override the base URL (e.g. for a proxy or a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Inject a pre-configured HTTP client (timeouts, proxy, custom TLS).
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = http_client;
        self
    }
}
