//! Messages API HTTP client.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error};

use crate::error::{LlmError, LlmResult};
use crate::types::{Message, MessagesRequest, MessagesResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-haiku-4-5-20251001";
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Configuration for the language model client.
#[derive(Clone)]
pub struct LlmClientConfig {
    /// API key sent as `x-api-key`
    pub api_key: String,
    /// Base URL of the Messages API (no trailing slash)
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Value of the `anthropic-version` header
    pub api_version: String,
    /// Request timeout; `None` leaves the client default in place
    pub timeout: Option<Duration>,
}

impl fmt::Debug for LlmClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl LlmClientConfig {
    /// Config with default endpoint and model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
        }
    }

    /// Create config from environment variables.
    ///
    /// `ANTHROPIC_API_KEY` is required.
    pub fn from_env() -> LlmResult<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| LlmError::Config("ANTHROPIC_API_KEY not set".to_string()))?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("ANTHROPIC_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Ok(model) = std::env::var("ANTHROPIC_MODEL") {
            config.model = model;
        }
        config.timeout = std::env::var("ANTHROPIC_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs);

        Ok(config)
    }
}

/// Client for the vision/language model service.
#[derive(Clone)]
pub struct LlmClient {
    http: Client,
    config: LlmClientConfig,
}

impl LlmClient {
    /// Create a new client.
    pub fn new(config: LlmClientConfig) -> LlmResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(LlmError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> LlmResult<Self> {
        Self::new(LlmClientConfig::from_env()?)
    }

    pub fn config(&self) -> &LlmClientConfig {
        &self.config
    }

    /// Send a single-turn request and return the first text block of the reply.
    pub(crate) async fn complete(&self, max_tokens: u32, message: Message) -> LlmResult<String> {
        let request = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens,
            messages: vec![message],
        };
        let response = self.send(&request).await?;

        response
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| LlmError::Format("reply contained no text block".to_string()))
    }

    async fn send(&self, request: &MessagesRequest) -> LlmResult<MessagesResponse> {
        let url = format!("{}/v1/messages", self.config.base_url);

        debug!(model = %request.model, max_tokens = request.max_tokens, "Sending Messages API request");

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", &self.config.api_version)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Messages API request failed");
                LlmError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Messages API returned error");
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: MessagesResponse = serde_json::from_str(&body)
            .map_err(|e| LlmError::Format(format!("failed to parse Messages API response: {}", e)))?;

        debug!(id = ?parsed.id, stop_reason = ?parsed.stop_reason, "Received Messages API response");
        Ok(parsed)
    }
}
