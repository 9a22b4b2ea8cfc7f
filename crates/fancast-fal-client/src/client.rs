//! Generation service HTTP client.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use tracing::{debug, error};

use crate::error::{FalError, FalResult};

pub const DEFAULT_RUN_URL: &str = "https://fal.run";
pub const DEFAULT_QUEUE_URL: &str = "https://queue.fal.run";
pub const DEFAULT_IMAGE_MODEL: &str = "fal-ai/nano-banana/edit";
pub const DEFAULT_VIDEO_MODEL: &str = "fal-ai/kling-video/v2.5-turbo/pro/image-to-video";
pub const DEFAULT_VIDEO_APP: &str = "fal-ai/kling-video";

/// Configuration for the generation service client.
#[derive(Clone)]
pub struct FalClientConfig {
    /// API key sent as `Authorization: Key <key>`
    pub api_key: String,
    /// Base URL of the synchronous run endpoint
    pub run_url: String,
    /// Base URL of the queue endpoint
    pub queue_url: String,
    /// Image-edit model path
    pub image_model: String,
    /// Image-to-video model path used for submission
    pub video_model: String,
    /// App path used for status and result lookups
    pub video_app: String,
    /// Timeout for image generation calls
    pub image_timeout: Duration,
}

impl fmt::Debug for FalClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FalClientConfig")
            .field("api_key", &"<redacted>")
            .field("run_url", &self.run_url)
            .field("queue_url", &self.queue_url)
            .field("image_model", &self.image_model)
            .field("video_model", &self.video_model)
            .field("video_app", &self.video_app)
            .field("image_timeout", &self.image_timeout)
            .finish()
    }
}

impl FalClientConfig {
    /// Config with default endpoints and models.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            run_url: DEFAULT_RUN_URL.to_string(),
            queue_url: DEFAULT_QUEUE_URL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            video_model: DEFAULT_VIDEO_MODEL.to_string(),
            video_app: DEFAULT_VIDEO_APP.to_string(),
            image_timeout: Duration::from_secs(120), // 2 minutes for image generation
        }
    }

    /// Create config from environment variables.
    ///
    /// `FAL_KEY` is required.
    pub fn from_env() -> FalResult<Self> {
        let api_key = std::env::var("FAL_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| FalError::Config("FAL_KEY not set".to_string()))?;

        let env_or = |name: &str, default: String| {
            std::env::var(name)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(default)
        };

        let defaults = Self::new(api_key);
        Ok(Self {
            run_url: env_or("FAL_RUN_URL", defaults.run_url.clone()),
            queue_url: env_or("FAL_QUEUE_URL", defaults.queue_url.clone()),
            image_model: env_or("FAL_IMAGE_MODEL", defaults.image_model.clone()),
            video_model: env_or("FAL_VIDEO_MODEL", defaults.video_model.clone()),
            video_app: env_or("FAL_VIDEO_APP", defaults.video_app.clone()),
            image_timeout: std::env::var("FAL_IMAGE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.image_timeout),
            ..defaults
        })
    }
}

/// Raw upstream reply: status code plus body text.
#[derive(Debug, Clone)]
pub(crate) struct RawReply {
    pub status: StatusCode,
    pub body: String,
}

/// Client for the image/video generation service.
#[derive(Clone)]
pub struct FalClient {
    http: Client,
    config: FalClientConfig,
}

impl FalClient {
    /// Create a new client.
    pub fn new(config: FalClientConfig) -> FalResult<Self> {
        let http = Client::builder().build().map_err(FalError::Network)?;
        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> FalResult<Self> {
        Self::new(FalClientConfig::from_env()?)
    }

    pub fn config(&self) -> &FalClientConfig {
        &self.config
    }

    /// POST a JSON body and return the raw reply.
    pub(crate) async fn post_json<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        timeout: Option<Duration>,
    ) -> FalResult<RawReply> {
        let mut request = self.authorized(self.http.post(url)).json(body);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }
        self.execute(url, request).await
    }

    /// GET a URL and return the raw reply.
    pub(crate) async fn get(&self, url: &str) -> FalResult<RawReply> {
        let request = self.authorized(self.http.get(url));
        self.execute(url, request).await
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("Authorization", format!("Key {}", self.config.api_key))
    }

    async fn execute(&self, url: &str, request: RequestBuilder) -> FalResult<RawReply> {
        debug!(url, "Sending generation service request");

        let response = request.send().await.map_err(|e| {
            error!(url, error = %e, "Generation service request failed");
            FalError::Network(e)
        })?;

        let status = response.status();
        let body = response.text().await?;
        Ok(RawReply { status, body })
    }
}

impl RawReply {
    /// Fail with [`FalError::Upstream`] on a non-success status.
    pub(crate) fn ensure_success(self) -> FalResult<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(FalError::Upstream {
                status: self.status.as_u16(),
                body: self.body,
            })
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use wiremock::MockServer;

    pub(crate) fn test_client(server: &MockServer) -> FalClient {
        let mut config = FalClientConfig::new("test-key");
        config.run_url = server.uri();
        config.queue_url = server.uri();
        FalClient::new(config).unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = FalClientConfig::new("k");
        assert_eq!(config.run_url, "https://fal.run");
        assert_eq!(config.queue_url, "https://queue.fal.run");
        assert_eq!(config.image_timeout, Duration::from_secs(120));
        assert!(format!("{:?}", config).contains("<redacted>"));
    }

    #[test]
    fn test_ensure_success() {
        let ok = RawReply {
            status: StatusCode::OK,
            body: "{}".to_string(),
        };
        assert!(ok.ensure_success().is_ok());

        let limited = RawReply {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: r#"{"error":"rate limited"}"#.to_string(),
        };
        match limited.ensure_success() {
            Err(FalError::Upstream { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body, r#"{"error":"rate limited"}"#);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
