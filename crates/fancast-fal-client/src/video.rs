//! Image-to-video queue jobs.
//!
//! Lifecycle: submit → poll status (IN_QUEUE / IN_PROGRESS) → fetch result
//! once COMPLETED or FAILED. The caller drives the loop; this module only
//! relays what the queue reports.

use fancast_models::{
    truncate_chars, AspectRatio, JobHandle, JobResult, StatusReport, SubmittedJob,
};
use serde_json::Value;
use tracing::{info, warn};

use crate::client::FalClient;
use crate::error::{FalError, FalResult};
use crate::types::VideoSubmitRequest;

/// Fixed clip length in seconds.
const VIDEO_DURATION_SECS: u32 = 5;
/// Characters of an unreadable body echoed back to callers.
const RAW_PREVIEW_CHARS: usize = 200;

impl FalClient {
    /// Submit an image-to-video job and return its handle.
    pub async fn submit_video_job(&self, image_url: &str, prompt: &str) -> FalResult<SubmittedJob> {
        let request = VideoSubmitRequest {
            prompt: prompt.to_string(),
            image_url: image_url.to_string(),
            duration: VIDEO_DURATION_SECS.to_string(),
            aspect_ratio: AspectRatio::PORTRAIT,
        };

        let url = format!("{}/{}", self.config().queue_url, self.config().video_model);
        let reply = self.post_json(&url, &request, None).await?;
        info!(
            status = %reply.status,
            "Video queue submission response: {}",
            truncate_chars(&reply.body, 500)
        );

        let reply = reply.ensure_success()?;
        let payload: Value = serde_json::from_str(&reply.body).map_err(|e| {
            FalError::Format(format!("submission payload is not JSON: {}", e))
        })?;

        let handle = payload
            .get("request_id")
            .and_then(Value::as_str)
            .ok_or_else(|| FalError::Format("submission payload has no request_id".to_string()))
            .and_then(|id| {
                JobHandle::parse(id).map_err(|e| FalError::Format(e.to_string()))
            })?;

        info!(handle = %handle, "Video job queued");
        Ok(SubmittedJob { handle, payload })
    }

    /// Read the current job status.
    ///
    /// An unreadable body is reported as a synthetic `IN_PROGRESS` status
    /// carrying a preview of the raw text, so polling never hard-fails on a
    /// job that is merely still running. Only transport errors are returned.
    pub async fn poll_status(&self, handle: &JobHandle) -> FalResult<StatusReport> {
        let url = format!(
            "{}/{}/requests/{}/status",
            self.config().queue_url,
            self.config().video_app,
            handle
        );
        let reply = self.get(&url).await?;
        info!(
            handle = %handle,
            status = %reply.status,
            "Video status response: {}",
            truncate_chars(&reply.body, 300)
        );

        match serde_json::from_str::<Value>(&reply.body) {
            Ok(payload) => Ok(StatusReport::Upstream(payload)),
            Err(_) => {
                warn!(handle = %handle, "Unreadable status body, reporting IN_PROGRESS");
                Ok(StatusReport::in_progress(truncate_chars(
                    &reply.body,
                    RAW_PREVIEW_CHARS,
                )))
            }
        }
    }

    /// Fetch the final job payload.
    ///
    /// Unlike [`FalClient::poll_status`], an unreadable body fails with
    /// [`FalError::InvalidResponse`].
    pub async fn fetch_result(&self, handle: &JobHandle) -> FalResult<JobResult> {
        let url = format!(
            "{}/{}/requests/{}",
            self.config().queue_url,
            self.config().video_app,
            handle
        );
        let reply = self.get(&url).await?;
        info!(
            handle = %handle,
            status = %reply.status,
            "Video result response: {}",
            truncate_chars(&reply.body, 500)
        );

        let payload: Value =
            serde_json::from_str(&reply.body).map_err(|_| FalError::InvalidResponse {
                raw: truncate_chars(&reply.body, RAW_PREVIEW_CHARS).to_string(),
            })?;

        Ok(JobResult {
            status: reply.status.as_u16(),
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use fancast_models::VideoJobState;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn handle(id: &str) -> JobHandle {
        JobHandle::parse(id).unwrap()
    }

    #[tokio::test]
    async fn test_submit_returns_handle_and_payload() {
        let server = MockServer::start().await;
        let payload = json!({
            "request_id": "abc123",
            "status_url": "https://queue.fal.run/fal-ai/kling-video/requests/abc123/status",
            "response_url": "https://queue.fal.run/fal-ai/kling-video/requests/abc123"
        });
        Mock::given(method("POST"))
            .and(path("/fal-ai/kling-video/v2.5-turbo/pro/image-to-video"))
            .and(header("Authorization", "Key test-key"))
            .and(body_json(json!({
                "prompt": "Ship takes off.",
                "image_url": "https://cdn.example/scene1.jpg",
                "duration": "5",
                "aspect_ratio": "9:16"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let job = test_client(&server)
            .submit_video_job("https://cdn.example/scene1.jpg", "Ship takes off.")
            .await
            .unwrap();
        assert_eq!(job.handle.as_str(), "abc123");
        assert_eq!(job.payload, payload);
    }

    #[tokio::test]
    async fn test_submit_error_relayed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_string("bad image_url"))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .submit_video_job("nope", "p")
            .await
            .unwrap_err();
        assert!(matches!(err, FalError::Upstream { status: 422, .. }));
    }

    #[tokio::test]
    async fn test_submit_without_request_id_is_format_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .submit_video_job("https://cdn.example/a.jpg", "p")
            .await
            .unwrap_err();
        assert!(matches!(err, FalError::Format(_)));
    }

    #[tokio::test]
    async fn test_poll_status_relays_json() {
        let server = MockServer::start().await;
        let payload = json!({"status": "IN_QUEUE", "queue_position": 2});
        Mock::given(method("GET"))
            .and(path("/fal-ai/kling-video/requests/abc123/status"))
            .respond_with(ResponseTemplate::new(202).set_body_json(payload.clone()))
            .mount(&server)
            .await;

        let report = test_client(&server).poll_status(&handle("abc123")).await.unwrap();
        assert_eq!(report, StatusReport::Upstream(payload));
        assert_eq!(report.state(), Some(VideoJobState::InQueue));
    }

    #[tokio::test]
    async fn test_poll_status_never_fails_on_unreadable_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fal-ai/kling-video/requests/abc123/status"))
            .respond_with(ResponseTemplate::new(200).set_body_string("pending..."))
            .mount(&server)
            .await;

        let report = test_client(&server).poll_status(&handle("abc123")).await.unwrap();
        assert_eq!(report, StatusReport::in_progress("pending..."));
    }

    #[tokio::test]
    async fn test_poll_status_truncates_raw_preview() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("x".repeat(1000)))
            .mount(&server)
            .await;

        let report = test_client(&server).poll_status(&handle("abc123")).await.unwrap();
        match report {
            StatusReport::Synthetic { status, raw } => {
                assert_eq!(status, VideoJobState::InProgress);
                assert_eq!(raw.len(), 200);
            }
            other => panic!("unexpected report: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_result_relays_json_with_status() {
        let server = MockServer::start().await;
        let payload = json!({"video": {"url": "https://cdn.example/out.mp4"}});
        Mock::given(method("GET"))
            .and(path("/fal-ai/kling-video/requests/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .mount(&server)
            .await;

        let result = test_client(&server).fetch_result(&handle("abc123")).await.unwrap();
        assert_eq!(result.status, 200);
        assert_eq!(result.payload, payload);
    }

    #[tokio::test]
    async fn test_fetch_result_unreadable_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fal-ai/kling-video/requests/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = test_client(&server).fetch_result(&handle("abc123")).await.unwrap_err();
        match err {
            FalError::InvalidResponse { raw } => assert_eq!(raw, "<html>oops</html>"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
