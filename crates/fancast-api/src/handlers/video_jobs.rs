//! Video job handlers.
//!
//! Submit once, poll status until terminal, then fetch the result. The
//! queue service owns the job state; every call here re-reads it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fancast_models::{JobHandle, StatusReport};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use validator::Validate;

use super::non_blank;
use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::metrics;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitVideoJobRequest {
    /// URL of the generated scene image
    #[validate(custom(function = "non_blank"))]
    pub image_url: String,
    #[validate(custom(function = "non_blank"))]
    pub prompt: String,
}

/// Submit an image-to-video job; returns the queue's submission payload.
pub async fn submit_video_job(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SubmitVideoJobRequest>,
) -> ApiResult<Json<Value>> {
    request.validate()?;

    let result = state
        .fal
        .submit_video_job(&request.image_url, &request.prompt)
        .await;
    metrics::record_upstream_call("fal", "submit_video_job", result.is_ok());

    Ok(Json(result?.payload))
}

/// Poll job status.
///
/// Never fails because of an unreadable upstream body; see
/// [`StatusReport::Synthetic`].
pub async fn get_video_job_status(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> ApiResult<Json<StatusReport>> {
    let handle = JobHandle::parse(handle)?;

    let result = state.fal.poll_status(&handle).await;
    metrics::record_upstream_call("fal", "poll_status", result.is_ok());

    let report = result?;
    debug!(handle = %handle, state = ?report.state(), synthetic = report.is_synthetic(), "Video job status");
    Ok(Json(report))
}

/// Fetch the job result with the queue's own status code.
pub async fn get_video_job_result(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let handle = JobHandle::parse(handle)?;

    let result = state.fal.fetch_result(&handle).await;
    metrics::record_upstream_call("fal", "fetch_result", result.is_ok());

    let result = result?;
    let status = StatusCode::from_u16(result.status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((status, Json(result.payload)))
}
