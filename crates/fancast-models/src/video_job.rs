//! Video generation job types.
//!
//! Job state lives entirely in the remote queue service. These types only
//! describe what the relay reads back from it; nothing here is persisted.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{ModelError, ModelResult};

const MAX_HANDLE_LEN: usize = 128;

/// Opaque request identifier issued by the video queue service.
///
/// Restricted to `[A-Za-z0-9_-]` so it can be embedded in an upstream
/// URL path as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobHandle(String);

impl JobHandle {
    pub fn parse(handle: impl Into<String>) -> ModelResult<Self> {
        let handle = handle.into();
        if handle.is_empty() || handle.len() > MAX_HANDLE_LEN {
            return Err(ModelError::InvalidJobHandle(format!(
                "length must be 1..={} characters",
                MAX_HANDLE_LEN
            )));
        }
        if !handle
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ModelError::InvalidJobHandle(format!(
                "'{}' contains unsupported characters",
                handle
            )));
        }
        Ok(Self(handle))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remote job lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoJobState {
    #[serde(alias = "QUEUED")]
    InQueue,
    InProgress,
    Completed,
    #[serde(alias = "ERROR")]
    Failed,
}

impl VideoJobState {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoJobState::InQueue => "IN_QUEUE",
            VideoJobState::InProgress => "IN_PROGRESS",
            VideoJobState::Completed => "COMPLETED",
            VideoJobState::Failed => "FAILED",
        }
    }

    /// Check if this is a terminal state (no more updates expected).
    pub fn is_terminal(&self) -> bool {
        matches!(self, VideoJobState::Completed | VideoJobState::Failed)
    }

    /// Read the `status` field of an upstream payload, if recognizable.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        payload
            .get("status")
            .cloned()
            .and_then(|status| serde_json::from_value(status).ok())
    }
}

impl fmt::Display for VideoJobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a status poll.
///
/// `Synthetic` stands in for an unreadable upstream body so that client
/// poll loops keep running.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatusReport {
    Upstream(Value),
    Synthetic { status: VideoJobState, raw: String },
}

impl StatusReport {
    pub fn in_progress(raw: impl Into<String>) -> Self {
        StatusReport::Synthetic {
            status: VideoJobState::InProgress,
            raw: raw.into(),
        }
    }

    pub fn state(&self) -> Option<VideoJobState> {
        match self {
            StatusReport::Upstream(payload) => VideoJobState::from_payload(payload),
            StatusReport::Synthetic { status, .. } => Some(*status),
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, StatusReport::Synthetic { .. })
    }
}

/// A job accepted by the queue service.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedJob {
    pub handle: JobHandle,
    /// Submission payload exactly as returned upstream
    pub payload: Value,
}

/// Final payload fetched for a job.
#[derive(Debug, Clone, PartialEq)]
pub struct JobResult {
    /// HTTP status code the queue service answered with
    pub status: u16,
    pub payload: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_handle_validation() {
        assert!(JobHandle::parse("abc123").is_ok());
        assert!(JobHandle::parse("764cabcf-b745-4b3e-ae38-1200304cf45b").is_ok());
        assert!(JobHandle::parse("").is_err());
        assert!(JobHandle::parse("../secrets").is_err());
        assert!(JobHandle::parse("abc?x=1").is_err());
        assert!(JobHandle::parse("a".repeat(129)).is_err());
    }

    #[test]
    fn test_state_from_payload() {
        let payload = json!({"status": "IN_QUEUE", "queue_position": 3});
        assert_eq!(VideoJobState::from_payload(&payload), Some(VideoJobState::InQueue));
        assert_eq!(
            VideoJobState::from_payload(&json!({"status": "COMPLETED"})),
            Some(VideoJobState::Completed)
        );
        assert_eq!(
            VideoJobState::from_payload(&json!({"status": "QUEUED"})),
            Some(VideoJobState::InQueue)
        );
        assert_eq!(VideoJobState::from_payload(&json!({"status": "WAT"})), None);
        assert_eq!(VideoJobState::from_payload(&json!({})), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(VideoJobState::Completed.is_terminal());
        assert!(VideoJobState::Failed.is_terminal());
        assert!(!VideoJobState::InQueue.is_terminal());
        assert!(!VideoJobState::InProgress.is_terminal());
    }

    #[test]
    fn test_synthetic_report_shape() {
        let report = StatusReport::in_progress("pending...");
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"status": "IN_PROGRESS", "raw": "pending..."})
        );
        assert_eq!(report.state(), Some(VideoJobState::InProgress));
    }

    #[test]
    fn test_upstream_report_is_verbatim() {
        let payload = json!({"status": "IN_PROGRESS", "logs": null, "extra": 1});
        let report = StatusReport::Upstream(payload.clone());
        assert_eq!(serde_json::to_value(&report).unwrap(), payload);
        assert!(!report.is_synthetic());
    }
}
