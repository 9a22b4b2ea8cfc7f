//! API error types.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fancast_fal_client::FalError;
use fancast_llm_client::LlmError;
use fancast_models::ModelError;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller payload failed structural checks.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Upstream answered with a non-success status; relayed as-is.
    #[error("Upstream service returned {status}: {body}")]
    UpstreamService { status: StatusCode, body: String },

    /// Upstream could not be reached or timed out.
    #[error("Upstream service unavailable: {message}")]
    UpstreamUnavailable { message: String, timed_out: bool },

    /// Upstream output could not be shaped into what we promise callers.
    #[error("Unexpected upstream output: {0}")]
    UpstreamFormat(String),

    /// Video result fetch returned an unreadable body.
    #[error("Invalid response")]
    InvalidUpstreamResponse { raw: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn upstream(status: u16, body: String) -> Self {
        Self::UpstreamService {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            body,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamService { status, .. } => *status,
            ApiError::UpstreamUnavailable { timed_out: true, .. } => StatusCode::GATEWAY_TIMEOUT,
            ApiError::UpstreamUnavailable { .. } | ApiError::InvalidUpstreamResponse { .. } => {
                StatusCode::BAD_GATEWAY
            }
            ApiError::UpstreamFormat(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ModelError> for ApiError {
    fn from(e: ModelError) -> Self {
        ApiError::MalformedInput(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedInput(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(e: validator::ValidationErrors) -> Self {
        ApiError::MalformedInput(e.to_string())
    }
}

impl From<LlmError> for ApiError {
    fn from(e: LlmError) -> Self {
        let timed_out = e.is_timeout();
        match e {
            LlmError::Upstream { status, body } => ApiError::upstream(status, body),
            LlmError::Format(msg) => ApiError::UpstreamFormat(msg),
            LlmError::Network(e) => ApiError::UpstreamUnavailable {
                message: e.to_string(),
                timed_out,
            },
            LlmError::Config(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<FalError> for ApiError {
    fn from(e: FalError) -> Self {
        let timed_out = e.is_timeout();
        match e {
            FalError::Upstream { status, body } => ApiError::upstream(status, body),
            FalError::Format(msg) => ApiError::UpstreamFormat(msg),
            FalError::InvalidResponse { raw } => ApiError::InvalidUpstreamResponse { raw },
            FalError::Network(e) => ApiError::UpstreamUnavailable {
                message: e.to_string(),
                timed_out,
            },
            FalError::Config(msg) => ApiError::Internal(msg),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<String>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            raw: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            // Relay JSON object bodies untouched; wrap anything else.
            ApiError::UpstreamService { body, .. } => {
                match serde_json::from_str::<Value>(&body) {
                    Ok(value @ Value::Object(_)) => (status, Json(value)).into_response(),
                    _ => (status, Json(ErrorResponse::new(body))).into_response(),
                }
            }
            ApiError::InvalidUpstreamResponse { raw } => {
                let body = ErrorResponse {
                    error: "Invalid response".to_string(),
                    raw: Some(raw),
                };
                (status, Json(body)).into_response()
            }
            ApiError::Internal(ref msg) => {
                error!("Internal error: {}", msg);
                // Don't expose internal error details in production
                let production = std::env::var("ENVIRONMENT")
                    .map(|v| v.eq_ignore_ascii_case("production"))
                    .unwrap_or(false);
                let detail = if production {
                    "An internal error occurred".to_string()
                } else {
                    self.to_string()
                };
                (status, Json(ErrorResponse::new(detail))).into_response()
            }
            other => (status, Json(ErrorResponse::new(other.to_string()))).into_response(),
        }
    }
}
