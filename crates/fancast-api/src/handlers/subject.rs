//! Subject classification handler.

use axum::extract::State;
use axum::Json;
use fancast_models::{Category, PhotoRef};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::metrics;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct ClassifySubjectRequest {
    /// Photo as a data URI
    #[validate(length(min = 1))]
    pub photo: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifySubjectResponse {
    pub category: Category,
}

/// Classify the subject of the uploaded photo.
pub async fn classify_subject(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ClassifySubjectRequest>,
) -> ApiResult<Json<ClassifySubjectResponse>> {
    request.validate()?;
    let photo = PhotoRef::parse(request.photo)?;

    let result = state.llm.classify_subject(&photo).await;
    metrics::record_upstream_call("llm", "classify_subject", result.is_ok());

    Ok(Json(ClassifySubjectResponse { category: result? }))
}
