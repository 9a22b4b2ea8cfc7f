//! Storyboard and opening-prompt handlers.

use axum::extract::State;
use axum::Json;
use fancast_models::{Category, Storyboard};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use super::non_blank;
use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::metrics;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateStoryboardRequest {
    #[validate(custom(function = "non_blank"))]
    pub show_name: String,
    #[serde(default)]
    pub category: Category,
}

/// Generate the 5-scene storyboard for a show.
pub async fn generate_storyboard(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateStoryboardRequest>,
) -> ApiResult<Json<Storyboard>> {
    request.validate()?;
    info!(show_name = %request.show_name, category = %request.category, "Generating storyboard");

    let result = state
        .llm
        .generate_storyboard(&request.show_name, request.category)
        .await;
    metrics::record_upstream_call("llm", "generate_storyboard", result.is_ok());

    Ok(Json(result?))
}

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateOpeningPromptRequest {
    #[validate(custom(function = "non_blank"))]
    pub show_name: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateOpeningPromptResponse {
    pub prompt: String,
}

/// Describe the show's opening scene as a video prompt.
pub async fn generate_opening_prompt(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateOpeningPromptRequest>,
) -> ApiResult<Json<GenerateOpeningPromptResponse>> {
    request.validate()?;

    let result = state.llm.generate_opening_prompt(&request.show_name).await;
    metrics::record_upstream_call("llm", "generate_opening_prompt", result.is_ok());

    Ok(Json(GenerateOpeningPromptResponse { prompt: result? }))
}
