//! Scene image handler.

use axum::extract::State;
use axum::Json;
use fancast_models::{Category, PhotoRef};
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use super::non_blank;
use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::metrics;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateSceneImageRequest {
    /// Reference photo as a data URI
    #[validate(length(min = 1))]
    pub photo: String,
    /// Scene prompt from the storyboard
    #[validate(custom(function = "non_blank"))]
    pub prompt: String,
    #[serde(default = "default_scene_number")]
    #[validate(range(min = 1, max = 5))]
    pub scene_number: u8,
    #[serde(default)]
    pub category: Category,
}

fn default_scene_number() -> u8 {
    1
}

/// Generate one storyboard scene featuring the reference subject.
///
/// The image service payload is returned unchanged.
pub async fn generate_scene_image(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateSceneImageRequest>,
) -> ApiResult<Json<Value>> {
    request.validate()?;
    let photo = PhotoRef::parse(request.photo)?;

    let result = state
        .fal
        .generate_scene_image(&photo, &request.prompt, request.scene_number, request.category)
        .await;
    metrics::record_upstream_call("fal", "generate_scene_image", result.is_ok());

    Ok(Json(result?))
}
