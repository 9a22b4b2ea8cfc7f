//! Face-preserving scene image generation.

use fancast_models::{truncate_chars, AspectRatio, Category, OutputFormat, PhotoRef};
use fancast_prompts::face_preservation_prompt;
use serde_json::Value;
use tracing::info;

use crate::client::FalClient;
use crate::error::{FalError, FalResult};
use crate::types::ImageEditRequest;

impl FalClient {
    /// Composite the reference subject into one storyboard scene.
    ///
    /// Returns the service payload unchanged (typically an `images` list).
    /// Identical inputs issue independent upstream calls; nothing is cached.
    pub async fn generate_scene_image(
        &self,
        photo: &PhotoRef,
        scene_prompt: &str,
        scene_number: u8,
        category: Category,
    ) -> FalResult<Value> {
        let prompt = face_preservation_prompt(scene_prompt, category);
        info!(scene_number, "Generating scene image, prompt: {}...", truncate_chars(&prompt, 150));

        let request = ImageEditRequest {
            prompt,
            image_urls: vec![photo.as_str().to_string()],
            aspect_ratio: AspectRatio::PORTRAIT,
            output_format: OutputFormat::Jpeg,
            num_images: 1,
        };

        let url = format!("{}/{}", self.config().run_url, self.config().image_model);
        let reply = self
            .post_json(&url, &request, Some(self.config().image_timeout))
            .await?;
        info!(scene_number, status = %reply.status, "Scene image response");

        let reply = reply.ensure_success()?;
        serde_json::from_str(&reply.body).map_err(|e| {
            FalError::Format(format!(
                "image payload is not JSON ({}): {}",
                e,
                truncate_chars(&reply.body, 200)
            ))
        })
    }
}
