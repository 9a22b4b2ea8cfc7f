//! Generation service request types.
//!
//! Responses are relayed to callers as raw JSON, so only requests are typed.

use fancast_models::{AspectRatio, OutputFormat};
use serde::Serialize;

/// Image-edit request: one reference image plus an instruction.
#[derive(Debug, Clone, Serialize)]
pub struct ImageEditRequest {
    pub prompt: String,
    pub image_urls: Vec<String>,
    pub aspect_ratio: AspectRatio,
    pub output_format: OutputFormat,
    pub num_images: u32,
}

/// Image-to-video queue submission.
#[derive(Debug, Clone, Serialize)]
pub struct VideoSubmitRequest {
    pub prompt: String,
    pub image_url: String,
    /// Clip length in seconds, sent as a string
    pub duration: String,
    pub aspect_ratio: AspectRatio,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_video_submit_wire_shape() {
        let request = VideoSubmitRequest {
            prompt: "p".to_string(),
            image_url: "https://cdn/x.jpg".to_string(),
            duration: "5".to_string(),
            aspect_ratio: AspectRatio::PORTRAIT,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"prompt": "p", "image_url": "https://cdn/x.jpg", "duration": "5", "aspect_ratio": "9:16"})
        );
    }
}
