//! Storyboard script generation.

use fancast_models::{truncate_chars, Category, Scene, Storyboard, STORYBOARD_SCENE_COUNT};
use fancast_prompts::storyboard_instruction;
use tracing::{info, warn};

use crate::client::LlmClient;
use crate::error::{LlmError, LlmResult};
use crate::types::{ContentBlock, Message};

const STORYBOARD_MAX_TOKENS: u32 = 1500;
const FENCE: &str = "```";

impl LlmClient {
    /// Generate a 5-scene storyboard for `show_name`.
    ///
    /// Malformed model output is surfaced as [`LlmError::Format`]; it is
    /// never repaired or retried.
    pub async fn generate_storyboard(
        &self,
        show_name: &str,
        category: Category,
    ) -> LlmResult<Storyboard> {
        let instruction = storyboard_instruction(show_name, category);
        let reply = self
            .complete(STORYBOARD_MAX_TOKENS, Message::user(vec![ContentBlock::text(instruction)]))
            .await?;

        let cleaned = strip_code_fence(&reply);
        info!(show_name, category = %category, "Storyboard reply: {}", truncate_chars(cleaned, 500));

        let storyboard = parse_storyboard(cleaned)?;
        if !storyboard.is_sequentially_numbered() {
            let numbers: Vec<u8> = storyboard.scenes.iter().map(|s| s.scene_number).collect();
            warn!(?numbers, "Storyboard scenes are not numbered 1..=5 in order");
        }

        Ok(storyboard)
    }
}

/// Remove a surrounding markdown code fence, if present.
///
/// The opening fence line is dropped together with any language tag
/// (```` ```json ````); a closing fence is dropped only when the reply
/// opened with one.
pub fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    if !trimmed.starts_with(FENCE) {
        return trimmed;
    }

    let body = match trimmed.split_once('\n') {
        Some((_, rest)) => rest,
        None => &trimmed[FENCE.len()..],
    };
    let body = body.trim_end();
    body.strip_suffix(FENCE).unwrap_or(body).trim()
}

/// Parse a cleaned reply into exactly [`STORYBOARD_SCENE_COUNT`] scenes.
///
/// Only `scene_number` and `prompt` are kept; any other fields the model
/// adds to a scene object are dropped.
pub fn parse_storyboard(cleaned: &str) -> LlmResult<Storyboard> {
    let scenes: Vec<Scene> = serde_json::from_str(cleaned)
        .map_err(|e| LlmError::Format(format!("storyboard is not a JSON array of scenes: {}", e)))?;

    if scenes.len() != STORYBOARD_SCENE_COUNT {
        return Err(LlmError::Format(format!(
            "expected {} scenes, got {}",
            STORYBOARD_SCENE_COUNT,
            scenes.len()
        )));
    }

    Ok(Storyboard::new(scenes))
}
