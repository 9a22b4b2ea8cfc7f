//! Opening-scene video prompt generation.

use fancast_prompts::opening_scene_instruction;
use tracing::info;

use crate::client::LlmClient;
use crate::error::LlmResult;
use crate::types::{ContentBlock, Message};

const OPENING_MAX_TOKENS: u32 = 300;

impl LlmClient {
    /// Describe the opening scene of `show_name` as a short video prompt.
    /// The reply text is returned as-is.
    pub async fn generate_opening_prompt(&self, show_name: &str) -> LlmResult<String> {
        let instruction = opening_scene_instruction(show_name);
        let prompt = self
            .complete(OPENING_MAX_TOKENS, Message::user(vec![ContentBlock::text(instruction)]))
            .await?;

        info!(show_name, chars = prompt.chars().count(), "Generated opening scene prompt");
        Ok(prompt)
    }
}
