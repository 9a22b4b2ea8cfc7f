//! Client for the vision/language model service.
//!
//! One Anthropic Messages API client backs three operations:
//! - subject classification from a photo ([`LlmClient::classify_subject`])
//! - 5-scene storyboard scripting ([`LlmClient::generate_storyboard`])
//! - opening-scene video prompts ([`LlmClient::generate_opening_prompt`])

pub mod classifier;
pub mod client;
pub mod error;
pub mod opening;
pub mod storyboard;
pub mod types;

pub use client::{LlmClient, LlmClientConfig};
pub use error::{LlmError, LlmResult};
pub use storyboard::{parse_storyboard, strip_code_fence};
