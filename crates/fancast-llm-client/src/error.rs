//! Language model client error types.

use thiserror::Error;

pub type LlmResult<T> = Result<T, LlmError>;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Missing configuration: {0}")]
    Config(String),

    #[error("Language model returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Unexpected language model output: {0}")]
    Format(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl LlmError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, LlmError::Network(e) if e.is_timeout())
    }
}
