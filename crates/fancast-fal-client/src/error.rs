//! Generation service client error types.

use thiserror::Error;

pub type FalResult<T> = Result<T, FalError>;

#[derive(Debug, Error)]
pub enum FalError {
    #[error("Missing configuration: {0}")]
    Config(String),

    #[error("Generation service returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Unexpected generation service payload: {0}")]
    Format(String),

    #[error("Invalid response: {raw}")]
    InvalidResponse { raw: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl FalError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FalError::Network(e) if e.is_timeout())
    }
}
