//! Model validation errors.

use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Malformed photo reference: {0}")]
    MalformedPhoto(String),

    #[error("Invalid job handle: {0}")]
    InvalidJobHandle(String),
}
