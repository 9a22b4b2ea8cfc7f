//! Request handlers.

pub mod health;
pub mod scene_image;
pub mod storyboard;
pub mod subject;
pub mod video_jobs;

pub use health::*;
pub use scene_image::*;
pub use storyboard::*;
pub use subject::*;
pub use video_jobs::*;

use validator::ValidationError;

/// Reject empty or whitespace-only text fields.
pub(crate) fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
