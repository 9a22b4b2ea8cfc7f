//! Shared data models for the Fancast relay.
//!
//! This crate provides Serde-serializable types for:
//! - Subject categories and photo references
//! - Storyboard scenes
//! - Video generation jobs and their status reports
//! - Output media settings

pub mod category;
pub mod error;
pub mod media;
pub mod photo;
pub mod scene;
pub mod utils;
pub mod video_job;

// Re-export common types
pub use category::Category;
pub use error::{ModelError, ModelResult};
pub use media::{AspectRatio, OutputFormat};
pub use photo::PhotoRef;
pub use scene::{Scene, Storyboard, STORYBOARD_SCENE_COUNT};
pub use utils::truncate_chars;
pub use video_job::{JobHandle, JobResult, StatusReport, SubmittedJob, VideoJobState};
