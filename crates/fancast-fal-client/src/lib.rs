//! Client for the image/video generation service.
//!
//! Two surfaces of the same provider are used:
//! - the synchronous run endpoint for face-preserving scene stills
//! - the asynchronous queue for image-to-video jobs (submit, poll, fetch)
//!
//! The queue owns all job state. This client only relays it.

pub mod client;
pub mod error;
pub mod image;
pub mod types;
pub mod video;

pub use client::{FalClient, FalClientConfig};
pub use error::{FalError, FalResult};
