//! Axum HTTP relay.
//!
//! This crate provides:
//! - Subject classification, storyboard and opening-prompt endpoints
//! - Scene image generation and video job submit/status/result endpoints
//! - CORS, rate limiting and security headers
//! - Prometheus metrics

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
