//! Request extractors.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON request body whose rejections are reported as [`ApiError::MalformedInput`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
