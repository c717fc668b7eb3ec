//! JSON body extractor with API-shaped rejections.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// Like [`axum::Json`], but a malformed body is reported as
/// `400 {"error": ..., "code": "bad_request"}`.
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
