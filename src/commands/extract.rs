use axum::extract::{FromRequest, FromRequestParts};

use crate::shared::errors::AppError;

// Extractor rejections surface as `AppError::ValidationError` so malformed
// requests get the same {"type", "message"} body as every other failure.

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
