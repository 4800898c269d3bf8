//! Request extractors

use axum::extract::FromRequest;

use crate::AppError;

/// `Json<T>` whose rejections (bad syntax, unknown variants, missing
/// fields, wrong content type) come back as `AppError` JSON bodies
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
