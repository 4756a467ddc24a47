use axum::{http::Uri, response::IntoResponse};
use tracing::debug;

use crate::core::error::ApiError;

pub async fn fallback_handler(uri: Uri) -> impl IntoResponse {
    debug!(path = %uri.path(), "No route matched");
    ApiError::NotFound
}
