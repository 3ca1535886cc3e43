use crate::error::{AppError, AppResult};
use axum::http::Uri;

pub async fn fallback_handler(uri: Uri) -> AppResult<()> {
    tracing::debug!("No route for {}", uri);
    Err(AppError::NotFound(uri.path().to_string()))
}
