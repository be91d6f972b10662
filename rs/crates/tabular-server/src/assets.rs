//! Files served from disk: the UI entry page and everything under /static/.

use std::path::{Path, PathBuf};

use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Resolve `rel` under `base`, refusing paths that escape it.
pub async fn resolve(base: &Path, rel: &str) -> Result<PathBuf, AppError> {
    let base = tokio::fs::canonicalize(base).await?;
    let target = tokio::fs::canonicalize(base.join(rel.trim_start_matches('/'))).await?;
    if !target.starts_with(&base) {
        return Err(AppError::Forbidden);
    }
    if !tokio::fs::metadata(&target).await?.is_file() {
        return Err(AppError::NotFound(rel.to_string()));
    }
    Ok(target)
}

/// Read a resolved file into a response with a guessed content type.
pub async fn serve_file(path: &Path) -> Result<Response, AppError> {
    let data = tokio::fs::read(path).await?;
    let content_type = guess_content_type(&path.to_string_lossy());
    Ok(([(header::CONTENT_TYPE, content_type)], data).into_response())
}

pub fn guess_content_type(path: &str) -> &'static str {
    if path.ends_with(".html") { "text/html; charset=utf-8" }
    else if path.ends_with(".js") { "application/javascript" }
    else if path.ends_with(".css") { "text/css" }
    else if path.ends_with(".json") { "application/json" }
    else if path.ends_with(".png") { "image/png" }
    else if path.ends_with(".svg") { "image/svg+xml" }
    else if path.ends_with(".ico") { "image/x-icon" }
    else if path.ends_with(".woff2") { "font/woff2" }
    else if path.ends_with(".woff") { "font/woff" }
    else { "application/octet-stream" }
}
