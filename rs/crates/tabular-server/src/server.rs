use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, Path, Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::assets;
use crate::config::Config;
use crate::error::AppError;
use crate::mock::MockData;

// ── Shared state ────────────────────────────────────────────────────

pub struct AppState {
    pub mock: MockData,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
    pub allowed_extensions: Vec<String>,
}

impl AppState {
    pub fn from_config(cfg: &Config, mock: MockData) -> Self {
        Self {
            mock,
            templates_dir: cfg.templates_dir.clone(),
            static_dir: cfg.static_dir.clone(),
            allowed_extensions: cfg.normalized_extensions(),
        }
    }
}

// ── Router ──────────────────────────────────────────────────────────

pub fn router(state: Arc<AppState>, max_body: usize) -> Router {
    Router::new()
        .route("/health", get(health).fallback(not_found))
        // UI
        .route("/", get(index).fallback(not_found))
        .route("/static/*path", get(static_asset).fallback(not_found))
        // Mock data
        .route("/get_data", get(get_data).fallback(not_found))
        .route("/get_charts", get(get_charts).fallback(not_found))
        // Upload
        .route("/upload", post(upload).fallback(not_found))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Logs method, path, status and timing for every request.
async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();
    let resp = next.run(req).await;
    info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        ms = start.elapsed().as_secs_f64() * 1000.0,
        "request"
    );
    resp
}

// ── Handlers: UI ────────────────────────────────────────────────────

async fn health() -> &'static str {
    "ok"
}

async fn index(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let path = assets::resolve(&state.templates_dir, "index.html").await?;
    assets::serve_file(&path).await
}

async fn static_asset(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    let resolved = assets::resolve(&state.static_dir, &path).await.map_err(|e| {
        debug!(path = %path, error = %e, "static asset unavailable");
        e
    })?;
    assets::serve_file(&resolved).await
}

async fn not_found() -> AppError {
    AppError::NotFound("Not Found".into())
}

// ── Handlers: Mock data ─────────────────────────────────────────────

async fn get_data(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "data": state.mock.rows }))
}

async fn get_charts(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.mock.charts.clone())
}

// ── Handlers: Upload ────────────────────────────────────────────────

async fn upload(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let file = tabular_multipart::extract_file(content_type, &body).map_err(|e| {
        warn!(content_type, bytes = body.len(), error = %e, "upload rejected");
        AppError::from(e)
    })?;

    if !allowed_file(&file.filename, &state.allowed_extensions) {
        warn!(filename = %file.filename, "upload rejected: extension not allowed");
        return Err(AppError::BadRequest(format!(
            "unsupported file type: {}",
            file.filename
        )));
    }

    // Content is validated and dropped; nothing is persisted.
    info!(filename = %file.filename, bytes = file.len(), "upload parsed");

    let mock = &state.mock;
    Ok(Json(json!({
        "success": true,
        "message": "File uploaded successfully (mock response)",
        "stats": mock.stats,
        "filters": mock.filters,
        "columns": mock.columns,
    })))
}

/// Extension check against the configured list; an empty list allows all.
pub fn allowed_file(filename: &str, allowed: &[String]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    match filename.rsplit_once('.') {
        Some((_, ext)) => allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)),
        None => false,
    }
}
