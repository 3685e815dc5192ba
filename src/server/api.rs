//! REST API handlers
//!
//! `GET /api/diary/{username}` answers with the JSON array of entries (possibly
//! empty) or an `{"error": ...}` payload.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::crawler::PageFetcher;
use crate::utils::sanitize_username;

use super::AppState;

/// Error payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// Create the API router
pub fn create_router<F>(state: AppState<F>) -> Router
where
    F: PageFetcher + 'static,
{
    Router::new()
        .route("/health", get(health_check::<F>))
        .route("/api/diary/{username}", get(get_diary::<F>))
        .with_state(state)
}

async fn health_check<F>(State(state): State<AppState<F>>) -> impl IntoResponse
where
    F: PageFetcher + 'static,
{
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// Crawl and return a user's diary
async fn get_diary<F>(State(state): State<AppState<F>>, Path(username): Path<String>) -> Response
where
    F: PageFetcher + 'static,
{
    let username = sanitize_username(&username);
    if username.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Please enter a username")),
        )
            .into_response();
    }

    match state.service.get_diary(&username).await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(e.to_string())),
        )
            .into_response(),
    }
}
