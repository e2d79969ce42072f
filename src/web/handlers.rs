// Site request handlers.
// Page, JSON context, static script and liveness endpoints.

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use chrono::Utc;
use serde::Serialize;

use crate::content::PageContext;

use super::render;
use super::state::AppState;

/// Home page.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let context = state.page_context().await;
    Html(render::home_page(&context))
}

/// The home page data as JSON.
pub async fn page_context(State(state): State<AppState>) -> Json<PageContext> {
    Json(state.page_context().await)
}

/// Script behind the mobile navigation toggle.
pub const NAV_SCRIPT: &str = include_str!("../../static/js/nav.js");

pub async fn nav_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        NAV_SCRIPT,
    )
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
