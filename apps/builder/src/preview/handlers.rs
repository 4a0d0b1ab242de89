//! Axum route handlers for the preview.

use axum::{extract::State, response::Html};

use crate::preview::{render_preview, render_preview_page};
use crate::state::AppState;

/// GET /api/v1/preview
///
/// Returns the preview fragment for the current record.
pub async fn handle_preview_fragment(State(state): State<AppState>) -> Html<String> {
    let record = state.store.lock().await.snapshot();
    Html(render_preview(&record))
}

/// GET /preview
///
/// Standalone preview page, rendered from the in-memory record.
pub async fn handle_preview_page(State(state): State<AppState>) -> Html<String> {
    let record = state.store.lock().await.snapshot();
    Html(render_preview_page(&record))
}
