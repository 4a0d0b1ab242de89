use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::generation::TextGenerator;
use crate::layout::PageLayout;
use crate::pending::PendingFlag;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one resume record. Never held across a provider call.
    pub store: Arc<Mutex<ResumeStore>>,
    pub generator: Arc<TextGenerator>,
    /// Raised while a PDF is being built.
    pub exporting: Arc<PendingFlag>,
    pub config: Config,
    pub page_layout: PageLayout,
}

impl AppState {
    pub fn new(generator: TextGenerator, config: Config, page_layout: PageLayout) -> Self {
        Self {
            store: Arc::new(Mutex::new(ResumeStore::new())),
            generator: Arc::new(generator),
            exporting: Arc::new(PendingFlag::new()),
            config,
            page_layout,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// False when no API key is configured; every generate route answers 502.
    pub generation_configured: bool,
    pub is_generating: bool,
    pub is_exporting: bool,
}

/// GET /api/v1/status
pub async fn handle_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        generation_configured: state.generator.is_configured(),
        is_generating: state.generator.is_generating(),
        is_exporting: state.exporting.is_active(),
    })
}
