use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::errors::AppError;
use crate::export::{export_pdf, ExportError};
use crate::state::AppState;

/// POST /api/v1/export
///
/// Builds the PDF off the async runtime and returns it as an attachment.
pub async fn handle_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let Some(_exporting) = state.exporting.try_begin() else {
        return Err(AppError::Conflict(
            "An export is already in progress".to_string(),
        ));
    };

    let record = state.store.lock().await.snapshot();
    let layout = state.page_layout.clone();

    let bytes = tokio::task::spawn_blocking(move || export_pdf(&record, &layout))
        .await
        .map_err(|e| ExportError::Task(e.to_string()))
        .and_then(|result| result)
        .map_err(|e| {
            error!("Error exporting resume: {e}");
            AppError::Export(e.to_string())
        })?;

    info!("Exported resume: {} bytes", bytes.len());
    let disposition = format!("attachment; filename=\"{}\"", state.config.export_filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
