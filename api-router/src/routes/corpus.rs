use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use tracing::info;

use crate::{api_state::ApiState, error::ApiError};

/// Rescans the document directory and replaces the corpus snapshot.
pub async fn reload_corpus(State(state): State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    let report = ingestion_pipeline::load_corpus(&state.config, state.engine.corpus()).await?;

    info!(
        loaded = report.files.len(),
        skipped = report.skipped.len(),
        "Corpus reload finished"
    );

    Ok(Json(json!({
        "files": report.files,
        "skipped": report.skipped,
        "message": "All files loaded successfully!"
    })))
}
