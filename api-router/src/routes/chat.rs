use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use tracing::info;

use crate::{api_state::ApiState, error::ApiError};

/// Session used when the caller does not supply one.
pub const DEFAULT_SESSION_ID: &str = "default";

#[derive(Debug, Deserialize)]
pub struct ChatParams {
    pub query: Option<String>,
    pub session_id: Option<String>,
}

/// Answers a query against the loaded corpus.
///
/// Missing or empty queries are rejected here, before the engine runs.
/// Engine-level failures (empty corpus, generation trouble) still produce a
/// 200 with the failure described in the response text.
pub async fn chat(
    State(state): State<ApiState>,
    Json(params): Json<ChatParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = params
        .query
        .filter(|query| !query.is_empty())
        .ok_or_else(|| ApiError::ValidationError("Query is required".to_string()))?;
    let session_id = params
        .session_id
        .unwrap_or_else(|| DEFAULT_SESSION_ID.to_string());

    info!(
        session_id = %session_id,
        query_bytes = query.len(),
        "Received chat request"
    );

    let reply = state.engine.respond(&query, &session_id).await;

    Ok(Json(reply))
}
