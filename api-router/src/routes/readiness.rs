use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::api_state::ApiState;

/// Readiness probe: reports the size of the current corpus snapshot. An
/// empty corpus is a valid (pre-reload) state, so this never returns 503.
pub async fn ready(State(state): State<ApiState>) -> impl IntoResponse {
    let documents = state.engine.corpus().len();

    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "checks": { "corpus": { "documents": documents } }
        })),
    )
}
