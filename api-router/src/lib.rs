use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};

use api_state::ApiState;
use routes::{chat::chat, corpus::reload_corpus, liveness::live, readiness::ready};

pub mod api_state;
pub mod error;
mod routes;

pub use routes::chat::DEFAULT_SESSION_ID;

/// Router for API functionality, version 1
pub fn api_routes_v1<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ApiState: FromRef<S>,
{
    // Probes for k8s/systemd; the chat and reload operations carry the
    // conversational contract.
    Router::new()
        .route("/ready", get(ready))
        .route("/live", get(live))
        .route("/chat", post(chat))
        .route("/corpus/reload", post(reload_corpus))
}
