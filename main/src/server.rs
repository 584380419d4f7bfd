use std::sync::Arc;

use api_router::{api_routes_v1, api_state::ApiState};
use axum::Router;
use common::{
    storage::{corpus::CorpusIndex, session::SessionStore},
    utils::{config::get_config, generation::GenerationProvider},
};
use retrieval_pipeline::ChatEngine;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    // Get config
    let config = get_config()?;

    // Shared stores, constructed once and handed to the engine
    let corpus = Arc::new(CorpusIndex::new());
    let sessions = Arc::new(SessionStore::new());

    let openai_client = Arc::new(async_openai::Client::with_config(
        async_openai::config::OpenAIConfig::new()
            .with_api_key(&config.openai_api_key)
            .with_api_base(&config.openai_base_url),
    ));
    let generation = GenerationProvider::new_openai(openai_client, config.query_model.clone());
    info!(
        generation_backend = generation.backend_label(),
        model = %config.query_model,
        "Generation provider initialized"
    );

    // Initial corpus load; the reload endpoint can recover from a failure
    match ingestion_pipeline::load_corpus(&config, &corpus).await {
        Ok(report) => info!(
            loaded = report.files.len(),
            skipped = report.skipped.len(),
            "Initial corpus load complete"
        ),
        Err(err) => warn!(error = %err, "Initial corpus load failed"),
    }

    let engine = Arc::new(ChatEngine::new(corpus, sessions, generation));
    let api_state = ApiState::new(engine, config.clone());

    // Create Axum router; CORS is open for the whole app
    let app = Router::new()
        .nest("/api/v1", api_routes_v1())
        .layer(CorsLayer::permissive())
        .with_state(api_state);

    info!("Starting server listening on 0.0.0.0:{}", config.http_port);
    let serve_address = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(serve_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
