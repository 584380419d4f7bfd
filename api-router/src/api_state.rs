use std::sync::Arc;

use common::utils::config::AppConfig;
use retrieval_pipeline::ChatEngine;

#[derive(Clone)]
pub struct ApiState {
    pub engine: Arc<ChatEngine>,
    pub config: AppConfig,
}

impl ApiState {
    pub fn new(engine: Arc<ChatEngine>, config: AppConfig) -> Self {
        Self { engine, config }
    }
}
