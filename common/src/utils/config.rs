use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct AppConfig {
    pub openai_api_key: String,
    #[serde(default = "default_base_url")]
    pub openai_base_url: String,
    #[serde(default = "default_query_model")]
    pub query_model: String,
    #[serde(default = "default_documents_dir")]
    pub documents_dir: String,
    pub http_port: u16,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_query_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_documents_dir() -> String {
    "./files".to_string()
}

pub fn get_config() -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()?;

    config.try_deserialize()
}
