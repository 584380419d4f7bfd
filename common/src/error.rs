use async_openai::error::OpenAIError;
use thiserror::Error;
use tokio::task::JoinError;

// Core internal errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Query is empty or contains only whitespace")]
    EmptyQuery,
    #[error("No documents found to rank against. Ensure documents are loaded correctly.")]
    EmptyCorpus,
    #[error("There are no valid documents to compare the query against")]
    InsufficientCorpus,
    #[error("Failed to load document {path}: {reason}")]
    DocumentLoad { path: String, reason: String },
    #[error("OpenAI error: {0}")]
    OpenAI(#[from] OpenAIError),
    #[error("Generation error: {0}")]
    Generation(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    Join(#[from] JoinError),
}
