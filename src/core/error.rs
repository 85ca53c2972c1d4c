

use thiserror::Error;

use crate::llm::embeddings::EmbeddingError;
use crate::llm::providers::LlmProviderError;


#[derive(Error, Debug)]
pub enum BraionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("LLM provider error: {0}")]
    LlmProvider(#[from] LlmProviderError),

    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<::config::ConfigError> for BraionError {
    fn from(err: ::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}


pub type Result<T> = std::result::Result<T, BraionError>;
