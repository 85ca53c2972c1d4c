

use std::path::PathBuf;

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

use super::error::{BraionError, Result};
use crate::{
    DEFAULT_CACHE_SIZE, DEFAULT_EMBEDDING_MODEL, DEFAULT_LLM_MODEL, DEFAULT_NAME_COUNT,
    DEFAULT_OLLAMA_URL,
};


#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BraionConfig {

    pub llm_provider: String,
    pub llm_model: String,
    #[serde(skip_serializing)]
    pub llm_api_key: Option<String>,
    pub llm_base_url: Option<String>,
    pub llm_temperature: f64,
    pub llm_max_new_tokens: u32,


    pub ranker: String,
    pub use_llm: bool,
    pub timeout: u64,
    pub max_retries: u32,
    pub retry_backoff_ms: u64,


    pub embedding_provider: String,
    pub embedding_model: String,
    pub embedding_url: String,
    #[serde(skip_serializing)]
    pub embedding_api_key: Option<String>,
    pub embedding_cache_size: usize,


    pub name_count: usize,
    pub thesaurus_path: Option<PathBuf>,
}

impl BraionConfig {

    pub fn new() -> Self {
        Self {
            llm_provider: "huggingface".to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_api_key: None,
            llm_base_url: None,
            llm_temperature: 0.7,
            llm_max_new_tokens: 300,

            ranker: "llm".to_string(),
            use_llm: false,
            timeout: 15,
            max_retries: 1,
            retry_backoff_ms: 500,

            embedding_provider: "ollama".to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_url: DEFAULT_OLLAMA_URL.to_string(),
            embedding_api_key: None,
            embedding_cache_size: DEFAULT_CACHE_SIZE,

            name_count: DEFAULT_NAME_COUNT,
            thesaurus_path: None,
        }
    }

    /// Layers an optional file named by `BRAION_CONFIG` and `BRAION_*`
    /// variables over the defaults. `HF_API_KEY` is honoured when
    /// `BRAION_LLM_API_KEY` is absent.
    pub fn from_env() -> Result<Self> {
        let mut builder = Config::builder();
        if let Ok(path) = std::env::var("BRAION_CONFIG") {
            builder = builder.add_source(File::with_name(&path).required(true));
        }
        let builder = builder.add_source(Environment::with_prefix("BRAION").try_parsing(true));

        let mut config = Self::from_builder(builder)?;
        config.fill_llm_api_key(std::env::var("HF_API_KEY").ok());
        config.validate()?;
        Ok(config)
    }

    /// Uses `fallback` only when no key was configured.
    pub fn fill_llm_api_key(&mut self, fallback: Option<String>) {
        if self.llm_api_key.is_none() {
            self.llm_api_key = fallback;
        }
    }


    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config = builder.build()?.try_deserialize::<Self>()?;
        Ok(config)
    }


    pub fn validate(&self) -> Result<()> {
        if self.name_count == 0 {
            return Err(BraionError::Config("name_count must be positive".to_string()));
        }
        if self.timeout == 0 {
            return Err(BraionError::Config("timeout must be positive".to_string()));
        }
        if let Some(url) = &self.llm_base_url {
            url::Url::parse(url)
                .map_err(|e| BraionError::Config(format!("invalid llm_base_url {url}: {e}")))?;
        }
        url::Url::parse(&self.embedding_url).map_err(|e| {
            BraionError::Config(format!("invalid embedding_url {}: {e}", self.embedding_url))
        })?;
        Ok(())
    }


    pub fn has_llm_credential(&self) -> bool {
        self.llm_api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl Default for BraionConfig {
    fn default() -> Self {
        Self::new()
    }
}
