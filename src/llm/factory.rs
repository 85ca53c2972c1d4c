

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use super::embeddings::EmbeddingGenerator;
use super::providers::base::LlmProvider;
use super::providers::huggingface::HuggingFaceProvider;
use super::providers::ollama::OllamaProvider;
use super::ranking::{EmbeddingNameRanker, LlmNameRanker, NameRanker};
use crate::core::config::BraionConfig;
use crate::core::error::{BraionError, Result};
use crate::DEFAULT_OLLAMA_URL;


pub struct LlmProviderFactory;

impl LlmProviderFactory {

    /// `Ok(None)` when the provider needs a credential that is not set.
    pub fn create(
        provider: &str,
        model: &str,
        api_key: Option<&str>,
        base_url: Option<&str>,
        temperature: f64,
        max_tokens: u32,
        timeout: Duration,
    ) -> Result<Option<Arc<dyn LlmProvider>>> {
        let api_key = api_key.map(str::trim).filter(|k| !k.is_empty());
        match provider {
            "huggingface" | "hf" => {
                let Some(key) = api_key else {
                    warn!("No API key for huggingface, ranking will return unranked names");
                    return Ok(None);
                };
                let provider: Arc<dyn LlmProvider> = Arc::new(
                    HuggingFaceProvider::new(key, model, base_url, temperature, max_tokens, timeout)
                        .map_err(|e| BraionError::Config(e.to_string()))?,
                );
                Ok(Some(provider))
            }
            "ollama" => {
                let provider: Arc<dyn LlmProvider> = Arc::new(
                    OllamaProvider::new(
                        base_url.unwrap_or(DEFAULT_OLLAMA_URL),
                        model,
                        temperature,
                        max_tokens,
                        timeout,
                    )
                    .map_err(|e| BraionError::Config(e.to_string()))?,
                );
                Ok(Some(provider))
            }
            other => Err(BraionError::Config(format!(
                "Unknown provider: {other}. Supported: huggingface, ollama"
            ))),
        }
    }


    pub fn from_config(config: &BraionConfig) -> Result<Option<Arc<dyn LlmProvider>>> {
        Self::create(
            &config.llm_provider,
            &config.llm_model,
            config.llm_api_key.as_deref(),
            config.llm_base_url.as_deref(),
            config.llm_temperature,
            config.llm_max_new_tokens,
            Duration::from_secs(config.timeout),
        )
    }
}


pub struct RankerFactory;

impl RankerFactory {

    pub fn from_config(config: &BraionConfig) -> Result<Arc<dyn NameRanker>> {
        let timeout = Duration::from_secs(config.timeout);
        match config.ranker.as_str() {
            "llm" => {
                let provider = LlmProviderFactory::from_config(config)?;
                let ranker = LlmNameRanker::new(provider)
                    .with_timeout(timeout)
                    .with_retries(config.max_retries, Duration::from_millis(config.retry_backoff_ms));
                let ranker: Arc<dyn NameRanker> = Arc::new(ranker);
                Ok(ranker)
            }
            "embedding" => {
                let embeddings = EmbeddingGenerator::new(
                    config.embedding_provider.clone(),
                    config.embedding_url.clone(),
                    config.embedding_model.clone(),
                    config.embedding_api_key.clone(),
                    timeout,
                    config.embedding_cache_size,
                )
                .map_err(|e| BraionError::Config(e.to_string()))?;
                let ranker: Arc<dyn NameRanker> =
                    Arc::new(EmbeddingNameRanker::new(Arc::new(embeddings)));
                Ok(ranker)
            }
            other => Err(BraionError::Config(format!(
                "Unknown ranker: {other}. Supported: llm, embedding"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeout() -> Duration {
        Duration::from_secs(5)
    }

    #[test]
    fn test_create_ollama_provider() {
        let provider =
            LlmProviderFactory::create("ollama", "llama3.2", None, None, 0.7, 300, timeout())
                .unwrap()
                .unwrap();
        assert_eq!(provider.provider_name(), "ollama");
    }

    #[test]
    fn test_create_huggingface_provider() {
        let provider = LlmProviderFactory::create(
            "huggingface",
            "meta-llama/Llama-3.2-3B-Instruct",
            Some("hf_test"),
            None,
            0.7,
            300,
            timeout(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(provider.provider_name(), "huggingface");
    }

    #[test]
    fn test_missing_credential_yields_none() {
        let provider =
            LlmProviderFactory::create("huggingface", "m", Some("  "), None, 0.7, 300, timeout())
                .unwrap();
        assert!(provider.is_none());
    }

    #[test]
    fn test_unknown_provider_is_config_error() {
        let result = LlmProviderFactory::create("unknown", "m", None, None, 0.5, 300, timeout());
        assert!(matches!(result, Err(BraionError::Config(msg)) if msg.contains("Unknown provider")));
    }

    #[test]
    fn test_ranker_from_config() {
        let mut config = BraionConfig::default();
        assert_eq!(RankerFactory::from_config(&config).unwrap().ranker_name(), "llm");

        config.ranker = "embedding".to_string();
        assert_eq!(RankerFactory::from_config(&config).unwrap().ranker_name(), "embedding");

        config.ranker = "oracle".to_string();
        assert!(RankerFactory::from_config(&config).is_err());
    }
}
