

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::base::{passthrough, NameRanker, RankingContext, RankingError};
use super::prompt::{build_ranking_prompt, parse_ranked_names, SYSTEM_PROMPT};
use crate::llm::providers::base::LlmProvider;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
const DEFAULT_BACKOFF: Duration = Duration::from_millis(500);

/// Re-ranks candidates with a text-generation model. Without a provider it
/// passes candidates through unchanged.
pub struct LlmNameRanker {
    llm: Option<Arc<dyn LlmProvider>>,
    timeout: Duration,
    max_retries: u32,
    retry_backoff: Duration,
}

impl LlmNameRanker {

    pub fn new(llm: Option<Arc<dyn LlmProvider>>) -> Self {
        match &llm {
            Some(provider) => info!(
                "LlmNameRanker initialized: provider={}, model={}",
                provider.provider_name(),
                provider.model_name()
            ),
            None => warn!("LlmNameRanker has no provider configured, ranking is a pass-through"),
        }

        Self {
            llm,
            timeout: DEFAULT_TIMEOUT,
            max_retries: 1,
            retry_backoff: DEFAULT_BACKOFF,
        }
    }


    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }


    pub fn with_retries(mut self, max_retries: u32, backoff: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_backoff = backoff;
        self
    }


    pub fn is_passthrough(&self) -> bool {
        self.llm.is_none()
    }

    async fn generate_with_retry(
        &self,
        llm: &dyn LlmProvider,
        prompt: &str,
    ) -> Result<String, RankingError> {
        let mut attempt: u32 = 0;
        loop {
            let error = match tokio::time::timeout(
                self.timeout,
                llm.generate(SYSTEM_PROMPT, prompt, None),
            )
            .await
            {
                Ok(Ok((text, _metadata))) => return Ok(text),
                Ok(Err(e)) => RankingError::from(e),
                Err(_) => RankingError::Timeout(self.timeout),
            };

            if attempt >= self.max_retries {
                return Err(error);
            }

            let delay = self.retry_backoff * 2u32.saturating_pow(attempt);
            warn!(
                "Ranking attempt {} failed ({}), retrying in {:?}",
                attempt + 1,
                error,
                delay
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

#[async_trait]
impl NameRanker for LlmNameRanker {
    async fn rank(
        &self,
        context: &RankingContext,
        candidates: &[String],
        top_k: usize,
    ) -> Result<Vec<String>, RankingError> {
        let Some(llm) = &self.llm else {
            return Ok(passthrough(candidates, top_k));
        };

        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let prompt = build_ranking_prompt(context, candidates, top_k);
        debug!("Calling LLM to rank {} candidates", candidates.len());

        let response = self.generate_with_retry(llm.as_ref(), &prompt).await?;
        let ranked = parse_ranked_names(&response, candidates, top_k);

        info!("Ranked {} of {} candidates", ranked.len(), candidates.len());
        Ok(ranked)
    }

    fn ranker_name(&self) -> &str {
        "llm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::providers::base::{LlmMetadata, LlmProviderError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedProvider {
        reply: String,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn generate(
            &self,
            system_prompt: &str,
            user_prompt: &str,
            _response_format: Option<&str>,
        ) -> Result<(String, LlmMetadata), LlmProviderError> {
            assert_eq!(system_prompt, SYSTEM_PROMPT);
            assert!(user_prompt.contains("CANDIDATE NAMES:"));
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok((self.reply.clone(), LlmMetadata::default()))
        }

        fn provider_name(&self) -> &str {
            "scripted"
        }

        fn model_name(&self) -> &str {
            "scripted"
        }
    }

    struct FailingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LlmProvider for FailingProvider {
        async fn generate(
            &self,
            _system_prompt: &str,
            _user_prompt: &str,
            _response_format: Option<&str>,
        ) -> Result<(String, LlmMetadata), LlmProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(LlmProviderError::Provider("service unavailable".to_string()))
        }

        fn provider_name(&self) -> &str {
            "failing"
        }

        fn model_name(&self) -> &str {
            "failing"
        }
    }

    struct StalledProvider;

    #[async_trait]
    impl LlmProvider for StalledProvider {
        async fn generate(
            &self,
            _system_prompt: &str,
            _user_prompt: &str,
            _response_format: Option<&str>,
        ) -> Result<(String, LlmMetadata), LlmProviderError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok((String::new(), LlmMetadata::default()))
        }

        fn provider_name(&self) -> &str {
            "stalled"
        }

        fn model_name(&self) -> &str {
            "stalled"
        }
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn context() -> RankingContext {
        RankingContext {
            concepts: names(&["home", "smart"]),
            project_context: Some("home automation".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_passthrough_without_provider() {
        let ranker = LlmNameRanker::new(None);
        assert!(ranker.is_passthrough());

        let candidates = names(&["Alpha", "Beta", "Gamma"]);
        let ranked = ranker.rank(&context(), &candidates, 2).await.unwrap();
        assert_eq!(ranked, names(&["Alpha", "Beta"]));
    }

    #[tokio::test]
    async fn test_reorders_by_reply() {
        let provider = Arc::new(ScriptedProvider {
            reply: "Gamma, Alpha".to_string(),
            calls: AtomicUsize::new(0),
        });
        let ranker = LlmNameRanker::new(Some(provider.clone() as Arc<dyn LlmProvider>));

        let candidates = names(&["Alpha", "Beta", "Gamma"]);
        let ranked = ranker.rank(&context(), &candidates, 3).await.unwrap();

        assert_eq!(ranked, names(&["Gamma", "Alpha", "Beta"]));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retries_then_fails() {
        let provider = Arc::new(FailingProvider { calls: AtomicUsize::new(0) });
        let ranker = LlmNameRanker::new(Some(provider.clone() as Arc<dyn LlmProvider>))
            .with_retries(1, Duration::from_millis(1));

        let result = ranker.rank(&context(), &names(&["Alpha"]), 1).await;

        assert!(matches!(result, Err(RankingError::Provider(_))));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_timeout_is_bounded() {
        let ranker = LlmNameRanker::new(Some(Arc::new(StalledProvider) as Arc<dyn LlmProvider>))
            .with_timeout(Duration::from_millis(20))
            .with_retries(0, Duration::from_millis(1));

        let result = ranker.rank(&context(), &names(&["Alpha"]), 1).await;
        assert!(matches!(result, Err(RankingError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_empty_candidates_skip_call() {
        let provider = Arc::new(FailingProvider { calls: AtomicUsize::new(0) });
        let ranker = LlmNameRanker::new(Some(provider.clone() as Arc<dyn LlmProvider>));

        let ranked = ranker.rank(&context(), &[], 5).await.unwrap();
        assert!(ranked.is_empty());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }
}
