

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use tracing::{debug, info};

use super::base::{passthrough, NameRanker, RankingContext, RankingError};
use super::similarity::batch_cosine_similarity;
use crate::llm::embeddings::EmbeddingGenerator;

/// Orders candidates by cosine similarity between their embedding and the
/// embedding of the ranking context.
pub struct EmbeddingNameRanker {
    embeddings: Arc<EmbeddingGenerator>,
}

impl EmbeddingNameRanker {

    pub fn new(embeddings: Arc<EmbeddingGenerator>) -> Self {
        info!(
            "EmbeddingNameRanker initialized: provider={}, model={}",
            embeddings.provider(),
            embeddings.model()
        );
        Self { embeddings }
    }
}

#[async_trait]
impl NameRanker for EmbeddingNameRanker {
    async fn rank(
        &self,
        context: &RankingContext,
        candidates: &[String],
        top_k: usize,
    ) -> Result<Vec<String>, RankingError> {
        let query = context.query_text();
        if query.is_empty() || candidates.is_empty() {
            return Ok(passthrough(candidates, top_k));
        }

        let query_vector = self.embeddings.generate(&query).await?;
        let vectors = try_join_all(candidates.iter().map(|name| self.embeddings.generate(name))).await?;
        let scores = batch_cosine_similarity(&query_vector, &vectors);

        let mut scored: Vec<(f64, &String)> = scores.into_iter().zip(candidates.iter()).collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        debug!(
            "Embedding ranking top score: {:?}",
            scored.first().map(|(score, name)| (name.as_str(), *score))
        );

        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(_, name)| name.clone())
            .collect())
    }

    fn ranker_name(&self) -> &str {
        "embedding"
    }
}
