

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm::embeddings::EmbeddingError;
use crate::llm::providers::LlmProviderError;


#[derive(Error, Debug)]
pub enum RankingError {
    #[error("LLM provider error: {0}")]
    Provider(#[from] LlmProviderError),

    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Ranking timed out after {0:?}")]
    Timeout(Duration),
}

/// Request-scoped context the ranker weighs candidates against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingContext {
    pub concepts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl RankingContext {

    pub fn has_guidance(&self) -> bool {
        non_blank(&self.project_context).is_some() || non_blank(&self.custom_prompt).is_some()
    }

    /// Free text describing what the names should evoke.
    pub fn query_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(project) = non_blank(&self.project_context) {
            parts.push(project);
        }
        if let Some(prompt) = non_blank(&self.custom_prompt) {
            parts.push(prompt);
        }
        parts.extend(self.concepts.iter().map(String::as_str));
        parts.join(" ").trim().to_string()
    }
}

pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}


pub fn passthrough(candidates: &[String], top_k: usize) -> Vec<String> {
    candidates.iter().take(top_k).cloned().collect()
}


#[async_trait]
pub trait NameRanker: Send + Sync {

    async fn rank(
        &self,
        context: &RankingContext,
        candidates: &[String],
        top_k: usize,
    ) -> Result<Vec<String>, RankingError>;


    fn ranker_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guidance_requires_non_blank_text() {
        let mut context = RankingContext::default();
        assert!(!context.has_guidance());

        context.custom_prompt = Some("   ".to_string());
        assert!(!context.has_guidance());

        context.project_context = Some("smart home".to_string());
        assert!(context.has_guidance());
    }

    #[test]
    fn test_query_text() {
        let context = RankingContext {
            concepts: vec!["home".to_string(), "smart".to_string()],
            project_context: Some("IoT hub".to_string()),
            custom_prompt: None,
            ..Default::default()
        };
        assert_eq!(context.query_text(), "IoT hub home smart");
        assert_eq!(RankingContext::default().query_text(), "");
    }

    #[test]
    fn test_passthrough_truncates() {
        let names: Vec<String> = ["Alpha", "Beta", "Gamma"].iter().map(|s| s.to_string()).collect();
        assert_eq!(passthrough(&names, 2), vec!["Alpha", "Beta"]);
        assert_eq!(passthrough(&names, 10).len(), 3);
    }
}
