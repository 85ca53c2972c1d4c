

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::concepts::{concept_text, extract_concepts};
use super::models::{GenerationOptions, Tone};
use super::pipeline::NamePipeline;
use crate::core::error::{BraionError, Result};
use crate::{DEFAULT_NAME_COUNT, MAX_NAME_COUNT};

fn default_tone() -> String {
    "professional".to_string()
}

fn default_purpose() -> String {
    "hackathon".to_string()
}

fn default_count() -> usize {
    DEFAULT_NAME_COUNT
}


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub project_description: Option<String>,
    #[serde(default)]
    pub custom_prompt: Option<String>,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default = "default_purpose")]
    pub purpose: String,
    #[serde(default = "default_count")]
    pub count: usize,
    /// Falls back to the pipeline default when absent.
    #[serde(default)]
    pub use_llm: Option<bool>,
}

impl NameRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            project_description: None,
            custom_prompt: None,
            tone: default_tone(),
            domain: None,
            purpose: default_purpose(),
            count: DEFAULT_NAME_COUNT,
            use_llm: None,
        }
    }


    pub fn validate(&self) -> Result<()> {
        if self.count == 0 || self.count > MAX_NAME_COUNT {
            return Err(BraionError::Validation(format!(
                "count must be between 1 and {}, got {}",
                MAX_NAME_COUNT, self.count
            )));
        }
        Ok(())
    }

    /// Description plus whichever of project description and custom prompt are set.
    pub fn concept_source(&self) -> String {
        concept_text(
            &self.description,
            &[self.project_description.as_deref(), self.custom_prompt.as_deref()],
        )
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseContext {
    pub tone: String,
    pub domain: Option<String>,
    pub purpose: String,
    pub has_project_desc: bool,
    pub has_custom_prompt: bool,
}


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameResponse {
    pub concepts: Vec<String>,
    pub meaningful_names: Vec<String>,
    pub creative_names: Vec<String>,
    pub context: ResponseContext,
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl NamePipeline {
    /// Full request path: concepts, both generators, optional ranking.
    pub async fn handle(&self, request: &NameRequest) -> Result<NameResponse> {
        request.validate()?;

        let request_id = format!("req_{}", &Uuid::new_v4().simple().to_string()[..12]);
        let concepts = extract_concepts(&request.concept_source());

        let options = GenerationOptions {
            count: request.count,
            use_llm: request.use_llm.unwrap_or(self.default_use_llm()),
            tone: Tone::parse(&request.tone),
            domain: request.domain.clone(),
            project_context: request.project_description.clone(),
            custom_prompt: request.custom_prompt.clone(),
        };

        info!(
            "[{}] Generating {} names: concepts={:?}, tone={}, domain={:?}, use_llm={}",
            request_id, options.count, concepts, options.tone, options.domain, options.use_llm
        );

        let pool = self.generate(&concepts, &options).await;

        info!(
            "[{}] Generated {} meaningful, {} creative",
            request_id,
            pool.meaningful.len(),
            pool.creative.len()
        );

        Ok(NameResponse {
            concepts,
            meaningful_names: pool.meaningful,
            creative_names: pool.creative,
            context: ResponseContext {
                tone: request.tone.clone(),
                domain: request.domain.clone(),
                purpose: request.purpose.clone(),
                has_project_desc: is_set(&request.project_description),
                has_custom_prompt: is_set(&request.custom_prompt),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::naming::thesaurus::Thesaurus;
    use crate::toolkit::naming::validator::is_valid_name;
    use std::sync::Arc;

    fn pipeline() -> NamePipeline {
        NamePipeline::new(Arc::new(Thesaurus::builtin()))
    }

    #[test]
    fn test_request_defaults_from_json() {
        let request: NameRequest =
            serde_json::from_str(r#"{"description": "smart home"}"#).unwrap();
        assert_eq!(request.tone, "professional");
        assert_eq!(request.purpose, "hackathon");
        assert_eq!(request.count, 10);
        assert!(request.use_llm.is_none());
    }

    #[test]
    fn test_concept_source() {
        let mut request = NameRequest::new("smart home");
        request.project_description = Some("energy meter".to_string());
        request.custom_prompt = Some("short names".to_string());
        assert_eq!(request.concept_source(), "smart home energy meter short names");
    }

    #[test]
    fn test_count_validation() {
        let mut request = NameRequest::new("x");
        request.count = 0;
        assert!(matches!(request.validate(), Err(BraionError::Validation(_))));
        request.count = MAX_NAME_COUNT + 1;
        assert!(request.validate().is_err());
        request.count = MAX_NAME_COUNT;
        assert!(request.validate().is_ok());
    }

    #[tokio::test]
    async fn test_handle_end_to_end() {
        let mut request = NameRequest::new("A smart home monitoring platform");
        request.domain = Some("IoT".to_string());

        let response = pipeline().handle(&request).await.unwrap();

        assert_eq!(response.concepts, vec!["home", "monitoring", "platform", "smart"]);
        assert!(response.meaningful_names.len() <= 5);
        assert!(response.creative_names.len() <= 5);
        assert!(response
            .meaningful_names
            .iter()
            .chain(response.creative_names.iter())
            .all(|n| is_valid_name(n, &Tone::Professional)));
        assert_eq!(
            response.context,
            ResponseContext {
                tone: "professional".to_string(),
                domain: Some("IoT".to_string()),
                purpose: "hackathon".to_string(),
                has_project_desc: false,
                has_custom_prompt: false,
            }
        );
    }

    #[test]
    fn test_empty_description_is_legal() {
        let response = tokio_test::block_on(pipeline().handle(&NameRequest::new(""))).unwrap();
        assert!(response.concepts.is_empty());
        assert!(!response.creative_names.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_tone_echoed() {
        let mut request = NameRequest::new("retro arcade");
        request.tone = "Whimsical".to_string();
        let response = pipeline().handle(&request).await.unwrap();
        assert_eq!(response.context.tone, "Whimsical");
    }

    #[test]
    fn test_response_serialization_shape() {
        let response = NameResponse {
            concepts: vec!["mesh".to_string()],
            meaningful_names: vec!["Meshly".to_string()],
            creative_names: vec![],
            context: ResponseContext {
                tone: "cool".to_string(),
                domain: None,
                purpose: "hackathon".to_string(),
                has_project_desc: true,
                has_custom_prompt: false,
            },
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["meaningful_names"][0], "Meshly");
        assert_eq!(value["context"]["has_project_desc"], true);
        assert!(value["context"]["domain"].is_null());
    }
}
