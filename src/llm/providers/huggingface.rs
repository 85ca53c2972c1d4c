

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use super::base::{LlmMetadata, LlmProvider, LlmProviderError};
use crate::DEFAULT_HF_URL;

#[derive(Debug, Serialize)]
struct HfRequest {
    inputs: String,
    parameters: HfParameters,
}

#[derive(Debug, Serialize)]
struct HfParameters {
    max_new_tokens: u32,
    temperature: f64,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct HfGeneration {
    #[serde(default)]
    generated_text: String,
}

/// Text-generation client for the Hugging Face inference API.
pub struct HuggingFaceProvider {
    api_key: String,
    model: String,
    endpoint: Url,
    temperature: f64,
    max_new_tokens: u32,
    client: Client,
}

impl HuggingFaceProvider {

    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: Option<&str>,
        temperature: f64,
        max_new_tokens: u32,
        timeout: Duration,
    ) -> Result<Self, LlmProviderError> {
        let model = model.into();
        let endpoint = model_endpoint(base_url.unwrap_or(DEFAULT_HF_URL), &model)?;
        info!("HuggingFace provider initialized (model={}, endpoint={})", model, endpoint);
        Ok(Self {
            api_key: api_key.into(),
            model,
            endpoint,
            temperature,
            max_new_tokens,
            client: Client::builder().timeout(timeout).build()?,
        })
    }


    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}


fn model_endpoint(base_url: &str, model: &str) -> Result<Url, LlmProviderError> {
    let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))?;
    Ok(base.join(&format!("models/{}", model.trim_start_matches('/')))?)
}

/// The inference API takes a single prompt, so the system text leads it.
fn join_prompt(system_prompt: &str, user_prompt: &str) -> String {
    if system_prompt.trim().is_empty() {
        user_prompt.to_string()
    } else {
        format!("{system_prompt}\n{user_prompt}")
    }
}


fn parse_generation(body: &str) -> Result<String, LlmProviderError> {
    let generations: Vec<HfGeneration> = serde_json::from_str(body)?;
    generations
        .into_iter()
        .next()
        .map(|g| g.generated_text)
        .ok_or_else(|| LlmProviderError::Provider("No generations in response".to_string()))
}

#[async_trait]
impl LlmProvider for HuggingFaceProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        _response_format: Option<&str>,
    ) -> Result<(String, LlmMetadata), LlmProviderError> {
        let request = HfRequest {
            inputs: join_prompt(system_prompt, user_prompt),
            parameters: HfParameters {
                max_new_tokens: self.max_new_tokens,
                temperature: self.temperature,
                return_full_text: false,
            },
        };

        let body = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()
            .map_err(LlmProviderError::Http)?
            .text()
            .await?;

        debug!("HuggingFace response: {}", crate::safe_truncate(&body, 200));
        let content = parse_generation(&body)?;

        let metadata = LlmMetadata {
            provider: "huggingface".to_string(),
            model: self.model.clone(),
            base_url: Some(self.endpoint.to_string()),
            ..Default::default()
        };

        Ok((content, metadata))
    }

    fn provider_name(&self) -> &str {
        "huggingface"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
