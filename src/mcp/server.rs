

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::RequestContext,
    tool, tool_handler, tool_router,
    transport::stdio,
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::core::config::BraionConfig;
use crate::core::error::BraionError;
use crate::toolkit::naming::{extract_concepts, NamePipeline, NameRequest};


#[derive(Debug, Deserialize, rmcp::schemars::JsonSchema)]
#[schemars(crate = "rmcp::schemars")]
pub struct GenerateNamesParams {
    #[schemars(description = "Short free-text description of the team or product")]
    pub description: String,
    #[schemars(description = "Optional longer project description (also used for ranking)")]
    pub project_description: Option<String>,
    #[schemars(description = "Optional custom instruction, e.g. 'short and punchy'")]
    pub custom_prompt: Option<String>,
    #[schemars(
        description = "Tone: 'professional' (default), 'cool', 'funny', 'aggressive', 'minimal'"
    )]
    pub tone: Option<String>,
    #[schemars(
        description = "Domain tag(s), e.g. 'AI', 'IoT', 'AI and IoT', 'Fintech, Gaming'"
    )]
    pub domain: Option<String>,
    #[schemars(description = "Purpose label echoed back (default: 'hackathon')")]
    pub purpose: Option<String>,
    #[schemars(description = "Total names to return, split between both lists (default: 10)")]
    pub count: Option<u32>,
    #[schemars(description = "Re-rank with the configured LLM ranker")]
    pub use_llm: Option<bool>,
}

#[derive(Debug, Deserialize, rmcp::schemars::JsonSchema)]
#[schemars(crate = "rmcp::schemars")]
pub struct ExtractConceptsParams {
    #[schemars(description = "Text to extract keywords from")]
    pub text: String,
}

#[derive(Debug, Serialize)]
struct ConceptsResult {
    concepts: Vec<String>,
}


#[derive(Clone)]
pub struct BraionMcpServer {
    pipeline: Arc<NamePipeline>,
    config: Arc<BraionConfig>,
    tool_router: ToolRouter<Self>,
}

impl BraionMcpServer {

    pub fn new(pipeline: NamePipeline, config: BraionConfig) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }


    fn convert_error(err: BraionError) -> McpError {
        match err {
            BraionError::Validation(msg) | BraionError::Config(msg) => {
                McpError::invalid_params(msg, None)
            }
            other => McpError::internal_error(other.to_string(), None),
        }
    }


    fn result_to_json<T: Serialize>(result: T) -> Result<String, McpError> {
        serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))
    }

    fn to_request(&self, params: GenerateNamesParams) -> NameRequest {
        let mut request = NameRequest::new(params.description);
        request.project_description = params.project_description;
        request.custom_prompt = params.custom_prompt;
        if let Some(tone) = params.tone {
            request.tone = tone;
        }
        request.domain = params.domain;
        if let Some(purpose) = params.purpose {
            request.purpose = purpose;
        }
        request.count = params.count.map_or(self.config.name_count, |c| c as usize);
        request.use_llm = params.use_llm;
        request
    }
}

#[tool_router]
impl BraionMcpServer {

    #[tool(description = "Generate team/product names from a description. Returns two lists: meaningful names blended from your concepts and creative names from curated word banks. Returns: {concepts, meaningful_names, creative_names, context}")]
    async fn generate_names(
        &self,
        Parameters(params): Parameters<GenerateNamesParams>,
    ) -> Result<CallToolResult, McpError> {
        let request = self.to_request(params);
        let preview = crate::safe_truncate_ellipsis(&request.description, 50);
        info!("🏷️ Generating names for '{}' [tone={}, count={}]", preview, request.tone, request.count);

        let response = self
            .pipeline
            .handle(&request)
            .await
            .map_err(Self::convert_error)?;

        info!(
            "✅ {} meaningful, {} creative",
            response.meaningful_names.len(),
            response.creative_names.len()
        );

        let json = Self::result_to_json(&response)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }


    #[tool(description = "Extract the keyword concepts the name generator would use for a text. Returns: {concepts}")]
    async fn extract_concepts(
        &self,
        Parameters(params): Parameters<ExtractConceptsParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = ConceptsResult {
            concepts: extract_concepts(&params.text),
        };
        let json = Self::result_to_json(&result)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for BraionMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "braion".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Braion team name generator - extracts concepts from a description, expands them \
                 semantically and blends them into pronounceable names. Use generate_names for \
                 both meaningful and creative names, extract_concepts to preview keywords."
                    .to_string(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _ctx: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: vec![
                RawResource::new("config://braion", "braion-config".to_string()).no_annotation(),
                RawResource::new("status://braion", "braion-status".to_string()).no_annotation(),
            ],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        match uri.as_str() {
            "config://braion" => {
                let content = serde_json::to_string_pretty(&self.config_summary())
                    .unwrap_or_default();
                Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(content, uri)],
                })
            }
            "status://braion" => {
                let content = serde_json::to_string_pretty(&Self::status()).unwrap_or_default();
                Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(content, uri)],
                })
            }
            _ => Err(McpError::resource_not_found(
                format!("Unknown resource: {}", uri),
                Some(json!({ "uri": uri })),
            )),
        }
    }
}

impl BraionMcpServer {
    /// Never includes credentials.
    fn config_summary(&self) -> serde_json::Value {
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "settings": &*self.config,
            "llm_credential_set": self.config.has_llm_credential(),
            "tools": ["generate_names", "extract_concepts"],
        })
    }

    fn status() -> serde_json::Value {
        json!({
            "status": "healthy",
            "service": "braion-api",
        })
    }
}


pub async fn run_server() -> anyhow::Result<()> {
    info!("🚀 Initializing Braion MCP Server...");

    let config = BraionConfig::from_env()?;
    let pipeline = NamePipeline::from_config(&config)?;

    info!("✅ Braion MCP Server ready");
    info!("   🤖 Ranker: {} ({}/{})", config.ranker, config.llm_provider, config.llm_model);
    info!("   🔑 LLM credential: {}", if config.has_llm_credential() { "set" } else { "missing" });

    let server = BraionMcpServer::new(pipeline, config);
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::naming::Thesaurus;

    fn server(config: BraionConfig) -> BraionMcpServer {
        BraionMcpServer::new(NamePipeline::new(Arc::new(Thesaurus::builtin())), config)
    }

    fn params(description: &str) -> GenerateNamesParams {
        GenerateNamesParams {
            description: description.to_string(),
            project_description: None,
            custom_prompt: None,
            tone: None,
            domain: None,
            purpose: None,
            count: None,
            use_llm: None,
        }
    }

    #[test]
    fn test_request_defaults() {
        let mut config = BraionConfig::default();
        config.name_count = 6;
        let request = server(config).to_request(params("smart home"));

        assert_eq!(request.description, "smart home");
        assert_eq!(request.tone, "professional");
        assert_eq!(request.purpose, "hackathon");
        assert_eq!(request.count, 6);
        assert!(request.use_llm.is_none());
    }

    #[test]
    fn test_request_overrides() {
        let mut p = params("x");
        p.tone = Some("minimal".to_string());
        p.count = Some(4);
        p.use_llm = Some(true);
        let request = server(BraionConfig::default()).to_request(p);
        assert_eq!(request.tone, "minimal");
        assert_eq!(request.count, 4);
        assert_eq!(request.use_llm, Some(true));
    }

    #[test]
    fn test_error_mapping() {
        let err = BraionMcpServer::convert_error(BraionError::Validation("count".to_string()));
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        let err = BraionMcpServer::convert_error(BraionError::ResourceUnavailable("x".to_string()));
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }

    #[test]
    fn test_config_summary_hides_credentials() {
        let mut config = BraionConfig::default();
        config.llm_api_key = Some("hf_secret".to_string());
        let summary = server(config).config_summary();

        assert!(!summary.to_string().contains("hf_secret"));
        assert_eq!(summary["llm_credential_set"], true);
        assert_eq!(summary["settings"]["ranker"], "llm");
    }

    #[test]
    fn test_tool_param_schemas() {
        let schema = serde_json::to_value(rmcp::schemars::schema_for!(GenerateNamesParams)).unwrap();
        assert!(schema["properties"]["description"].is_object());
        assert!(schema["properties"]["count"].is_object());

        let schema = serde_json::to_value(rmcp::schemars::schema_for!(ExtractConceptsParams)).unwrap();
        assert!(schema["properties"]["text"].is_object());
    }

    #[test]
    fn test_status_payload() {
        let status = BraionMcpServer::status();
        assert_eq!(status["status"], "healthy");
        assert_eq!(status["service"], "braion-api");
    }

    #[test]
    fn test_server_info() {
        let info = server(BraionConfig::default()).get_info();
        assert_eq!(info.server_info.name, "braion");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
    }
}
