

pub mod core;
pub mod llm;
pub mod mcp;
pub mod toolkit;
pub mod utils;

pub use crate::utils::{capitalize, safe_truncate, safe_truncate_ellipsis};


pub use crate::core::config::BraionConfig;
pub use crate::core::error::{BraionError, Result};
pub use crate::llm::ranking::{NameRanker, RankingContext};
pub use crate::toolkit::naming::{GenerationOptions, NamePipeline, NamePool, NameRequest, NameResponse, Tone};


pub const DEFAULT_HF_URL: &str = "https://api-inference.huggingface.co";


pub const DEFAULT_LLM_MODEL: &str = "meta-llama/Llama-3.2-3B-Instruct";


pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";


pub const DEFAULT_EMBEDDING_MODEL: &str = "nomic-embed-text";


pub const DEFAULT_NAME_COUNT: usize = 10;


pub const MAX_NAME_COUNT: usize = 100;


pub const DEFAULT_CACHE_SIZE: usize = 1000;
