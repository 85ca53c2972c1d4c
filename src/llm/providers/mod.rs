

pub mod base;
pub mod huggingface;
pub mod ollama;

pub use base::{LlmMetadata, LlmProvider, LlmProviderError};
pub use huggingface::HuggingFaceProvider;
pub use ollama::OllamaProvider;
