

pub mod base;
pub mod embedding;
pub mod engine;
pub mod prompt;
pub mod similarity;

pub use base::{passthrough, NameRanker, RankingContext, RankingError};
pub use embedding::EmbeddingNameRanker;
pub use engine::LlmNameRanker;
pub use prompt::{build_ranking_prompt, parse_ranked_names, SYSTEM_PROMPT};
