

pub mod embeddings;
pub mod factory;
pub mod providers;
pub mod ranking;

pub use embeddings::{EmbeddingError, EmbeddingGenerator};
pub use factory::{LlmProviderFactory, RankerFactory};
pub use ranking::{EmbeddingNameRanker, LlmNameRanker, NameRanker, RankingContext, RankingError};
