//! Name synthesis: concepts in, two ordered lists of candidate names out.

pub mod concepts;
pub mod creative;
pub mod expander;
pub mod meaningful;
pub mod models;
pub mod phonetic;
pub mod pipeline;
pub mod request;
pub mod thesaurus;
pub mod validator;
pub mod vocabulary;

pub use concepts::extract_concepts;
pub use creative::CreativeGenerator;
pub use expander::SemanticExpander;
pub use meaningful::MeaningfulGenerator;
pub use models::{parse_domain_parts, DomainTag, GenerationOptions, NamePool, Tone};
pub use phonetic::{blend, blend_with, portmanteau, BlendStrategy};
pub use pipeline::NamePipeline;
pub use request::{NameRequest, NameResponse, ResponseContext};
pub use thesaurus::{SynonymSource, Thesaurus};
pub use validator::is_valid_name;
