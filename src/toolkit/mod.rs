

pub mod naming;

pub use naming::{NamePipeline, NameRequest, NameResponse};
