

pub mod config;
pub mod error;

pub use self::config::BraionConfig;
pub use self::error::{BraionError, Result};
