//! Configuration management for swagger-ts-gen

pub mod config;
pub mod generation;
pub mod source;


// Re-export main types for convenience
pub use config::{Config, LegacyConfig};
pub use generation::GenerationConfig;
pub use source::Source;
pub use swagger_ts_generator::config::OutputConfig;
