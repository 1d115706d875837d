//! Configuration loading and file format.

pub mod file_config;
pub mod loader;

pub use file_config::{AnthropicSettings, FileConfig, LoggingConfig, OpenAiSettings};
pub use loader::ConfigLoader;
