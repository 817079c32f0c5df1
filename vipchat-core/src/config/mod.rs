//! Configuration management

pub mod loader;
pub mod schema;
pub mod validate;

pub use loader::ConfigLoader;
pub use schema::{ChatConfig, Config, LoggingConfig, StorageConfig};
pub use validate::validate_config;
