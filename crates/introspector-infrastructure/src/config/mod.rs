//! Configuration management
//!
//! Layered loading through figment: defaults, then a TOML file, then
//! prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{CacheConfig, IntrospectorConfig, LoggingConfig};
