//! Top-level configuration

use serde::{Deserialize, Serialize};

use super::{CacheConfig, LoggingConfig};

/// Configuration of an introspection deployment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntrospectorConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Result cache configuration
    pub cache: CacheConfig,
}
