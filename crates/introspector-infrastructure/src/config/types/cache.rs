//! Result cache configuration types

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MEMOIZE_RESULTS;

/// Memoization of introspection results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache successful results per signature
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_MEMOIZE_RESULTS,
        }
    }
}
