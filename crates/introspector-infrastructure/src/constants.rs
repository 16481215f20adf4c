//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "introspector.toml";

/// Project-local configuration subdirectory
pub const DEFAULT_CONFIG_SUBDIR: &str = "config";

/// Configuration directory name under the user config dir
pub const DEFAULT_CONFIG_DIR: &str = "introspector";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "INTROSPECTOR";

/// Separator between the prefix and nested keys of environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_FILTER: &str = "INTROSPECTOR_LOG";

/// File name prefix for rolled log files
pub const DEFAULT_LOG_FILE_PREFIX: &str = "introspector";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Whether introspection results are memoized by default
pub const DEFAULT_MEMOIZE_RESULTS: bool = true;
