//! Layered configuration loading
//!
//! Defaults are overridden by a TOML file, which is overridden by
//! environment variables such as `INTROSPECTOR__LOGGING__LEVEL`.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use introspector_domain::error::Result;

use crate::config::{CacheConfig, IntrospectorConfig, LoggingConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    DEFAULT_CONFIG_SUBDIR,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Loads [`IntrospectorConfig`] from defaults, a file and the environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Loader with file discovery and the `INTROSPECTOR` prefix
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Read this file instead of discovering one
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read environment variables under another prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Merge every source and validate the result
    pub fn load(&self) -> Result<IntrospectorConfig> {
        let mut figment = Figment::from(Serialized::defaults(IntrospectorConfig::default()));
        if let Some(path) = self.config_file() {
            figment = figment.merge(Toml::file(path));
        }
        let env_prefix = format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix);
        figment = figment.merge(Env::prefixed(&env_prefix).split(CONFIG_ENV_SEPARATOR));

        let config: IntrospectorConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Write `config` as pretty-printed TOML
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &IntrospectorConfig, path: P) -> Result<()> {
        let path = path.as_ref();
        let rendered =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;
        std::fs::write(path, rendered)
            .with_config_context(|| format!("Failed to write config file {}", path.display()))
    }

    /// The explicitly configured file, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn config_file(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config_path {
            let found = path.exists();
            log_config_loaded(path, found);
            return found.then(|| path.clone());
        }
        let discovered = discover_config_file()?;
        log_config_loaded(&discovered, true);
        Some(discovered)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// First existing file among the working directory, its `config/`
/// subdirectory and the user configuration directory
fn discover_config_file() -> Option<PathBuf> {
    let cwd = env::current_dir().ok()?;
    [
        Some(cwd.join(DEFAULT_CONFIG_FILENAME)),
        Some(cwd.join(DEFAULT_CONFIG_SUBDIR).join(DEFAULT_CONFIG_FILENAME)),
        dirs::config_dir().map(|dir| dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
    ]
    .into_iter()
    .flatten()
    .find(|path| path.is_file())
}

/// Reject configurations the runtime cannot apply
pub fn validate_config(config: &IntrospectorConfig) -> Result<()> {
    parse_log_level(&config.logging.level).map(|_| ())
}

/// Assembles an [`IntrospectorConfig`] in code
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: IntrospectorConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    #[must_use]
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.config.cache = cache;
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<IntrospectorConfig> {
        validate_config(&self.config)?;
        Ok(self.config)
    }
}
