//! Tracing subscriber setup
//!
//! Output goes to stdout, as text or JSON, and optionally to a log file
//! rolled daily next to the configured path.

use std::ffi::OsStr;
use std::path::Path;

use introspector_domain::error::{Error, Result};
use tracing::{Level, info, warn};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILE_PREFIX, LOG_ENV_FILTER};
use crate::error_ext::ErrorContext;

/// Install the global subscriber described by `config`
///
/// `INTROSPECTOR_LOG` overrides the configured level with a full filter
/// directive. Fails on an invalid level or when a subscriber is already
/// installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_FILTER).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let json = config.json_format;
    let stdout_text = (!json).then(|| fmt::layer().with_target(true).with_thread_ids(true));
    let stdout_json = json.then(|| fmt::layer().json().with_target(true).with_thread_ids(true));
    let (file_text, file_json) = match config.file_output.as_deref().map(rolling_file) {
        Some(writer) if json => (None, Some(fmt::layer().json().with_writer(writer).with_ansi(false))),
        Some(writer) => (Some(fmt::layer().with_writer(writer).with_ansi(false)), None),
        None => (None, None),
    };

    Registry::default()
        .with(filter)
        .with(stdout_text)
        .with(stdout_json)
        .with(file_text)
        .with(file_json)
        .try_init()
        .config_context("Failed to install tracing subscriber")?;

    info!(%level, json, "Logging initialized");
    Ok(())
}

fn rolling_file(path: &Path) -> RollingFileAppender {
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_stem()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_PREFIX));
    tracing_appender::rolling::daily(directory, prefix)
}

/// Map a level name onto a tracing [`Level`], case-insensitively
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level} (expected trace, debug, info, warn or error)"
        ))),
    }
}

/// Record which configuration file was used
pub fn log_config_loaded(config_path: &Path, found: bool) {
    if found {
        info!(path = %config_path.display(), "Loaded configuration file");
    } else {
        warn!(path = %config_path.display(), "Configuration file not found, using defaults");
    }
}
