//! # Infrastructure Layer
//!
//! Concrete adapters and ambient services around the resolution core.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Singleton container and the dependency-registry adapter |
//! | [`cache`] | Per-signature memoization of introspection results |
//! | [`config`] | Figment-based configuration loading |
//! | [`logging`] | Tracing subscriber setup |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`constants`] | Configuration and logging defaults |

pub mod cache;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use cache::MemoizedIntrospector;
pub use config::{CacheConfig, ConfigLoader, IntrospectorConfig, LoggingConfig};
pub use di::{InjectorFactory, SingletonContainer};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
