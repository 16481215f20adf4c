//! Configuration types

mod app;
mod cache;
mod logging;

pub use app::IntrospectorConfig;
pub use cache::CacheConfig;
pub use logging::LoggingConfig;
