//! Dependency injection
//!
//! [`SingletonContainer`] implements the container port and
//! [`InjectorFactory`] adapts any container into a default factory supplier.

pub mod container;
pub mod injector;

pub use container::SingletonContainer;
pub use injector::InjectorFactory;
