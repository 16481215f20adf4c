//! # Introspector
//!
//! Resolves a factory for every parameter of a function by looking up each
//! parameter's declared type in a registry of bindings.
//!
//! Exact bindings always win. Types without one go to an optional default
//! factory, typically the dependency-registry adapter over a
//! [`SingletonContainer`]. Every failing position is reported, and a result
//! exists only when every parameter resolved.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use introspector::{Introspector, InjectorFactory, SingletonContainer, Value};
//!
//! type Factory = Arc<dyn Fn() -> Value + Send + Sync>;
//!
//! let container = SingletonContainer::new();
//! container.singleton(42_i32);
//!
//! let mut introspector = Introspector::<Factory>::new()?;
//! introspector.set_default_factory(
//!     InjectorFactory::new(Arc::new(container))
//!         .into_supplier(|value| -> Factory { Arc::new(move || value.clone()) }),
//! );
//!
//! let result = introspector.introspect(&|answer: i32| answer).expect("resolvable");
//! assert_eq!(result.factory(0).unwrap()().get::<i32>(), Some(42));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - type keys, values, signatures, the result model and ports
//! - `application` - the registry and the signature matcher
//! - `infrastructure` - container, adapter, memoization, config and logging

/// Domain layer - type identities, values and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use introspector_domain::*;
}

/// Application layer - registry and matcher
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use introspector_application::*;
}

/// Infrastructure layer - container, adapter, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use introspector_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Declaration-site macros
pub use introspector_domain::{reflect_context, reflect_interface, reflect_struct, reflect_value};

// Re-export the engine at the crate root
pub use application::{Introspector, register_factory};

// Re-export infrastructure entry points
pub use infrastructure::{
    ConfigLoader, InjectorFactory, IntrospectorConfig, MemoizedIntrospector, SingletonContainer,
    init_logging,
};
