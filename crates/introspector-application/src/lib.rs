//! # Introspector Application Layer
//!
//! Resolution use cases built on the domain types:
//!
//! - [`registry`] - exact type bindings and the default factory fallback
//! - [`introspector`] - construction and result-type validation
//! - [`matcher`] - mapping function parameters onto factories
//!
//! ```ignore
//! let mut introspector = Introspector::<Doubler>::new()?;
//! introspector.register_for::<i32>(Arc::new(|input: i32| Value::new(input * 2)));
//!
//! let result = introspector.introspect(&|count: i32| {})?;
//! let value = result.factory_map()[&0](1);
//! ```

pub mod introspector;
pub mod matcher;
pub mod registry;

pub use introspector::{Introspector, register_factory};
pub use registry::{DefaultFactory, TypeRegistry};
