//! Ports implemented outside the domain
//!
//! [`Container`] is the contract of the external dependency registry the
//! injector adapter bridges to. Only its observable behaviour matters here:
//! each operation fails with [`Error::DependencyNotFound`] when nothing
//! provides the requested type.

use std::any::type_name;

use crate::error::{Error, Result};
use crate::reflect::{Reflect, TypeKey};
use crate::value::{Instance, Value};

/// External singleton/dependency registry
pub trait Container: Send + Sync {
    /// Populate `target` with the dependency registered for its type
    fn inject_into(&self, target: &mut Instance) -> Result<()>;

    /// Resolve the injectable fields of `target` in place
    fn fill(&self, target: &mut Instance) -> Result<()>;

    /// The shared singleton registered for `key`
    fn inject_singleton(&self, key: &TypeKey) -> Result<Value>;
}

/// Declaration-site hook for context structures
///
/// Each injectable field is resolved independently from the container.
///
/// ```ignore
/// impl Fill for RequestContext {
///     fn fill(&mut self, container: &dyn Container) -> Result<()> {
///         self.clock = container.resolve::<Arc<dyn Clock>>()?;
///         Ok(())
///     }
/// }
/// reflect_context!(RequestContext);
/// ```
pub trait Fill {
    /// Resolve this value's injectable fields
    fn fill(&mut self, container: &dyn Container) -> Result<()>;
}

/// Typed helpers over any [`Container`]
pub trait ContainerExt {
    /// Resolve a dependency of type `T`
    fn resolve<T: Reflect + Clone + Send + Sync>(&self) -> Result<T>;
}

impl<C: Container + ?Sized> ContainerExt for C {
    fn resolve<T: Reflect + Clone + Send + Sync>(&self) -> Result<T> {
        let mut instance = Instance::empty(TypeKey::of::<T>());
        self.inject_into(&mut instance)?;
        instance
            .take::<T>()
            .ok_or_else(|| Error::injection(type_name::<T>(), "container populated a different type"))
    }
}
