//! Dependency-registry adapter
//!
//! Default-factory supplier resolving parameter types from a [`Container`].
//! Container errors, `DependencyNotFound` in particular, are returned
//! unchanged.

use std::sync::Arc;

use introspector_domain::error::{Error, Result};
use introspector_domain::ports::Container;
use introspector_domain::reflect::{Kind, TypeKey};
use introspector_domain::value::{Instance, Value};
use tracing::{debug, trace};

/// Resolves values for parameter types out of a dependency container
#[derive(Clone)]
pub struct InjectorFactory {
    container: Arc<dyn Container>,
}

impl InjectorFactory {
    /// Create an adapter over `container`
    pub fn new(container: Arc<dyn Container>) -> Self {
        Self { container }
    }

    /// The underlying container
    pub fn container(&self) -> &Arc<dyn Container> {
        &self.container
    }

    /// Resolve a value of the type `key` denotes
    ///
    /// A pointer type with no singleton of its own is satisfied from its
    /// pointee and re-wrapped. Structures are injected whole, falling back to
    /// filling their fields when the container has no provider for them.
    pub fn resolve(&self, key: &TypeKey) -> Result<Value> {
        let mut requested = *key;
        let mut repoint = None;
        if key.kind() == Kind::Pointer {
            match self.container.inject_singleton(key) {
                Err(err) if !err.is_dependency_not_found() => return Err(err),
                Err(_) => {
                    if let Some(elem) = key.elem() {
                        trace!(type_name = key.name(), pointee = elem.name(), "Resolving through pointee");
                        repoint = Some(*key);
                        requested = elem;
                    }
                }
                Ok(_) => {}
            }
        }

        let mut instance = Instance::zero(requested);
        match requested.kind() {
            Kind::Struct | Kind::Pointer => {
                if let Err(err) = self.container.inject_into(&mut instance) {
                    if !err.is_dependency_not_found() {
                        return Err(err);
                    }
                    self.container.fill(&mut instance)?;
                }
            }
            _ => self.container.inject_into(&mut instance)?,
        }

        let value = instance.into_value()?;
        let value = match repoint {
            Some(pointer) => pointer
                .point(value)
                .ok_or_else(|| Error::injection(pointer.name(), "cannot re-wrap the resolved pointee"))?,
            None => value,
        };
        debug!(type_name = key.name(), "Resolved dependency");
        Ok(value)
    }

    /// Turn the adapter into a default factory supplier
    ///
    /// Each resolved value is handed to `wrap` to build a factory of shape `F`.
    pub fn into_supplier<F, W>(self, wrap: W) -> impl Fn(&TypeKey) -> Result<F> + Send + Sync + 'static
    where
        W: Fn(Value) -> F + Send + Sync + 'static,
    {
        move |key| self.resolve(key).map(&wrap)
    }
}
