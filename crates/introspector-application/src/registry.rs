//! Type Registry
//!
//! Exact `TypeKey` to factory bindings plus one optional default factory
//! consulted on a miss. Registration needs `&mut self`; share the registry
//! across threads only once it is fully configured, or behind a lock.

use std::collections::HashMap;

use introspector_domain::error::{Error, Result};
use introspector_domain::reflect::{Reflect, TypeKey};
use tracing::{debug, trace};

/// Fallback invoked for types without an exact binding
pub type DefaultFactory<F> = Box<dyn Fn(&TypeKey) -> Result<F> + Send + Sync>;

/// Mapping from parameter type to factory
pub struct TypeRegistry<F> {
    factories: HashMap<TypeKey, F>,
    default_factory: Option<DefaultFactory<F>>,
}

impl<F: Clone> TypeRegistry<F> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            default_factory: None,
        }
    }

    /// Bind `factory` to `key`, replacing any previous binding
    pub fn register(&mut self, key: TypeKey, factory: F) {
        if self.factories.insert(key, factory).is_some() {
            debug!(type_name = key.name(), "Replaced factory binding");
        } else {
            debug!(type_name = key.name(), "Registered factory binding");
        }
    }

    /// Bind `factory` to the key of `T`
    pub fn register_for<T: Reflect + ?Sized>(&mut self, factory: F) {
        self.register(TypeKey::of::<T>(), factory);
    }

    /// Exact binding for `key`, else the default factory's answer
    ///
    /// Default factory results are not cached.
    pub fn lookup(&self, key: &TypeKey) -> Result<F> {
        if let Some(factory) = self.factories.get(key) {
            trace!(type_name = key.name(), "Exact factory binding");
            return Ok(factory.clone());
        }

        match &self.default_factory {
            Some(default_factory) => {
                trace!(type_name = key.name(), "Falling back to default factory");
                default_factory(key)
            }
            None => Err(Error::factory_not_found(key.name())),
        }
    }

    /// Install or replace the default factory
    pub fn set_default_factory<S>(&mut self, supplier: S)
    where
        S: Fn(&TypeKey) -> Result<F> + Send + Sync + 'static,
    {
        if self.default_factory.replace(Box::new(supplier)).is_some() {
            debug!("Replaced default factory");
        } else {
            debug!("Installed default factory");
        }
    }

    /// Whether a default factory is installed
    pub fn has_default_factory(&self) -> bool {
        self.default_factory.is_some()
    }

    /// Current exact bindings
    pub fn factory_map(&self) -> &HashMap<TypeKey, F> {
        &self.factories
    }
}

impl<F: Clone> Default for TypeRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}
