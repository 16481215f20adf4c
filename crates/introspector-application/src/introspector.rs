//! Introspector construction
//!
//! An [`Introspector`] owns the [`TypeRegistry`] for one factory shape `F`
//! and produces results of type `R`. `R` is validated once, here, so a
//! result type that drops its base is caught before any introspection.

use std::any::type_name;
use std::collections::HashMap;
use std::marker::PhantomData;

use introspector_domain::error::{Error, Result};
use introspector_domain::reflect::{Kind, Reflect, TypeKey};
use introspector_domain::result::{FactoryMap, IntrospectionResult, ResultBase};
use introspector_domain::signature::FnType;
use tracing::debug;

use crate::registry::TypeRegistry;

/// Resolves function parameters to factories of shape `F`
pub struct Introspector<F, R = ResultBase<F>> {
    pub(crate) registry: TypeRegistry<F>,
    _result: PhantomData<fn() -> R>,
}

impl<F: Clone, R: IntrospectionResult<F>> Introspector<F, R> {
    /// Create an introspector, validating the result type first
    pub fn new() -> Result<Self> {
        validate_result_shape::<F, R>()?;
        debug!(result_type = type_name::<R>(), "Created introspector");
        Ok(Self {
            registry: TypeRegistry::new(),
            _result: PhantomData,
        })
    }

    /// Bind `factory` to `key`, replacing any previous binding
    pub fn register(&mut self, key: TypeKey, factory: F) {
        self.registry.register(key, factory);
    }

    /// Bind `factory` to the key of `T`
    pub fn register_for<T: Reflect + ?Sized>(&mut self, factory: F) {
        self.registry.register_for::<T>(factory);
    }

    /// Factory that would be used for `key`
    pub fn lookup(&self, key: &TypeKey) -> Result<F> {
        self.registry.lookup(key)
    }

    /// Install or replace the default factory
    pub fn set_default_factory<S>(&mut self, supplier: S)
    where
        S: Fn(&TypeKey) -> Result<F> + Send + Sync + 'static,
    {
        self.registry.set_default_factory(supplier);
    }

    /// Current exact bindings, without the default factory
    pub fn factory_map(&self) -> &HashMap<TypeKey, F> {
        self.registry.factory_map()
    }

    /// The underlying registry
    pub fn registry(&self) -> &TypeRegistry<F> {
        &self.registry
    }
}

/// Register a factory for `T`
///
/// Free-function form of [`Introspector::register_for`].
pub fn register_factory<T, F, R>(factory: F, introspector: &mut Introspector<F, R>)
where
    T: Reflect + ?Sized,
    F: Clone,
    R: IntrospectionResult<F>,
{
    introspector.register_for::<T>(factory);
}

enum ShapeProbe {}

fn validate_result_shape<F, R: IntrospectionResult<F>>() -> Result<()> {
    let probe = FnType::new(TypeKey::opaque::<ShapeProbe>(Kind::Func), Vec::new());
    let result = R::from_base(ResultBase::new(probe.clone(), FactoryMap::new()));

    if result.signature() != &probe {
        return Err(Error::invalid_result_shape(
            type_name::<R>(),
            format!(
                "signature() returned {} instead of the resolved signature",
                result.signature().name()
            ),
        ));
    }
    if !result.factory_map().is_empty() {
        return Err(Error::invalid_result_shape(
            type_name::<R>(),
            "factory_map() does not return the resolved factories",
        ));
    }
    Ok(())
}
