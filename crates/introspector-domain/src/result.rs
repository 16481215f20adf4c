//! Introspection result model

use std::collections::HashMap;

use crate::signature::FnType;

/// Parameter position to bound factory
pub type FactoryMap<F> = HashMap<usize, F>;

/// Resolved signature and its dense position to factory mapping
#[derive(Debug, Clone)]
pub struct ResultBase<F> {
    signature: FnType,
    factories: FactoryMap<F>,
}

impl<F> ResultBase<F> {
    /// Create a result base
    pub fn new(signature: FnType, factories: FactoryMap<F>) -> Self {
        Self {
            signature,
            factories,
        }
    }

    /// The introspected function's descriptor
    pub fn signature(&self) -> &FnType {
        &self.signature
    }

    /// Factories keyed by parameter position
    pub fn factory_map(&self) -> &FactoryMap<F> {
        &self.factories
    }

    /// Factory bound to one parameter position
    pub fn factory(&self, position: usize) -> Option<&F> {
        self.factories.get(&position)
    }
}

/// Capability every introspection result type provides
///
/// Declaration-site result types hold a [`ResultBase`] next to their own data
/// and hand it back unchanged from the accessors. `Introspector::new` checks
/// this before any introspection happens.
pub trait IntrospectionResult<F>: Sized {
    /// Wrap a freshly resolved base
    fn from_base(base: ResultBase<F>) -> Self;

    /// The introspected function's descriptor
    fn signature(&self) -> &FnType;

    /// Factories keyed by parameter position
    fn factory_map(&self) -> &FactoryMap<F>;
}

impl<F> IntrospectionResult<F> for ResultBase<F> {
    fn from_base(base: ResultBase<F>) -> Self {
        base
    }

    fn signature(&self) -> &FnType {
        &self.signature
    }

    fn factory_map(&self) -> &FactoryMap<F> {
        &self.factories
    }
}
