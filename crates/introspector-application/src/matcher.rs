//! Signature Matcher
//!
//! Maps each parameter of a function onto a factory. Every position is
//! attempted so callers see all unresolvable parameters in one pass; a
//! result is produced only when all of them resolve.

use introspector_domain::error::{Error, ResolutionError};
use introspector_domain::result::{FactoryMap, IntrospectionResult, ResultBase};
use introspector_domain::signature::{Callable, FnType};
use tracing::{debug, warn};

use crate::introspector::Introspector;

impl<F: Clone, R: IntrospectionResult<F>> Introspector<F, R> {
    /// Resolve a factory for every parameter of `callable`
    pub fn introspect<C, Args>(&self, callable: &C) -> Result<R, Vec<ResolutionError>>
    where
        C: Callable<Args>,
    {
        self.introspect_signature(FnType::of(callable))
    }

    /// Resolve a factory for every parameter of a described signature
    pub fn introspect_signature(&self, signature: FnType) -> Result<R, Vec<ResolutionError>> {
        if let Some(position) = signature.variadic_position() {
            warn!(signature = signature.name(), "Rejected variadic signature");
            return Err(vec![ResolutionError::new(
                position,
                signature.params()[position],
                Error::variadic_signature(signature.name()),
            )]);
        }

        let mut factories = FactoryMap::with_capacity(signature.arity());
        let mut errors = Vec::new();
        for (position, key) in signature.params().iter().enumerate() {
            match self.registry.lookup(key) {
                Ok(factory) => {
                    factories.insert(position, factory);
                }
                Err(cause) => errors.push(ResolutionError::new(position, *key, cause)),
            }
        }

        if !errors.is_empty() {
            warn!(
                signature = signature.name(),
                failed = errors.len(),
                arity = signature.arity(),
                "Introspection failed"
            );
            return Err(errors);
        }

        debug!(
            signature = signature.name(),
            arity = signature.arity(),
            "Introspected signature"
        );
        Ok(R::from_base(ResultBase::new(signature, factories)))
    }
}
