//! Memoized introspection
//!
//! Results depend only on the signature and the registry state, so a
//! configured [`Introspector`] can share them per signature. Failures are
//! never cached.

use std::sync::Arc;

use dashmap::DashMap;
use introspector_application::Introspector;
use introspector_domain::error::ResolutionError;
use introspector_domain::reflect::TypeKey;
use introspector_domain::result::{IntrospectionResult, ResultBase};
use introspector_domain::signature::{Callable, FnType};
use tracing::{debug, trace};

use crate::config::CacheConfig;

/// Function type and parameter list of a memoized signature
type SignatureKey = (TypeKey, Vec<TypeKey>);

/// Introspector that shares successful results per signature
pub struct MemoizedIntrospector<F, R = ResultBase<F>> {
    introspector: Introspector<F, R>,
    results: DashMap<SignatureKey, Arc<R>>,
    enabled: bool,
}

impl<F: Clone, R: IntrospectionResult<F>> MemoizedIntrospector<F, R> {
    /// Wrap a configured introspector
    pub fn new(introspector: Introspector<F, R>, config: &CacheConfig) -> Self {
        debug!(enabled = config.enabled, "Created memoized introspector");
        Self {
            introspector,
            results: DashMap::new(),
            enabled: config.enabled,
        }
    }

    /// Resolve `callable`, reusing an earlier result for the same function type
    pub fn introspect<C, Args>(&self, callable: &C) -> Result<Arc<R>, Vec<ResolutionError>>
    where
        C: Callable<Args>,
    {
        self.introspect_signature(FnType::of(callable))
    }

    /// Resolve a described signature, reusing an earlier result for it
    ///
    /// Hand-built descriptors sharing a function key but not a parameter list
    /// are cached separately.
    pub fn introspect_signature(&self, signature: FnType) -> Result<Arc<R>, Vec<ResolutionError>> {
        if !self.enabled {
            return self.introspector.introspect_signature(signature).map(Arc::new);
        }

        let key = (*signature.key(), signature.params().to_vec());
        if let Some(cached) = self.results.get(&key) {
            trace!(signature = signature.name(), "Introspection cache hit");
            return Ok(Arc::clone(cached.value()));
        }

        let result = Arc::new(self.introspector.introspect_signature(signature)?);
        Ok(Arc::clone(self.results.entry(key).or_insert(result).value()))
    }

    /// Drop every cached result
    ///
    /// Needed after the wrapped introspector's bindings change.
    pub fn invalidate(&self) {
        debug!(cached = self.results.len(), "Invalidated introspection cache");
        self.results.clear();
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Whether results are cached at all
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The wrapped introspector
    pub fn inner(&self) -> &Introspector<F, R> {
        &self.introspector
    }

    /// Mutable access to the wrapped introspector
    ///
    /// Clears the cache, since bindings may change through the returned
    /// reference.
    pub fn inner_mut(&mut self) -> &mut Introspector<F, R> {
        self.results.clear();
        &mut self.introspector
    }
}
