//! Tests for memoized introspection

use std::sync::Arc;

use introspector_application::Introspector;
use introspector_domain::{FnType, Kind, TypeKey, Value};
use introspector_infrastructure::{CacheConfig, MemoizedIntrospector};

type Constant = Arc<dyn Fn() -> Value + Send + Sync>;

fn constant(value: i32) -> Constant {
    Arc::new(move || Value::new(value))
}

fn handler(_count: i32) {}

fn missing(_name: String) {}

fn memoized(enabled: bool) -> MemoizedIntrospector<Constant> {
    let mut introspector = Introspector::<Constant>::new().unwrap();
    introspector.register_for::<i32>(constant(7));
    MemoizedIntrospector::new(introspector, &CacheConfig { enabled })
}

#[test]
fn test_results_are_shared_per_signature() {
    let cache = memoized(true);

    let first = cache.introspect(&handler).unwrap();
    let second = cache.introspect(&handler).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
    assert_eq!(first.factory(0).unwrap()().get::<i32>(), Some(7));
}

#[test]
fn test_failures_are_not_cached() {
    let cache = memoized(true);

    let errors = cache.introspect(&missing).err().unwrap();

    assert_eq!(errors.len(), 1);
    assert!(cache.is_empty());
}

#[test]
fn test_disabled_cache_stores_nothing() {
    let cache = memoized(false);

    let first = cache.introspect(&handler).unwrap();
    let second = cache.introspect(&handler).unwrap();

    assert!(!cache.is_enabled());
    assert!(!Arc::ptr_eq(&first, &second));
    assert!(cache.is_empty());
}

#[test]
fn test_invalidate() {
    let cache = memoized(true);
    cache.introspect(&handler).unwrap();

    cache.invalidate();

    assert!(cache.is_empty());
}

#[test]
fn test_rebinding_through_inner_mut_clears_cache() {
    let mut cache = memoized(true);
    cache.introspect(&handler).unwrap();

    cache.inner_mut().register_for::<i32>(constant(9));

    assert!(cache.is_empty());
    let result = cache.introspect(&handler).unwrap();
    assert_eq!(result.factory(0).unwrap()().get::<i32>(), Some(9));
    assert_eq!(cache.inner().factory_map().len(), 1);
}

#[test]
fn test_hand_built_signatures_are_keyed_by_parameters() {
    enum Route {}
    let cache = memoized(true);
    let counted = FnType::new(TypeKey::opaque::<Route>(Kind::Func), vec![TypeKey::of::<i32>()]);
    let named = FnType::new(
        TypeKey::opaque::<Route>(Kind::Func),
        vec![TypeKey::of::<String>()],
    );

    cache.introspect_signature(counted).unwrap();
    let errors = cache.introspect_signature(named).err().unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(cache.len(), 1);
}
