//! Tests for the singleton container

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use introspector_domain::{
    Container, ContainerExt, Error, Fill, Instance, Result, TypeKey, reflect_context,
    reflect_struct,
};
use introspector_infrastructure::SingletonContainer;

#[derive(Debug, Clone, Default, PartialEq)]
struct Database {
    url: String,
}

reflect_struct!(Database);

#[derive(Debug, Clone, Default, PartialEq)]
struct Repository {
    database: Database,
}

reflect_struct!(Repository);

#[derive(Debug, Clone, Default)]
struct Handler {
    repository: Option<Repository>,
}

impl Fill for Handler {
    fn fill(&mut self, container: &dyn Container) -> Result<()> {
        self.repository = Some(container.resolve::<Repository>()?);
        Ok(())
    }
}

reflect_context!(Handler);

fn database() -> Database {
    Database {
        url: "sqlite::memory:".to_string(),
    }
}

#[test]
fn test_singleton_is_resolved() {
    let container = SingletonContainer::new();
    container.singleton(database());

    assert_eq!(container.resolve::<Database>().unwrap(), database());
}

#[test]
fn test_last_registration_wins() {
    let container = SingletonContainer::new();
    container.singleton(1_u32);
    container.singleton(2_u32);

    assert_eq!(container.len(), 1);
    assert_eq!(container.resolve::<u32>().unwrap(), 2);
}

#[test]
fn test_value_and_pointer_are_distinct_registrations() {
    let container = SingletonContainer::new();
    container.singleton(database());

    assert!(container.contains(&TypeKey::of::<Database>()));
    assert!(!container.contains(&TypeKey::of::<Arc<Database>>()));
    assert!(
        container
            .resolve::<Arc<Database>>()
            .unwrap_err()
            .is_dependency_not_found()
    );
}

#[test]
fn test_missing_dependency() {
    let container = SingletonContainer::new();

    let err = container.resolve::<Database>().unwrap_err();
    assert!(matches!(err, Error::DependencyNotFound { .. }));
    assert!(
        container
            .inject_singleton(&TypeKey::of::<Database>())
            .unwrap_err()
            .is_dependency_not_found()
    );
}

#[test]
fn test_lazy_singleton_constructed_once() {
    let container = SingletonContainer::new();
    let constructed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&constructed);
    container.lazy_singleton(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(database())
    });

    assert_eq!(constructed.load(Ordering::SeqCst), 0);
    assert_eq!(container.resolve::<Database>().unwrap(), database());
    assert_eq!(container.resolve::<Database>().unwrap(), database());
    assert_eq!(constructed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_lazy_singleton_resolves_other_singletons() {
    let container = SingletonContainer::new();
    container.singleton(database());
    container.lazy_singleton(|container| {
        Ok(Repository {
            database: container.resolve::<Database>()?,
        })
    });

    assert_eq!(container.resolve::<Repository>().unwrap().database, database());
}

#[test]
fn test_lazy_singleton_failure_is_retried() {
    let container = SingletonContainer::new();
    container.lazy_singleton(|container| {
        Ok(Repository {
            database: container.resolve::<Database>()?,
        })
    });

    assert!(
        container
            .resolve::<Repository>()
            .unwrap_err()
            .is_dependency_not_found()
    );

    container.singleton(database());
    assert!(container.resolve::<Repository>().is_ok());
}

#[test]
fn test_lazy_singleton_shared_across_threads() {
    let container = SingletonContainer::new();
    let constructed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&constructed);
    container.lazy_singleton(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(database()))
    });

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let container = container.clone();
            thread::spawn(move || container.resolve::<Arc<Database>>().unwrap())
        })
        .collect();
    let resolved: Vec<Arc<Database>> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(constructed.load(Ordering::SeqCst), 1);
    assert!(resolved.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
}

#[test]
fn test_fill_resolves_fields() {
    let container = SingletonContainer::new();
    container.singleton(Repository {
        database: database(),
    });

    let mut instance = Instance::zero(TypeKey::of::<Handler>());
    container.fill(&mut instance).unwrap();

    let handler = instance.take::<Handler>().unwrap();
    assert_eq!(handler.repository.unwrap().database, database());
}

#[test]
fn test_fill_without_injectable_fields() {
    let container = SingletonContainer::new();

    let mut instance = Instance::zero(TypeKey::of::<Database>());
    container.fill(&mut instance).unwrap();

    assert_eq!(instance.take::<Database>(), Some(Database::default()));
}

#[test]
fn test_fill_unallocated_instance() {
    let container = SingletonContainer::new();

    let mut instance = Instance::empty(TypeKey::of::<Handler>());
    let err = container.fill(&mut instance).unwrap_err();

    assert!(matches!(err, Error::Injection { .. }));
}

#[test]
fn test_inject_singleton_returns_shared_value() {
    let container = SingletonContainer::new();
    container.singleton(database());

    let value = container
        .inject_singleton(&TypeKey::of::<Database>())
        .unwrap();
    assert_eq!(value.type_key(), &TypeKey::of::<Database>());
    assert_eq!(value.downcast_ref::<Database>(), Some(&database()));
}

#[test]
fn test_remove_and_len() {
    let container = SingletonContainer::new();
    assert!(container.is_empty());

    container.singleton(database());
    container.singleton(7_i64);
    assert_eq!(container.len(), 2);

    assert!(container.remove(&TypeKey::of::<i64>()));
    assert!(!container.remove(&TypeKey::of::<i64>()));
    assert_eq!(container.len(), 1);
}

#[test]
fn test_clones_share_registrations() {
    let container = SingletonContainer::new();
    let clone = container.clone();

    clone.singleton(database());

    assert!(container.contains(&TypeKey::of::<Database>()));
}

#[test]
fn test_self_referencing_lazy_singleton_fails() {
    let container = SingletonContainer::new();
    container.lazy_singleton(|container| container.resolve::<i64>().map(|value| value + 1));

    let err = container.resolve::<i64>().unwrap_err();

    assert!(matches!(err, Error::Injection { .. }));
    assert!(err.to_string().contains("cyclic singleton construction"));
    // Nothing was cached, so the next attempt fails the same way
    assert!(container.resolve::<i64>().is_err());
}

#[test]
fn test_lazy_singleton_cycle_fails() {
    let container = SingletonContainer::new();
    container.lazy_singleton(|container| {
        Ok(Repository {
            database: container.resolve::<Database>()?,
        })
    });
    container.lazy_singleton(|container| {
        container.resolve::<Repository>()?;
        Ok(database())
    });

    let err = container.resolve::<Repository>().unwrap_err();

    assert!(err.to_string().contains("cyclic singleton construction"));
}
