//! Singleton container
//!
//! In-process implementation of the [`Container`] port. Singletons are keyed
//! by the [`TypeKey`] of the registered type, so `T`, `Arc<T>` and
//! `Arc<dyn Trait>` are distinct registrations.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use introspector_domain::error::{Error, Result};
use introspector_domain::ports::Container;
use introspector_domain::reflect::{Reflect, TypeKey};
use introspector_domain::value::{Instance, Value};
use once_cell::sync::OnceCell;
use tracing::{debug, trace};

type CloneFn = fn(&Value) -> Option<Box<dyn Any + Send + Sync>>;
type Constructor = Box<dyn Fn(&SingletonContainer) -> Result<Value> + Send + Sync>;

enum Source {
    Ready(Value),
    Lazy {
        cell: OnceCell<Value>,
        construct: Constructor,
    },
}

struct Singleton {
    source: Source,
    clone: CloneFn,
}

thread_local! {
    static CONSTRUCTING: RefCell<HashSet<TypeKey>> = RefCell::new(HashSet::new());
}

/// Marks a lazy singleton as under construction on the current thread
struct ConstructionGuard(TypeKey);

impl ConstructionGuard {
    fn enter(key: TypeKey) -> Result<Self> {
        if CONSTRUCTING.with(|keys| keys.borrow_mut().insert(key)) {
            Ok(Self(key))
        } else {
            Err(Error::injection(key.name(), "cyclic singleton construction"))
        }
    }
}

impl Drop for ConstructionGuard {
    fn drop(&mut self) {
        CONSTRUCTING.with(|keys| {
            keys.borrow_mut().remove(&self.0);
        });
    }
}

impl Singleton {
    fn value(&self, key: TypeKey, container: &SingletonContainer) -> Result<Value> {
        match &self.source {
            Source::Ready(value) => Ok(value.clone()),
            Source::Lazy { cell, construct } => {
                if let Some(value) = cell.get() {
                    return Ok(value.clone());
                }
                // The cell blocks re-entrant initialization, so cycles must fail first
                let _guard = ConstructionGuard::enter(key)?;
                cell.get_or_try_init(|| construct(container)).cloned()
            }
        }
    }
}

fn clone_as<T: Any + Clone + Send + Sync>(value: &Value) -> Option<Box<dyn Any + Send + Sync>> {
    value
        .get::<T>()
        .map(|inner| Box::new(inner) as Box<dyn Any + Send + Sync>)
}

/// Thread-safe registry of shared dependencies
///
/// Clones share the same registrations.
#[derive(Clone, Default)]
pub struct SingletonContainer {
    entries: Arc<DashMap<TypeKey, Arc<Singleton>>>,
}

impl SingletonContainer {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an eagerly constructed singleton, replacing any previous one
    pub fn singleton<T: Reflect + Clone + Send + Sync>(&self, value: T) {
        self.insert(
            TypeKey::of::<T>(),
            Singleton {
                source: Source::Ready(Value::new(value)),
                clone: clone_as::<T>,
            },
        );
    }

    /// Register a singleton constructed at most once, on first use
    ///
    /// The constructor runs without any registry lock held and may resolve
    /// other singletons from the container it is given. Resolving a
    /// singleton that is already being constructed on the same thread fails
    /// with an injection error.
    pub fn lazy_singleton<T, C>(&self, constructor: C)
    where
        T: Reflect + Clone + Send + Sync,
        C: Fn(&SingletonContainer) -> Result<T> + Send + Sync + 'static,
    {
        self.insert(
            TypeKey::of::<T>(),
            Singleton {
                source: Source::Lazy {
                    cell: OnceCell::new(),
                    construct: Box::new(move |container| constructor(container).map(Value::new)),
                },
                clone: clone_as::<T>,
            },
        );
    }

    /// Whether a singleton is registered for `key`
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of registered singletons
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop the registration for `key`, returning whether one existed
    pub fn remove(&self, key: &TypeKey) -> bool {
        self.entries.remove(key).is_some()
    }

    fn insert(&self, key: TypeKey, singleton: Singleton) {
        debug!(type_name = key.name(), "Registered singleton");
        self.entries.insert(key, Arc::new(singleton));
    }

    // The guard is released before the singleton is constructed.
    fn entry(&self, key: &TypeKey) -> Result<Arc<Singleton>> {
        self.entries
            .get(key)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| Error::dependency_not_found(key.name()))
    }
}

impl Container for SingletonContainer {
    fn inject_into(&self, target: &mut Instance) -> Result<()> {
        let key = *target.type_key();
        trace!(type_name = key.name(), "Injecting singleton");
        let entry = self.entry(&key)?;
        let value = entry.value(key, self)?;
        let cloned = (entry.clone)(&value)
            .ok_or_else(|| Error::injection(key.name(), "registered value holds a different type"))?;
        target.set(cloned);
        Ok(())
    }

    fn fill(&self, target: &mut Instance) -> Result<()> {
        let key = *target.type_key();
        trace!(type_name = key.name(), "Filling instance");
        let slot = target
            .slot_mut()
            .ok_or_else(|| Error::injection(key.name(), "cannot fill an unallocated instance"))?;
        key.fill_instance(slot, self)
    }

    fn inject_singleton(&self, key: &TypeKey) -> Result<Value> {
        self.entry(key)?.value(*key, self)
    }
}

impl fmt::Debug for SingletonContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&'static str> = self.entries.iter().map(|entry| entry.key().name()).collect();
        f.debug_struct("SingletonContainer")
            .field("singletons", &names)
            .finish()
    }
}
