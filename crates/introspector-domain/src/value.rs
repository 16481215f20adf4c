//! Dynamic values produced by resolution

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::reflect::{Reflect, TypeKey};

/// A resolved value of some reflected type
///
/// Cloning shares the underlying allocation.
#[derive(Clone)]
pub struct Value {
    key: TypeKey,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Value {
    /// Wrap a concrete value
    pub fn new<T: Reflect + Send + Sync>(value: T) -> Self {
        Self {
            key: TypeKey::of::<T>(),
            inner: Arc::new(value),
        }
    }

    /// Build a value from an already type-erased allocation
    ///
    /// `inner` must hold the type `key` identifies.
    pub fn from_shared(key: TypeKey, inner: Arc<dyn Any + Send + Sync>) -> Self {
        Self { key, inner }
    }

    /// Key of the held type
    pub fn type_key(&self) -> &TypeKey {
        &self.key
    }

    /// Borrow the held value as `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Clone the held value out as `T`
    pub fn get<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    /// Whether the value holds a `T`
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Value").field(&self.key.name()).finish()
    }
}

/// An owned slot a container populates or fills in place
pub struct Instance {
    key: TypeKey,
    slot: Option<Box<dyn Any + Send + Sync>>,
}

impl Instance {
    /// Allocate the zero value of `key`, or an empty slot if it has none
    pub fn zero(key: TypeKey) -> Self {
        Self {
            key,
            slot: key.zero_value(),
        }
    }

    /// An empty slot for `key`
    pub fn empty(key: TypeKey) -> Self {
        Self { key, slot: None }
    }

    /// Key of the slot's type
    pub fn type_key(&self) -> &TypeKey {
        &self.key
    }

    /// Whether nothing has been allocated or injected yet
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Replace the slot contents
    ///
    /// `value` must hold the type this instance was created for.
    pub fn set(&mut self, value: Box<dyn Any + Send + Sync>) {
        self.slot = Some(value);
    }

    /// Mutable access to the current contents
    pub fn slot_mut(&mut self) -> Option<&mut (dyn Any + Send + Sync + 'static)> {
        self.slot.as_deref_mut()
    }

    /// Take the contents out as `T`
    pub fn take<T: Any>(self) -> Option<T> {
        self.slot?.downcast::<T>().ok().map(|value| *value)
    }

    /// Freeze the contents into a shareable [`Value`]
    pub fn into_value(self) -> Result<Value> {
        let slot = self
            .slot
            .ok_or_else(|| Error::injection(self.key.name(), "instance was never populated"))?;
        Ok(Value::from_shared(self.key, Arc::from(slot)))
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type", &self.key.name())
            .field("populated", &self.slot.is_some())
            .finish()
    }
}
