//! Runtime type identity
//!
//! A [`TypeKey`] is the hashable identity of a parameter type together with
//! the few capabilities resolution needs at runtime: its [`Kind`], the
//! pointee of pointer types, a zero-value allocator, the struct-fill hook and
//! pointer re-wrapping.
//!
//! The pointer form of `T` is `Arc<T>`. Interface dependencies are
//! `Arc<dyn Trait>` and keep the [`Kind::Interface`] shape.

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::ports::{Container, Fill};
use crate::value::Value;

/// Shape of a reflected type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Built-in value types (integers, strings, collections)
    Scalar,
    /// Plain structures
    Struct,
    /// `Arc<T>` over a sized `T`
    Pointer,
    /// `Arc<dyn Trait>` handles
    Interface,
    /// Trailing repeated parameter, see [`Rest`]
    Variadic,
    /// Function types
    Func,
}

type ZeroFn = fn() -> Box<dyn Any + Send + Sync>;
type FillFn = fn(&mut (dyn Any + Send + Sync + 'static), &dyn Container) -> Result<()>;
type PointFn = fn(Value) -> Option<Value>;

/// Identity of a declared type, used as a mapping key
///
/// Equality and hashing use the `TypeId` only.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
    kind: Kind,
    elem: Option<fn() -> TypeKey>,
    zero: Option<ZeroFn>,
    fill: Option<FillFn>,
    point: Option<PointFn>,
}

impl TypeKey {
    /// Key of a reflected type
    pub fn of<T: Reflect + ?Sized>() -> Self {
        T::type_key()
    }

    /// Identity-only key with the given shape
    pub fn opaque<T: ?Sized + 'static>(kind: Kind) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            kind,
            elem: None,
            zero: None,
            fill: None,
            point: None,
        }
    }

    /// Key of a built-in value type
    pub fn scalar<T: Default + Send + Sync + 'static>() -> Self {
        Self {
            zero: Some(zero::<T>),
            ..Self::opaque::<T>(Kind::Scalar)
        }
    }

    /// Key of a structure without injectable fields
    pub fn structure<T: Default + Send + Sync + 'static>() -> Self {
        Self {
            zero: Some(zero::<T>),
            ..Self::opaque::<T>(Kind::Struct)
        }
    }

    /// Key of a structure whose fields are filled through [`Fill`]
    pub fn fillable<T: Fill + Default + Send + Sync + 'static>() -> Self {
        Self {
            fill: Some(fill::<T>),
            ..Self::structure::<T>()
        }
    }

    /// Key of `Arc<T>`
    pub fn pointer<T: Reflect + Clone + Send + Sync>() -> Self {
        Self {
            point: Some(point::<T>),
            ..Self::opaque::<Arc<T>>(Kind::Pointer).with_elem(T::type_key)
        }
    }

    /// Key of `Arc<Arc<T>>`, re-wrapping resolved `Arc<T>` values
    pub fn shared_pointer<T: Reflect + Send + Sync + ?Sized>() -> Self {
        Self {
            point: Some(point::<Arc<T>>),
            ..Self::opaque::<Arc<Arc<T>>>(Kind::Pointer).with_elem(<Arc<T> as Reflect>::type_key)
        }
    }

    /// Key of an interface handle such as `Arc<dyn Trait>`
    pub fn interface<H: ?Sized + 'static>() -> Self {
        Self::opaque::<H>(Kind::Interface)
    }

    /// Key of [`Rest<T>`]
    pub fn variadic<T: Reflect>() -> Self {
        Self::opaque::<Rest<T>>(Kind::Variadic).with_elem(T::type_key)
    }

    /// Attach the element type of a pointer or variadic key
    #[must_use]
    pub fn with_elem(mut self, elem: fn() -> TypeKey) -> Self {
        self.elem = Some(elem);
        self
    }

    /// The underlying `TypeId`
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The declared type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Shape of the type
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Pointee of a pointer key, element of a variadic key
    pub fn elem(&self) -> Option<TypeKey> {
        self.elem.map(|elem| elem())
    }

    /// Allocate a zero-valued instance, if the type has one
    pub fn zero_value(&self) -> Option<Box<dyn Any + Send + Sync>> {
        self.zero.map(|zero| zero())
    }

    /// Whether the type declares injectable fields
    pub fn is_fillable(&self) -> bool {
        self.fill.is_some()
    }

    /// Run the struct-fill hook on an instance of this type
    ///
    /// Types without injectable fields fill trivially.
    pub fn fill_instance(
        &self,
        target: &mut (dyn Any + Send + Sync + 'static),
        container: &dyn Container,
    ) -> Result<()> {
        match self.fill {
            Some(fill) => fill(target, container),
            None => Ok(()),
        }
    }

    /// Wrap a value of the pointee type into this pointer type
    pub fn point(&self, value: Value) -> Option<Value> {
        self.point.and_then(|point| point(value))
    }
}

fn zero<T: Default + Send + Sync + 'static>() -> Box<dyn Any + Send + Sync> {
    Box::new(T::default())
}

fn fill<T: Fill + 'static>(
    target: &mut (dyn Any + Send + Sync + 'static),
    container: &dyn Container,
) -> Result<()> {
    target
        .downcast_mut::<T>()
        .ok_or_else(|| Error::injection(type_name::<T>(), "instance holds a different type"))?
        .fill(container)
}

fn point<T: Reflect + Clone + Send + Sync>(value: Value) -> Option<Value> {
    value.get::<T>().map(|inner| Value::new(Arc::new(inner)))
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeKey")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Types that can appear as introspected parameters
///
/// Implement through [`reflect_value!`](crate::reflect_value),
/// [`reflect_struct!`](crate::reflect_struct),
/// [`reflect_context!`](crate::reflect_context) or
/// [`reflect_interface!`](crate::reflect_interface).
pub trait Reflect: Any {
    /// Key of the type itself
    fn type_key() -> TypeKey;

    /// Key of `Arc<Self>`
    fn pointer_key() -> TypeKey;
}

impl<T: Reflect + Send + Sync + ?Sized> Reflect for Arc<T> {
    fn type_key() -> TypeKey {
        T::pointer_key()
    }

    fn pointer_key() -> TypeKey {
        TypeKey::shared_pointer::<T>()
    }
}

/// Trailing repeated parameter
///
/// Functions taking `Rest<T>` last are variadic and cannot be introspected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rest<T>(pub Vec<T>);

impl<T: Reflect> Reflect for Rest<T> {
    fn type_key() -> TypeKey {
        TypeKey::variadic::<T>()
    }

    fn pointer_key() -> TypeKey {
        TypeKey::opaque::<Arc<Self>>(Kind::Pointer).with_elem(Self::type_key)
    }
}

impl<T: Reflect + Clone + Send + Sync> Reflect for Vec<T> {
    fn type_key() -> TypeKey {
        TypeKey::scalar::<Self>()
    }

    fn pointer_key() -> TypeKey {
        TypeKey::pointer::<Self>()
    }
}

impl<T: Reflect + Clone + Send + Sync> Reflect for Option<T> {
    fn type_key() -> TypeKey {
        TypeKey::scalar::<Self>()
    }

    fn pointer_key() -> TypeKey {
        TypeKey::pointer::<Self>()
    }
}

/// Implement [`Reflect`] for built-in-like value types
#[macro_export]
macro_rules! reflect_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::reflect::Reflect for $ty {
                fn type_key() -> $crate::reflect::TypeKey {
                    $crate::reflect::TypeKey::scalar::<Self>()
                }

                fn pointer_key() -> $crate::reflect::TypeKey {
                    $crate::reflect::TypeKey::pointer::<Self>()
                }
            }
        )*
    };
}

/// Implement [`Reflect`] for structures resolved as a whole
#[macro_export]
macro_rules! reflect_struct {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::reflect::Reflect for $ty {
                fn type_key() -> $crate::reflect::TypeKey {
                    $crate::reflect::TypeKey::structure::<Self>()
                }

                fn pointer_key() -> $crate::reflect::TypeKey {
                    $crate::reflect::TypeKey::pointer::<Self>()
                }
            }
        )*
    };
}

/// Implement [`Reflect`] for context structures implementing [`Fill`]
#[macro_export]
macro_rules! reflect_context {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::reflect::Reflect for $ty {
                fn type_key() -> $crate::reflect::TypeKey {
                    $crate::reflect::TypeKey::fillable::<Self>()
                }

                fn pointer_key() -> $crate::reflect::TypeKey {
                    $crate::reflect::TypeKey::pointer::<Self>()
                }
            }
        )*
    };
}

/// Implement [`Reflect`] for trait objects, e.g. `reflect_interface!(dyn Clock)`
///
/// The injectable form is `Arc<dyn Trait>`.
#[macro_export]
macro_rules! reflect_interface {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::reflect::Reflect for $ty {
                fn type_key() -> $crate::reflect::TypeKey {
                    $crate::reflect::TypeKey::opaque::<Self>($crate::reflect::Kind::Interface)
                }

                fn pointer_key() -> $crate::reflect::TypeKey {
                    $crate::reflect::TypeKey::interface::<::std::sync::Arc<Self>>()
                }
            }
        )*
    };
}

reflect_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);
