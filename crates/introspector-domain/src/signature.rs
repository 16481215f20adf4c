//! Function signatures
//!
//! [`Callable`] is implemented for every `Fn` of up to twelve parameters whose
//! parameter types implement [`Reflect`], so non-callable values never reach
//! the matcher.

use std::fmt;

use crate::reflect::{Kind, Reflect, TypeKey};

/// Type descriptor of an introspected function
#[derive(Clone)]
pub struct FnType {
    key: TypeKey,
    params: Vec<TypeKey>,
}

impl FnType {
    /// Describe a signature by hand
    pub fn new(key: TypeKey, params: Vec<TypeKey>) -> Self {
        Self { key, params }
    }

    /// Descriptor of a callable value
    pub fn of<C: Callable<Args>, Args>(_callable: &C) -> Self {
        C::fn_type()
    }

    /// Key of the function type itself
    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    /// Name of the function type
    pub fn name(&self) -> &'static str {
        self.key.name()
    }

    /// Parameter keys in declaration order
    pub fn params(&self) -> &[TypeKey] {
        &self.params
    }

    /// Number of parameters
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Position of the trailing repeated parameter, if any
    pub fn variadic_position(&self) -> Option<usize> {
        self.params
            .last()
            .filter(|param| param.kind() == Kind::Variadic)
            .map(|_| self.params.len() - 1)
    }

    /// Whether the last parameter is a [`Rest`](crate::reflect::Rest)
    pub fn is_variadic(&self) -> bool {
        self.variadic_position().is_some()
    }
}

impl PartialEq for FnType {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FnType {}

impl fmt::Debug for FnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnType")
            .field("name", &self.key.name())
            .field("params", &self.params.iter().map(TypeKey::name).collect::<Vec<_>>())
            .finish()
    }
}

/// Functions whose parameter list can be introspected
///
/// `Args` is `(Ret, A1, .., An)` and is inferred at the call site.
pub trait Callable<Args>: 'static {
    /// Descriptor of the implementing function type
    fn fn_type() -> FnType;
}

macro_rules! impl_callable {
    ($($arg:ident),*) => {
        impl<Func, Ret, $($arg,)*> Callable<(Ret, $($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Ret + 'static,
            $($arg: Reflect,)*
        {
            fn fn_type() -> FnType {
                FnType::new(
                    TypeKey::opaque::<Func>(Kind::Func),
                    vec![$(TypeKey::of::<$arg>()),*],
                )
            }
        }
    };
}

impl_callable!();
impl_callable!(A1);
impl_callable!(A1, A2);
impl_callable!(A1, A2, A3);
impl_callable!(A1, A2, A3, A4);
impl_callable!(A1, A2, A3, A4, A5);
impl_callable!(A1, A2, A3, A4, A5, A6);
impl_callable!(A1, A2, A3, A4, A5, A6, A7);
impl_callable!(A1, A2, A3, A4, A5, A6, A7, A8);
impl_callable!(A1, A2, A3, A4, A5, A6, A7, A8, A9);
impl_callable!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
impl_callable!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
impl_callable!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);
