//! Domain constants

/// Largest parameter count [`Callable`](crate::signature::Callable) is implemented for
pub const MAX_ARITY: usize = 12;
