//! # Introspector Domain
//!
//! Types and ports of the parameter-factory resolution engine.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`reflect`] | `TypeKey` identities and the `Reflect` opt-in |
//! | [`value`] | Dynamic values and injectable instances |
//! | [`signature`] | Function descriptors and the `Callable` trait |
//! | [`result`] | Result model shared by every introspection |
//! | [`ports`] | Dependency container contract and struct-fill hook |
//! | [`error`] | Error kinds and per-position resolution errors |

pub mod constants;
pub mod error;
pub mod ports;
pub mod reflect;
pub mod result;
pub mod signature;
pub mod value;

pub use error::{BoxError, Error, ResolutionError, Result};
pub use ports::{Container, ContainerExt, Fill};
pub use reflect::{Kind, Reflect, Rest, TypeKey};
pub use result::{FactoryMap, IntrospectionResult, ResultBase};
pub use signature::{Callable, FnType};
pub use value::{Instance, Value};
