//! Error handling types

use std::fmt;

use thiserror::Error;

use crate::reflect::TypeKey;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error accepted from user-supplied factories and containers
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for parameter resolution
#[derive(Error, Debug)]
pub enum Error {
    /// The declared result type does not expose the resolved base
    #[error("Invalid result shape for {result_type}: {reason}")]
    InvalidResultShape {
        /// Name of the offending result type
        result_type: &'static str,
        /// What the shape check observed
        reason: String,
    },

    /// The introspected function takes a trailing repeated parameter
    #[error("Variadic signature unsupported: {signature}")]
    VariadicSignatureUnsupported {
        /// Name of the introspected function type
        signature: &'static str,
    },

    /// No exact binding and no default factory for the type
    #[error("No factory found for type {type_name}")]
    FactoryNotFound {
        /// The type that could not be bound
        type_name: &'static str,
    },

    /// The dependency container has no provider for the type
    #[error("Dependency not found: {type_name}")]
    DependencyNotFound {
        /// The type nothing provides
        type_name: &'static str,
    },

    /// The dependency container failed for a reason other than a missing provider
    #[error("Injection failed for {type_name}: {message}")]
    Injection {
        /// The type being injected
        type_name: &'static str,
        /// Description of the failure
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Error passed through unchanged from a user-supplied factory
    #[error("{0}")]
    Generic(#[from] BoxError),
}

// Resolution error creation methods
impl Error {
    /// Create an invalid result shape error
    pub fn invalid_result_shape<S: Into<String>>(result_type: &'static str, reason: S) -> Self {
        Self::InvalidResultShape {
            result_type,
            reason: reason.into(),
        }
    }

    /// Create a variadic signature error
    pub fn variadic_signature(signature: &'static str) -> Self {
        Self::VariadicSignatureUnsupported { signature }
    }

    /// Create a factory not found error
    pub fn factory_not_found(type_name: &'static str) -> Self {
        Self::FactoryNotFound { type_name }
    }

    /// Create a dependency not found error
    pub fn dependency_not_found(type_name: &'static str) -> Self {
        Self::DependencyNotFound { type_name }
    }

    /// Create an injection error
    pub fn injection<S: Into<String>>(type_name: &'static str, message: S) -> Self {
        Self::Injection {
            type_name,
            message: message.into(),
        }
    }

    /// Create a generic error from a message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into().into())
    }

    /// Whether this error reports a type nothing in the container provides
    pub fn is_dependency_not_found(&self) -> bool {
        matches!(self, Self::DependencyNotFound { .. })
    }

    /// Whether this error reports a type with no bound factory
    pub fn is_factory_not_found(&self) -> bool {
        matches!(self, Self::FactoryNotFound { .. })
    }
}

// Configuration and I/O error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Failure to bind one parameter position of an introspected function
#[derive(Debug)]
pub struct ResolutionError {
    position: usize,
    type_key: TypeKey,
    cause: Error,
}

impl ResolutionError {
    /// Create a resolution error for a parameter position
    pub fn new(position: usize, type_key: TypeKey, cause: Error) -> Self {
        Self {
            position,
            type_key,
            cause,
        }
    }

    /// Zero-based parameter position
    pub fn position(&self) -> usize {
        self.position
    }

    /// The parameter type that failed to resolve
    pub fn type_key(&self) -> &TypeKey {
        &self.type_key
    }

    /// The underlying failure, unchanged
    pub fn cause(&self) -> &Error {
        &self.cause
    }

    /// Consume the error, keeping only the underlying failure
    pub fn into_cause(self) -> Error {
        self.cause
    }

    /// Whether the underlying failure is a missing dependency
    pub fn is_dependency_not_found(&self) -> bool {
        self.cause.is_dependency_not_found()
    }
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parameter {} ({}): {}",
            self.position,
            self.type_key.name(),
            self.cause
        )
    }
}

impl std::error::Error for ResolutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::generic(s)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::generic(s)
    }
}
