//! Error handling types

use crate::value_objects::TypeDescriptor;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wireup
///
/// The first four variants are wiring errors: they describe a constructor
/// graph that cannot be built and are discovered either at registration time
/// or during a resolution call. None of them is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// A constructor or capability binding was rejected at registration time
    #[error("Registration error for '{constructor}': {message}")]
    Registration {
        /// Name of the rejected constructor or binding
        constructor: String,
        /// Why it was rejected
        message: String,
    },

    /// A requested scalar type has no matching constructor
    #[error("No constructor defined for type '{dependency}'")]
    MissingDependency {
        /// The type nobody produces
        dependency: TypeDescriptor,
    },

    /// A dependency edge closes a cycle
    #[error("Cycle detected for parameter '{parameter}' while resolving type '{dependent}'")]
    Cycle {
        /// The parameter type that is already being resolved
        parameter: TypeDescriptor,
        /// The type whose constructor asked for it
        dependent: TypeDescriptor,
    },

    /// A scalar request is satisfied by more than one value
    #[error("Ambiguity detected for type '{dependency}': {candidates} candidates")]
    AmbiguousDependency {
        /// The requested type
        dependency: TypeDescriptor,
        /// Number of stored values when the argument was bound
        candidates: usize,
    },

    /// An instance did not have the type its descriptor promised
    #[error("Type mismatch: expected '{expected}', found '{found}'")]
    TypeMismatch {
        /// Type the consumer asked for
        expected: &'static str,
        /// Type the instance was erased as
        found: &'static str,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Wiring error creation methods
impl Error {
    /// Create a registration error
    pub fn registration<C: Into<String>, M: Into<String>>(constructor: C, message: M) -> Self {
        Self::Registration {
            constructor: constructor.into(),
            message: message.into(),
        }
    }

    /// Create a missing dependency error
    pub fn missing_dependency(dependency: TypeDescriptor) -> Self {
        Self::MissingDependency { dependency }
    }

    /// Create a cycle error for the edge `dependent -> parameter`
    pub fn cycle(parameter: TypeDescriptor, dependent: TypeDescriptor) -> Self {
        Self::Cycle {
            parameter,
            dependent,
        }
    }

    /// Create an ambiguous dependency error
    pub fn ambiguous(dependency: TypeDescriptor, candidates: usize) -> Self {
        Self::AmbiguousDependency {
            dependency,
            candidates,
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch { expected, found }
    }

    /// Whether this error describes an unbuildable constructor graph
    pub fn is_wiring_error(&self) -> bool {
        matches!(
            self,
            Self::Registration { .. }
                | Self::MissingDependency { .. }
                | Self::Cycle { .. }
                | Self::AmbiguousDependency { .. }
        )
    }

    /// The type a resolution error is about, if any
    pub fn offending_type(&self) -> Option<TypeDescriptor> {
        match self {
            Self::MissingDependency { dependency } => Some(*dependency),
            Self::Cycle { parameter, .. } => Some(*parameter),
            Self::AmbiguousDependency { dependency, .. } => Some(*dependency),
            _ => None,
        }
    }
}

// Configuration and I/O error creation methods
impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
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
