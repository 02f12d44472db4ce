//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for capability discovery and configuration assembly
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed structured text (job definition, descriptor, core config)
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A configuration path that does not resolve to a value
    #[error("Missing key: {path}")]
    MissingKey {
        /// The requested path
        path: String,
    },

    /// A required resource could not be located or read
    #[error("Missing resource {resource}: {message}")]
    MissingResource {
        /// Resource location or well-known name
        resource: String,
        /// Description of the failure
        message: String,
    },

    /// A discovered implementation does not satisfy its capability contract
    #[error(
        "Implementation '{implementation}' listed in {location} does not implement capability {capability}"
    )]
    ContractViolation {
        /// Capability identifier
        capability: String,
        /// Offending implementation name
        implementation: String,
        /// Where the implementation was listed
        location: String,
    },

    /// A manifest line names an implementation that is not registered
    #[error(
        "Failed to load implementation (capability: {capability}, line: {implementation}) in {location}: no such implementation is registered"
    )]
    UnresolvedImplementation {
        /// Capability identifier
        capability: String,
        /// The manifest line
        implementation: String,
        /// Manifest location
        location: String,
    },

    /// An implementation could not be constructed
    #[error(
        "Implementation '{implementation}' of capability {capability} couldn't be instantiated: {message}"
    )]
    Instantiation {
        /// Capability identifier
        capability: String,
        /// Failing implementation name
        implementation: String,
        /// Factory error message
        message: String,
    },

    /// Requested plugins without a matching descriptor
    #[error("{message}")]
    UnresolvedPlugin {
        /// Every unmatched plugin name
        plugins: Vec<String>,
        /// Full diagnostic message
        message: String,
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

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
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

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Parsing and lookup error creation methods
impl Error {
    /// Create a parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
            source: None,
        }
    }

    /// Create a parse error with source
    pub fn parse_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Parse {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a missing key error
    pub fn missing_key<S: Into<String>>(path: S) -> Self {
        Self::MissingKey { path: path.into() }
    }

    /// Create a missing resource error
    pub fn missing_resource<R: Into<String>, S: Into<String>>(resource: R, message: S) -> Self {
        Self::MissingResource {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Capability error creation methods
impl Error {
    /// Create a contract violation error
    pub fn contract_violation(
        capability: impl Into<String>,
        implementation: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self::ContractViolation {
            capability: capability.into(),
            implementation: implementation.into(),
            location: location.into(),
        }
    }

    /// Create an unresolved implementation error
    pub fn unresolved_implementation(
        capability: impl Into<String>,
        implementation: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self::UnresolvedImplementation {
            capability: capability.into(),
            implementation: implementation.into(),
            location: location.into(),
        }
    }

    /// Create an instantiation error
    pub fn instantiation(
        capability: impl Into<String>,
        implementation: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Instantiation {
            capability: capability.into(),
            implementation: implementation.into(),
            message: message.into(),
        }
    }

    /// Create an unresolved plugin error listing every missing plugin
    pub fn unresolved_plugin<S: Into<String>>(plugins: Vec<String>, message: S) -> Self {
        Self::UnresolvedPlugin {
            plugins,
            message: message.into(),
        }
    }
}

// Configuration error creation methods
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
}

// I/O and internal error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
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

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::parse_with_source(err.to_string(), err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io_with_source(err.to_string(), err)
    }
}
