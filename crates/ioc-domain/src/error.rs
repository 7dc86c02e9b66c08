//! Error handling types

use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by the contextual variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the IoC registry
///
/// Every failure is returned to the immediate caller; the registry never
/// substitutes a default instance.
#[derive(Error, Debug)]
pub enum Error {
    /// The default scope setting is absent or blank, or an explicit scope
    /// name was blank
    #[error("Configuration missing: '{key}' is not set")]
    ConfigurationMissing {
        /// The configuration key that was expected
        key: String,
    },

    /// No scope is registered under the requested name
    #[error("Scope not found: {scope}")]
    ScopeNotFound {
        /// The requested scope name
        scope: String,
    },

    /// The contract has no binding in the scope or any of its ancestors
    #[error("No binding for contract '{contract}' in scope '{scope}'")]
    BindingNotFound {
        /// The requested contract
        contract: String,
        /// The scope the lookup started from
        scope: String,
    },

    /// The one-time build of the scope hierarchy failed
    #[error("Bootstrap failed: {message}")]
    Bootstrap {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A binding produces a handle type other than the one requested
    #[error("Contract '{contract}' is not bound to a handle of type {expected}")]
    ContractMismatch {
        /// The requested contract
        contract: String,
        /// Handle type the caller asked for
        expected: &'static str,
    },

    /// A binding's factory failed to construct its implementation
    #[error("Failed to construct '{contract}': {message}")]
    Construction {
        /// The contract being constructed
        contract: String,
        /// Description of the failure
        message: String,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },
}

// Resolution error creation methods
impl Error {
    /// Create a configuration-missing error for the given key
    pub fn configuration_missing<S: Into<String>>(key: S) -> Self {
        Self::ConfigurationMissing { key: key.into() }
    }

    /// Create a scope-not-found error
    pub fn scope_not_found<S: Into<String>>(scope: S) -> Self {
        Self::ScopeNotFound {
            scope: scope.into(),
        }
    }

    /// Create a binding-not-found error
    pub fn binding_not_found<C: Into<String>, S: Into<String>>(contract: C, scope: S) -> Self {
        Self::BindingNotFound {
            contract: contract.into(),
            scope: scope.into(),
        }
    }

    /// Create a contract mismatch error
    pub fn contract_mismatch<C: Into<String>>(contract: C, expected: &'static str) -> Self {
        Self::ContractMismatch {
            contract: contract.into(),
            expected,
        }
    }

    /// Create a construction error
    pub fn construction<C: Into<String>, S: Into<String>>(contract: C, message: S) -> Self {
        Self::Construction {
            contract: contract.into(),
            message: message.into(),
        }
    }
}

// Bootstrap and configuration error creation methods
impl Error {
    /// Create a bootstrap error
    pub fn bootstrap<S: Into<String>>(message: S) -> Self {
        Self::Bootstrap {
            message: message.into(),
            source: None,
        }
    }

    /// Create a bootstrap error with source
    pub fn bootstrap_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Bootstrap {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Classification helpers
impl Error {
    /// Whether this is a [`Error::ConfigurationMissing`]
    pub fn is_configuration_missing(&self) -> bool {
        matches!(self, Self::ConfigurationMissing { .. })
    }

    /// Whether this is a [`Error::ScopeNotFound`]
    pub fn is_scope_not_found(&self) -> bool {
        matches!(self, Self::ScopeNotFound { .. })
    }

    /// Whether this is a [`Error::BindingNotFound`]
    pub fn is_binding_not_found(&self) -> bool {
        matches!(self, Self::BindingNotFound { .. })
    }

    /// Whether this is a [`Error::Bootstrap`]
    pub fn is_bootstrap(&self) -> bool {
        matches!(self, Self::Bootstrap { .. })
    }
}
