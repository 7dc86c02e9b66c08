//! Root configuration type

use serde::{Deserialize, Serialize};

use super::{DataConfig, LoggingConfig};

/// Registry configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IocConfig {
    /// Scope used by calls that do not name one
    ///
    /// Not validated at load time: unscoped calls report a missing or blank
    /// value as `ConfigurationMissing`.
    pub default_scope: Option<String>,

    /// Components of the data context connection descriptor
    pub data: DataConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl IocConfig {
    /// Set the default scope
    pub fn with_default_scope<S: Into<String>>(mut self, scope: S) -> Self {
        self.default_scope = Some(scope.into());
        self
    }

    /// Set the provider connection string
    pub fn with_connection_string<S: Into<String>>(mut self, connection_string: S) -> Self {
        self.data.connection_string = connection_string.into();
        self
    }

    /// The configured default scope, as given
    pub fn default_scope(&self) -> Option<&str> {
        self.default_scope.as_deref()
    }
}
