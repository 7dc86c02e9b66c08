//! Data context connection configuration

use ioc_domain::ConnectionDescriptor;
use ioc_domain::constants::{DEFAULT_DATA_METADATA, DEFAULT_DATA_PROVIDER};
use ioc_domain::error::Result;
use serde::{Deserialize, Serialize};

/// Connection components for the entity data context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Provider invariant name
    pub provider: String,

    /// Provider-specific connection string
    pub connection_string: String,

    /// Metadata locator for the entity model
    pub metadata: String,
}

impl DataConfig {
    /// Validate the components and assemble the composite descriptor
    pub fn descriptor(&self) -> Result<ConnectionDescriptor> {
        ConnectionDescriptor::new(
            self.provider.as_str(),
            self.connection_string.as_str(),
            self.metadata.as_str(),
        )
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_DATA_PROVIDER.to_string(),
            connection_string: String::new(),
            metadata: DEFAULT_DATA_METADATA.to_string(),
        }
    }
}
