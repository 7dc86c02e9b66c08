use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SCOPE_KEY;
use crate::error::{Error, Result};

/// Name of a scope in the registry
///
/// Always non-blank. The text is kept verbatim: surrounding whitespace is
/// not trimmed, so `" RootContext"` and `"RootContext"` are different scopes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScopeName(String);

impl ScopeName {
    /// Create a scope name, rejecting empty or whitespace-only input
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid_argument("Scope name cannot be blank"));
        }
        Ok(Self(name))
    }

    /// Normalize a caller-supplied scope name
    ///
    /// `None`, `""` and whitespace-only names all fail with the same
    /// [`Error::ConfigurationMissing`] an unscoped call reports when no
    /// default scope is configured.
    pub fn parse(name: Option<&str>) -> Result<Self> {
        match name {
            Some(name) if !name.trim().is_empty() => Ok(Self(name.to_string())),
            _ => Err(Error::configuration_missing(DEFAULT_SCOPE_KEY)),
        }
    }

    /// The name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ScopeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ScopeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ScopeName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ScopeName {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ScopeName> for String {
    fn from(value: ScopeName) -> Self {
        value.0
    }
}
