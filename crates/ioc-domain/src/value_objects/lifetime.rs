use std::fmt;

use serde::{Deserialize, Serialize};

/// How many instances a binding produces and how long each lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifetimePolicy {
    /// One instance per execution context, discarded when the context ends
    #[default]
    PerExecutionContext,
    /// One instance per binding for the life of the registry
    Singleton,
    /// A new instance on every resolution
    Transient,
}

impl LifetimePolicy {
    /// Whether resolved instances are reused at all
    pub fn is_cached(&self) -> bool {
        !matches!(self, Self::Transient)
    }

    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerExecutionContext => "per_execution_context",
            Self::Singleton => "singleton",
            Self::Transient => "transient",
        }
    }
}

impl fmt::Display for LifetimePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
