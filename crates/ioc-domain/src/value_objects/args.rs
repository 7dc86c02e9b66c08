use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Ordered constructor arguments captured when a binding is registered
///
/// Late-bound parameters such as a connection string are resolved by the
/// scope module before registration and stored here as plain values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstructorArgs(Vec<Value>);

impl ConstructorArgs {
    /// Empty argument list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument
    pub fn with<V: Into<Value>>(mut self, value: V) -> Self {
        self.0.push(value.into());
        self
    }

    /// Append an argument in place
    pub fn push<V: Into<Value>>(&mut self, value: V) {
        self.0.push(value.into());
    }

    /// Argument at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// String argument at `index`
    pub fn str_at(&self, index: usize) -> Result<&str> {
        match self.0.get(index) {
            Some(Value::String(value)) => Ok(value),
            Some(other) => Err(Error::invalid_argument(format!(
                "Constructor argument {index} is not a string: {other}"
            ))),
            None => Err(Error::invalid_argument(format!(
                "Missing constructor argument {index} (have {})",
                self.0.len()
            ))),
        }
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no arguments
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the arguments in order
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.0.iter()
    }
}

impl From<Vec<Value>> for ConstructorArgs {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}
