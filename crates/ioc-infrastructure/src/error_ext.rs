//! Error extension utilities
//!
//! Converts foreign errors (figment, TOML, I/O, or domain errors that need a
//! different classification) into [`ioc_domain::Error`] with context.

use ioc_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use ioc_infrastructure::error_ext::ErrorContext;
///
/// let config: IocConfig = figment.extract().config_context("Failed to extract configuration")?;
///
/// let descriptor = ConnectionDescriptor::new(provider, conn, metadata)
///     .bootstrap_context("Invalid data connection settings")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for the one-time registry build
    fn bootstrap_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{}: {}", context, err), err))
    }

    fn bootstrap_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::bootstrap_with_source(format!("{}: {}", context, err), err))
    }
}
