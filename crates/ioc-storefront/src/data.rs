//! Data Context Contract
//!
//! The unit-of-work object storefront services read and write through. The
//! real scope binds it to an entity context built from the configured
//! connection descriptor; the fake scope binds an in-memory double.

use std::sync::Arc;

use ioc_domain::error::{Error, Result};
use ioc_domain::{ConnectionDescriptor, ConstructorArgs, Contract};
use ioc_infrastructure::di::Binding;
use tracing::debug;

/// Provider name reported by [`InMemoryDataContext`]
pub const IN_MEMORY_PROVIDER: &str = "InMemory";

/// Storage session shared by the services of one execution context
pub trait DataContext: Send + Sync {
    /// Provider invariant name
    fn provider(&self) -> &str;

    /// Composite connection string, if the context is backed by a database
    fn connection_string(&self) -> Option<&str>;

    /// Whether changes outlive the process
    fn is_persistent(&self) -> bool {
        self.connection_string().is_some()
    }
}

/// Contract token for the data context
pub const DATA_CONTEXT: Contract<dyn DataContext> = Contract::new("StorefrontObjectContext");

/// Database-backed data context
///
/// Built from the composite descriptor string
/// (`metadata=…;provider=…;provider connection string="…"`). No connection is
/// opened at construction.
#[derive(Debug, Clone)]
pub struct EntityDataContext {
    connection_string: String,
    provider: String,
}

impl EntityDataContext {
    /// Data context for `descriptor`
    pub fn new(descriptor: &ConnectionDescriptor) -> Self {
        Self {
            connection_string: descriptor.to_connection_string(),
            provider: descriptor.provider().to_string(),
        }
    }

    /// Rebuild from constructor arguments `[connection_string, provider]`
    pub fn from_args(args: &ConstructorArgs) -> Result<Self> {
        let connection_string = args.str_at(0)?;
        let provider = args.str_at(1)?;
        if connection_string.trim().is_empty() {
            return Err(Error::invalid_argument(
                "Data context connection string cannot be blank",
            ));
        }
        Ok(Self {
            connection_string: connection_string.to_string(),
            provider: provider.to_string(),
        })
    }

    /// Binding that constructs this context per execution context
    ///
    /// The descriptor is rendered once here; every instance receives the
    /// same string through its constructor arguments.
    pub fn binding(descriptor: &ConnectionDescriptor) -> Binding {
        let args = ConstructorArgs::new()
            .with(descriptor.to_connection_string())
            .with(descriptor.provider());
        debug!(provider = descriptor.provider(), "Binding entity data context");
        Binding::new(DATA_CONTEXT, "EntityDataContext", |args: &ConstructorArgs| {
            Ok(Arc::new(EntityDataContext::from_args(args)?) as Arc<dyn DataContext>)
        })
        .with_args(args)
    }
}

impl DataContext for EntityDataContext {
    fn provider(&self) -> &str {
        &self.provider
    }

    fn connection_string(&self) -> Option<&str> {
        Some(&self.connection_string)
    }
}

/// In-memory data context used by the fake scope
#[derive(Debug, Default, Clone, Copy)]
pub struct InMemoryDataContext;

impl InMemoryDataContext {
    /// Binding that constructs an in-memory context per execution context
    pub fn binding() -> Binding {
        Binding::new(DATA_CONTEXT, "InMemoryDataContext", |_| {
            Ok(Arc::new(InMemoryDataContext) as Arc<dyn DataContext>)
        })
    }
}

impl DataContext for InMemoryDataContext {
    fn provider(&self) -> &str {
        IN_MEMORY_PROVIDER
    }

    fn connection_string(&self) -> Option<&str> {
        None
    }
}
