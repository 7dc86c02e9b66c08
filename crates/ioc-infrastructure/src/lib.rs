//! # Infrastructure Layer
//!
//! The scoped dependency registry and the cross-cutting concerns around it.
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults, TOML, `IOC__` env) |
//! | [`di`] | Bindings, scopes, one-time bootstrap and the resolver facade |
//! | [`constants`] | Centralized infrastructure constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers for converting foreign errors |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoader, IocConfig};
pub use di::{
    Binding, BindingTable, ExecutionContext, HierarchyBootstrap, InMemoryContextStore,
    RegistryBootstrap, Resolver, Scope, ScopeModule, ScopeRegistry,
};
pub use error_ext::ErrorContext;
