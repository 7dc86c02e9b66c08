//! Domain Value Objects
//!
//! Immutable values the registry is keyed by and configured with.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ScopeName`] | Non-blank identifier of a scope |
//! | [`ContractId`] / [`Contract`] | Registration token for an abstract capability |
//! | [`InstanceKey`] | Cache key of a per-context instance |
//! | [`LifetimePolicy`] | How many instances a binding produces |
//! | [`ContextId`] | Identity of one unit of work |
//! | [`ConstructorArgs`] | Ordered constructor arguments captured at bind time |
//! | [`ConnectionDescriptor`] | Composite connection string for the data context |

/// Constructor argument lists
pub mod args;
/// Composite data connection descriptors
pub mod connection;
/// Execution context identity
pub mod context;
/// Contract identifiers and typed tokens
pub mod contract;
/// Lifetime policies
pub mod lifetime;
/// Scope names
pub mod scope;

pub use args::ConstructorArgs;
pub use connection::ConnectionDescriptor;
pub use context::ContextId;
pub use contract::{Contract, ContractId, InstanceKey};
pub use lifetime::LifetimePolicy;
pub use scope::ScopeName;
