//! # IoC Domain Layer
//!
//! Core types of the scoped dependency registry. Nothing in this crate knows
//! how scopes are built or where instances are cached; it only names the
//! concepts the infrastructure layer wires together.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`constants`] | Well-known scope names and configuration keys |
//! | [`error`] | Error enum shared by every layer |
//! | [`ports`] | Traits implemented by infrastructure (context store) |
//! | [`value_objects`] | Scope names, contract tokens, lifetimes, connection descriptors |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{AnyInstance, ExecutionContextStore};
pub use value_objects::{
    ConnectionDescriptor, ConstructorArgs, ContextId, Contract, ContractId, InstanceKey,
    LifetimePolicy, ScopeName,
};
