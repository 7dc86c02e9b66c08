//! Domain Ports
//!
//! Traits the infrastructure layer implements.

/// Per-execution-context instance storage
pub mod context_store;

pub use context_store::{AnyInstance, ExecutionContextStore};
