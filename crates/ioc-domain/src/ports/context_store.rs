//! Execution Context Store Port
//!
//! Storage for instances whose lifetime is bound to one execution context.
//! Entries are keyed by `(ContextId, InstanceKey)`; entries of one context are
//! never visible to another and are dropped together when the context ends.

use std::any::Any;
use std::sync::Arc;

use crate::value_objects::{ContextId, InstanceKey};

/// Type-erased resolved instance
///
/// The payload is always the `Arc<T>` handle of the contract it was built
/// for, so callers downcast to `Arc<T>` and clone it out.
pub type AnyInstance = Arc<dyn Any + Send + Sync>;

/// Request-scoped instance cache
pub trait ExecutionContextStore: Send + Sync {
    /// Cached instance for `key` within `context`, if any
    fn get(&self, context: ContextId, key: &InstanceKey) -> Option<AnyInstance>;

    /// Cache `instance` unless one is already present
    ///
    /// Returns whichever instance ends up stored, so two racing resolutions
    /// inside the same context agree on a single instance.
    fn get_or_insert(&self, context: ContextId, key: InstanceKey, instance: AnyInstance)
        -> AnyInstance;

    /// Drop every instance cached for `context`, returning how many there were
    fn clear(&self, context: ContextId) -> usize;

    /// Number of instances cached for `context`
    fn instance_count(&self, context: ContextId) -> usize;

    /// Number of contexts that currently hold at least one instance
    fn active_contexts(&self) -> usize;
}
