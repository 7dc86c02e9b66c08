//! Execution contexts
//!
//! An [`ExecutionContext`] is one unit of work (one request, one test run).
//! Instances with the `PerExecutionContext` lifetime are cached against its
//! id and released when the context is dropped.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use ioc_domain::error::Result;
use ioc_domain::{AnyInstance, ContextId, Contract, ExecutionContextStore, InstanceKey};
use tracing::debug;

use super::resolver::Resolver;

/// In-process [`ExecutionContextStore`]
///
/// Each context owns a separate map, so clearing a context is a single
/// removal and concurrent contexts only contend on the outer shard.
#[derive(Debug, Default)]
pub struct InMemoryContextStore {
    contexts: DashMap<ContextId, HashMap<InstanceKey, AnyInstance>>,
}

impl InMemoryContextStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExecutionContextStore for InMemoryContextStore {
    fn get(&self, context: ContextId, key: &InstanceKey) -> Option<AnyInstance> {
        self.contexts
            .get(&context)
            .and_then(|instances| instances.get(key).cloned())
    }

    fn get_or_insert(
        &self,
        context: ContextId,
        key: InstanceKey,
        instance: AnyInstance,
    ) -> AnyInstance {
        let mut instances = self.contexts.entry(context).or_default();
        Arc::clone(instances.entry(key).or_insert(instance))
    }

    fn clear(&self, context: ContextId) -> usize {
        self.contexts
            .remove(&context)
            .map(|(_, instances)| instances.len())
            .unwrap_or(0)
    }

    fn instance_count(&self, context: ContextId) -> usize {
        self.contexts
            .get(&context)
            .map(|instances| instances.len())
            .unwrap_or(0)
    }

    fn active_contexts(&self) -> usize {
        self.contexts.len()
    }
}

/// One unit of work
///
/// Created by [`Resolver::begin_context`]. Dropping it ends the context and
/// discards its cached instances; handles already returned stay valid.
pub struct ExecutionContext {
    id: ContextId,
    resolver: Resolver,
}

impl ExecutionContext {
    pub(crate) fn new(resolver: Resolver) -> Self {
        let id = ContextId::new();
        debug!(context = %id, "Execution context started");
        Self { id, resolver }
    }

    /// Context identity
    pub fn id(&self) -> ContextId {
        self.id
    }

    /// Resolver this context was started from
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Resolve `contract` against the configured default scope
    pub fn resolve<T>(&self, contract: Contract<T>) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolver.resolve(self, contract)
    }

    /// Resolve `contract` against the named scope
    pub fn resolve_in<T>(&self, contract: Contract<T>, scope: Option<&str>) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolver.resolve_in(self, contract, scope)
    }

    /// Number of instances currently cached for this context
    pub fn cached_instances(&self) -> usize {
        self.resolver.context_store().instance_count(self.id)
    }
}

impl Drop for ExecutionContext {
    fn drop(&mut self) {
        let released = self.resolver.context_store().clear(self.id);
        debug!(context = %self.id, released, "Execution context ended");
    }
}

impl fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
