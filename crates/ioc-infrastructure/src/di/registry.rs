//! Process-wide scope registry
//!
//! Built once by a [`RegistryBootstrap`](super::RegistryBootstrap) and
//! read-only afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use ioc_domain::ScopeName;
use ioc_domain::error::{Error, Result};

use super::scope::Scope;

/// Scope name → scope
#[derive(Debug, Default)]
pub struct ScopeRegistry {
    scopes: HashMap<ScopeName, Arc<Scope>>,
}

impl ScopeRegistry {
    pub(crate) fn insert(&mut self, scope: Arc<Scope>) -> Result<()> {
        let name = scope.name().clone();
        if self.scopes.contains_key(&name) {
            return Err(Error::bootstrap(format!("Scope '{name}' is declared twice")));
        }
        self.scopes.insert(name, scope);
        Ok(())
    }

    /// Scope registered under `name`
    pub fn get(&self, name: &ScopeName) -> Result<Arc<Scope>> {
        self.scopes
            .get(name)
            .cloned()
            .ok_or_else(|| Error::scope_not_found(name.as_str()))
    }

    /// Scope registered under `name`, if any
    pub fn find(&self, name: &str) -> Option<&Arc<Scope>> {
        self.scopes.get(name)
    }

    /// Whether a scope is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.scopes.contains_key(name)
    }

    /// Registered scope names, sorted
    pub fn names(&self) -> Vec<ScopeName> {
        let mut names: Vec<_> = self.scopes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of scopes
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Whether no scope is registered
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Total number of bindings across all scopes
    pub fn binding_count(&self) -> usize {
        self.scopes.values().map(|scope| scope.len()).sum()
    }
}
