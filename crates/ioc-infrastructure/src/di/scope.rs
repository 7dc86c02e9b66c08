//! Scope nodes
//!
//! A scope owns its binding table and holds a weak reference to its parent.
//! Lookups that miss locally walk the parent chain; the root has no parent
//! and ends the walk.

use std::fmt;
use std::sync::{Arc, Weak};

use ioc_domain::{ContractId, ScopeName};

use super::binding::{Binding, BindingTable};

/// A binding found by [`Scope::lookup`], with the scope that owns it
#[derive(Debug, Clone)]
pub struct ResolvedBinding {
    /// Scope whose table holds the binding
    pub owner: ScopeName,
    /// The binding itself
    pub binding: Arc<Binding>,
}

/// Named container of bindings
pub struct Scope {
    name: ScopeName,
    parent: Option<Weak<Scope>>,
    bindings: BindingTable,
}

impl Scope {
    pub(crate) fn new(name: ScopeName, parent: Option<&Arc<Scope>>, bindings: BindingTable) -> Self {
        Self {
            name,
            parent: parent.map(Arc::downgrade),
            bindings,
        }
    }

    /// Scope name
    pub fn name(&self) -> &ScopeName {
        &self.name
    }

    /// Parent scope, if this is not the root and the parent is still alive
    pub fn parent(&self) -> Option<Arc<Scope>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    /// Whether this scope was created without a parent
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// This scope's own bindings
    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    /// Binding for `contract` in this scope only
    pub fn lookup_local(&self, contract: ContractId) -> Option<&Arc<Binding>> {
        self.bindings.get(contract)
    }

    /// Binding for `contract` in this scope or the nearest ancestor
    pub fn lookup(&self, contract: ContractId) -> Option<ResolvedBinding> {
        if let Some(binding) = self.bindings.get(contract) {
            return Some(ResolvedBinding {
                owner: self.name.clone(),
                binding: Arc::clone(binding),
            });
        }

        let mut current = self.parent();
        while let Some(scope) = current {
            if let Some(binding) = scope.bindings.get(contract) {
                return Some(ResolvedBinding {
                    owner: scope.name.clone(),
                    binding: Arc::clone(binding),
                });
            }
            current = scope.parent();
        }
        None
    }

    /// Whether `contract` resolves from this scope, locally or inherited
    pub fn contains(&self, contract: ContractId) -> bool {
        self.lookup(contract).is_some()
    }

    /// Contracts bound locally, sorted by name
    pub fn contracts(&self) -> Vec<ContractId> {
        self.bindings.contracts()
    }

    /// Number of local bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether this scope has no local bindings
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("name", &self.name)
            .field("parent", &self.parent().map(|p| p.name.clone()))
            .field("bindings", &self.bindings.len())
            .finish()
    }
}
