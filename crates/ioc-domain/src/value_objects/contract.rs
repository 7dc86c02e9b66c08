use std::any::{TypeId, type_name};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::scope::ScopeName;

/// Registration name of an abstract capability
///
/// Two bindings for the same `ContractId` in one scope overwrite each other;
/// the same id may be bound differently in different scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContractId(&'static str);

impl ContractId {
    /// Create a contract identifier
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The registration name
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Typed registration token
///
/// Pairs a [`ContractId`] with the handle type `Arc<T>` that resolving it
/// yields, so callers get a concrete `Arc<dyn Trait>` back without any
/// runtime type lookup by name.
///
/// ```
/// use ioc_domain::Contract;
///
/// trait Clock: Send + Sync {
///     fn now(&self) -> u64;
/// }
///
/// const CLOCK: Contract<dyn Clock> = Contract::new("Clock");
/// assert_eq!(CLOCK.id().name(), "Clock");
/// ```
pub struct Contract<T: ?Sized + 'static> {
    id: ContractId,
    _handle: PhantomData<fn() -> Arc<T>>,
}

impl<T: ?Sized + 'static> Contract<T> {
    /// Declare a contract token
    pub const fn new(name: &'static str) -> Self {
        Self {
            id: ContractId::new(name),
            _handle: PhantomData,
        }
    }

    /// The untyped identifier of this contract
    pub const fn id(&self) -> ContractId {
        self.id
    }

    /// The registration name
    pub const fn name(&self) -> &'static str {
        self.id.name()
    }

    /// `TypeId` of the handle (`Arc<T>`) this contract resolves to
    pub fn handle_type(&self) -> TypeId {
        TypeId::of::<Arc<T>>()
    }

    /// Readable name of the handle type, for diagnostics
    pub fn handle_type_name(&self) -> &'static str {
        type_name::<Arc<T>>()
    }
}

impl<T: ?Sized + 'static> Clone for Contract<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized + 'static> Copy for Contract<T> {}

impl<T: ?Sized + 'static> fmt::Debug for Contract<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contract")
            .field("id", &self.id)
            .field("handle", &self.handle_type_name())
            .finish()
    }
}

impl<T: ?Sized + 'static> From<Contract<T>> for ContractId {
    fn from(contract: Contract<T>) -> Self {
        contract.id
    }
}

/// Cache key of a per-context instance
///
/// `scope` is the scope that owns the binding, which is not necessarily the
/// scope the lookup started from when the binding was inherited.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceKey {
    /// Scope that owns the binding
    pub scope: ScopeName,
    /// Contract the instance satisfies
    pub contract: ContractId,
}

impl InstanceKey {
    /// Create an instance key
    pub fn new(scope: ScopeName, contract: ContractId) -> Self {
        Self { scope, contract }
    }
}

impl fmt::Display for InstanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.scope, self.contract)
    }
}
