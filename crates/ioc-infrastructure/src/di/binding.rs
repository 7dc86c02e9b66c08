//! Bindings and per-scope binding tables

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ioc_domain::error::{Error, Result};
use ioc_domain::{AnyInstance, ConstructorArgs, Contract, ContractId, LifetimePolicy};
use once_cell::sync::OnceCell;
use tracing::debug;

type Factory = dyn Fn(&ConstructorArgs) -> Result<AnyInstance> + Send + Sync;

/// Construction rule for one contract
///
/// The factory receives the constructor arguments captured at registration
/// and must return the contract's handle type. Singleton instances are kept
/// on the binding itself; per-context instances live in the context store.
pub struct Binding {
    contract: ContractId,
    implementation: &'static str,
    args: ConstructorArgs,
    lifetime: LifetimePolicy,
    handle_type: TypeId,
    handle_type_name: &'static str,
    factory: Box<Factory>,
    singleton: OnceCell<AnyInstance>,
}

impl Binding {
    /// Create a binding with the default [`LifetimePolicy::PerExecutionContext`]
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use ioc_domain::Contract;
    /// use ioc_infrastructure::di::Binding;
    ///
    /// trait Greeter: Send + Sync {
    ///     fn greet(&self) -> String;
    /// }
    /// struct English;
    /// impl Greeter for English {
    ///     fn greet(&self) -> String {
    ///         "hello".into()
    ///     }
    /// }
    ///
    /// const GREETER: Contract<dyn Greeter> = Contract::new("IGreeter");
    ///
    /// let binding = Binding::new(GREETER, "English", |_| Ok(Arc::new(English) as Arc<dyn Greeter>));
    /// assert_eq!(binding.implementation(), "English");
    /// ```
    pub fn new<T, F>(contract: Contract<T>, implementation: &'static str, factory: F) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&ConstructorArgs) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        Self {
            contract: contract.id(),
            implementation,
            args: ConstructorArgs::new(),
            lifetime: LifetimePolicy::default(),
            handle_type: contract.handle_type(),
            handle_type_name: contract.handle_type_name(),
            factory: Box::new(move |args: &ConstructorArgs| {
                factory(args).map(|handle| Arc::new(handle) as AnyInstance)
            }),
            singleton: OnceCell::new(),
        }
    }

    /// Set the constructor arguments
    pub fn with_args(mut self, args: ConstructorArgs) -> Self {
        self.args = args;
        self
    }

    /// Set the lifetime policy
    pub fn with_lifetime(mut self, lifetime: LifetimePolicy) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Contract this binding satisfies
    pub fn contract(&self) -> ContractId {
        self.contract
    }

    /// Name of the concrete implementation
    pub fn implementation(&self) -> &'static str {
        self.implementation
    }

    /// Constructor arguments passed to the factory
    pub fn args(&self) -> &ConstructorArgs {
        &self.args
    }

    /// Lifetime policy
    pub fn lifetime(&self) -> LifetimePolicy {
        self.lifetime
    }

    /// Readable name of the handle type the factory produces
    pub fn handle_type_name(&self) -> &'static str {
        self.handle_type_name
    }

    /// Whether resolving through `contract` yields this binding's handle type
    pub fn satisfies<T: ?Sized + 'static>(&self, contract: &Contract<T>) -> bool {
        self.handle_type == contract.handle_type()
    }

    /// Run the factory once, without any caching
    pub(crate) fn instantiate(&self) -> Result<AnyInstance> {
        (self.factory)(&self.args).map_err(|e| match e {
            Error::Construction { .. } => e,
            other => Error::construction(self.contract.name(), other.to_string()),
        })
    }

    /// The binding-wide instance, built on first use
    ///
    /// A failed construction leaves the cell empty so the next call retries.
    pub(crate) fn singleton_instance(&self) -> Result<AnyInstance> {
        self.singleton
            .get_or_try_init(|| self.instantiate())
            .map(Arc::clone)
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("contract", &self.contract)
            .field("implementation", &self.implementation)
            .field("args", &self.args)
            .field("lifetime", &self.lifetime)
            .field("handle", &self.handle_type_name)
            .finish()
    }
}

/// Contract → binding map owned by one scope
///
/// Mutable only while its scope is being configured during bootstrap.
#[derive(Debug, Default)]
pub struct BindingTable {
    bindings: HashMap<ContractId, Arc<Binding>>,
}

impl BindingTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the binding for its contract
    ///
    /// Returns the binding that was replaced, if any.
    pub fn register(&mut self, binding: Binding) -> Option<Arc<Binding>> {
        let contract = binding.contract();
        debug!(
            contract = %contract,
            implementation = binding.implementation(),
            lifetime = %binding.lifetime(),
            "Registering binding"
        );
        let previous = self.bindings.insert(contract, Arc::new(binding));
        if previous.is_some() {
            debug!(contract = %contract, "Binding overwritten");
        }
        previous
    }

    /// Binding for `contract` in this table only
    pub fn get(&self, contract: ContractId) -> Option<&Arc<Binding>> {
        self.bindings.get(&contract)
    }

    /// Whether `contract` is bound in this table
    pub fn contains(&self, contract: ContractId) -> bool {
        self.bindings.contains_key(&contract)
    }

    /// Bound contracts, sorted by name
    pub fn contracts(&self) -> Vec<ContractId> {
        let mut contracts: Vec<_> = self.bindings.keys().copied().collect();
        contracts.sort();
        contracts
    }

    /// Iterate over all bindings in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Binding>> {
        self.bindings.values()
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
