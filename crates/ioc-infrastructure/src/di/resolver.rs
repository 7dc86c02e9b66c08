//! Resolver Facade
//!
//! The only entry point consumers need: turns a `(scope, contract)` pair
//! into a live instance, bootstrapping the registry on first use.
//!
//! ## Resolution
//!
//! ```text
//! ctx.resolve_in(CONTRACT, Some("RealAppContext"))
//!   1. ensure_initialized()        OnceCell, build runs at most once
//!   2. scope name                  blank → ConfigurationMissing
//!   3. registry.get(scope)         missing → ScopeNotFound
//!   4. scope.lookup(contract)      walks parents, missing → BindingNotFound
//!   5. lifetime policy             per-context store / singleton cell / fresh
//! ```

use std::fmt;
use std::sync::Arc;

use ioc_domain::error::{Error, Result};
use ioc_domain::{AnyInstance, Contract, ExecutionContextStore, InstanceKey, LifetimePolicy, ScopeName};
use once_cell::sync::OnceCell;
use tracing::{info, trace, warn};

use super::bootstrap::RegistryBootstrap;
use super::context::{ExecutionContext, InMemoryContextStore};
use super::registry::ScopeRegistry;
use super::scope::Scope;
use crate::config::IocConfig;

struct ResolverInner {
    config: Arc<IocConfig>,
    bootstrap: Arc<dyn RegistryBootstrap>,
    store: Arc<dyn ExecutionContextStore>,
    registry: OnceCell<ScopeRegistry>,
}

/// Scoped dependency resolver
///
/// Cheap to clone; clones share the same registry and context store.
/// Construct one at application startup and hand it to whatever needs
/// resolution.
#[derive(Clone)]
pub struct Resolver {
    inner: Arc<ResolverInner>,
}

/// Builder for [`Resolver`]
pub struct ResolverBuilder {
    config: IocConfig,
    bootstrap: Arc<dyn RegistryBootstrap>,
    store: Option<Arc<dyn ExecutionContextStore>>,
}

impl ResolverBuilder {
    /// Use `config` instead of `IocConfig::default()`
    pub fn config(mut self, config: IocConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom per-context instance store
    pub fn context_store(mut self, store: Arc<dyn ExecutionContextStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Create the resolver; no bootstrap happens until first use
    pub fn build(self) -> Resolver {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemoryContextStore::new()));
        Resolver {
            inner: Arc::new(ResolverInner {
                config: Arc::new(self.config),
                bootstrap: self.bootstrap,
                store,
                registry: OnceCell::new(),
            }),
        }
    }
}

impl Resolver {
    /// Start building a resolver around `bootstrap`
    pub fn builder<B: RegistryBootstrap + 'static>(bootstrap: B) -> ResolverBuilder {
        ResolverBuilder {
            config: IocConfig::default(),
            bootstrap: Arc::new(bootstrap),
            store: None,
        }
    }

    /// Resolver with `config` and the in-memory context store
    pub fn new<B: RegistryBootstrap + 'static>(config: IocConfig, bootstrap: B) -> Self {
        Self::builder(bootstrap).config(config).build()
    }

    /// Configuration this resolver reads the default scope from
    pub fn config(&self) -> &IocConfig {
        &self.inner.config
    }

    /// Store holding per-context instances
    pub fn context_store(&self) -> &Arc<dyn ExecutionContextStore> {
        &self.inner.store
    }

    /// Whether bootstrap has completed successfully
    pub fn is_initialized(&self) -> bool {
        self.inner.registry.get().is_some()
    }

    /// Build the registry if it has not been built yet
    ///
    /// Concurrent first callers block until one build finishes; all of them
    /// then see the same registry. A failed build leaves the resolver
    /// uninitialized and returns the error to the caller that ran it, so a
    /// later call retries from scratch.
    pub fn ensure_initialized(&self) -> Result<&ScopeRegistry> {
        self.inner.registry.get_or_try_init(|| {
            info!("Bootstrapping scope registry");
            match self.inner.bootstrap.build(&self.inner.config) {
                Ok(registry) => {
                    info!(
                        scopes = registry.len(),
                        bindings = registry.binding_count(),
                        "Scope registry ready"
                    );
                    Ok(registry)
                }
                Err(e) => {
                    warn!(error = %e, "Scope registry bootstrap failed");
                    Err(match e {
                        Error::Bootstrap { .. } => e,
                        other => Error::bootstrap_with_source("Registry build failed", other),
                    })
                }
            }
        })
    }

    /// Start a new execution context
    pub fn begin_context(&self) -> ExecutionContext {
        ExecutionContext::new(self.clone())
    }

    /// Names of all registered scopes
    pub fn scope_names(&self) -> Result<Vec<ScopeName>> {
        Ok(self.ensure_initialized()?.names())
    }

    /// The scope named by the `default_scope` setting
    pub fn get_scope(&self) -> Result<Arc<Scope>> {
        self.get_scope_named(self.inner.config.default_scope())
    }

    /// The scope registered under `name`
    ///
    /// `None` and blank names fail with `ConfigurationMissing`.
    pub fn get_scope_named(&self, name: Option<&str>) -> Result<Arc<Scope>> {
        let registry = self.ensure_initialized()?;
        let name = ScopeName::parse(name)?;
        registry.get(&name)
    }

    /// Resolve `contract` against the scope named by `default_scope`
    pub(crate) fn resolve<T>(&self, ctx: &ExecutionContext, contract: Contract<T>) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolve_in(ctx, contract, self.inner.config.default_scope())
    }

    /// Resolve `contract` against the scope registered under `scope`
    ///
    /// `ctx` must have been started by this resolver.
    pub(crate) fn resolve_in<T>(
        &self,
        ctx: &ExecutionContext,
        contract: Contract<T>,
        scope: Option<&str>,
    ) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        debug_assert!(
            Arc::ptr_eq(&self.inner, &ctx.resolver().inner),
            "execution context belongs to a different resolver"
        );
        let scope = self.get_scope_named(scope)?;
        let resolved = scope
            .lookup(contract.id())
            .ok_or_else(|| Error::binding_not_found(contract.name(), scope.name().as_str()))?;
        let binding = &resolved.binding;

        if !binding.satisfies(&contract) {
            return Err(Error::contract_mismatch(
                contract.name(),
                contract.handle_type_name(),
            ));
        }

        trace!(
            context = %ctx.id(),
            scope = %scope.name(),
            owner = %resolved.owner,
            contract = %contract.id(),
            lifetime = %binding.lifetime(),
            "Resolving contract"
        );

        let instance = match binding.lifetime() {
            LifetimePolicy::Transient => binding.instantiate()?,
            LifetimePolicy::Singleton => binding.singleton_instance()?,
            LifetimePolicy::PerExecutionContext => {
                let store = &self.inner.store;
                let key = InstanceKey::new(resolved.owner.clone(), contract.id());
                match store.get(ctx.id(), &key) {
                    Some(instance) => instance,
                    None => store.get_or_insert(ctx.id(), key, binding.instantiate()?),
                }
            }
        };

        downcast(instance, &contract)
    }
}

fn downcast<T: ?Sized + 'static>(instance: AnyInstance, contract: &Contract<T>) -> Result<Arc<T>> {
    instance
        .downcast_ref::<Arc<T>>()
        .cloned()
        .ok_or_else(|| Error::contract_mismatch(contract.name(), contract.handle_type_name()))
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("initialized", &self.is_initialized())
            .field("default_scope", &self.inner.config.default_scope())
            .finish_non_exhaustive()
    }
}
