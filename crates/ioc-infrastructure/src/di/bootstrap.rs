//! Registry Bootstrap
//!
//! Builds the scope hierarchy and fills every binding table. The resolver
//! runs a bootstrap at most once successfully; see [`Resolver`](super::Resolver).
//!
//! ## Usage
//!
//! ```rust,ignore
//! let bootstrap = HierarchyBootstrap::new()
//!     .root("RootContext")
//!     .child("RealAppContext", "RootContext")
//!     .module("RootContext", RootServicesModule)
//!     .module("RealAppContext", |bindings: &mut BindingTable, config: &IocConfig| {
//!         bindings.register(data_context_binding(config)?);
//!         Ok(())
//!     });
//! ```

use std::sync::Arc;

use ioc_domain::ScopeName;
use ioc_domain::error::{Error, Result};
use tracing::{debug, info};

use super::binding::BindingTable;
use super::registry::ScopeRegistry;
use super::scope::Scope;
use crate::config::IocConfig;

/// Builds a complete [`ScopeRegistry`]
///
/// Implementations must either return a fully populated registry or an
/// error; a partially built registry is never observable.
pub trait RegistryBootstrap: Send + Sync {
    /// Build every scope and binding
    fn build(&self, config: &IocConfig) -> Result<ScopeRegistry>;
}

/// Configures the bindings of one scope
pub trait ScopeModule: Send + Sync {
    /// Name used in diagnostics
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Register this module's bindings
    fn configure(&self, bindings: &mut BindingTable, config: &IocConfig) -> Result<()>;
}

impl<F> ScopeModule for F
where
    F: Fn(&mut BindingTable, &IocConfig) -> Result<()> + Send + Sync,
{
    fn configure(&self, bindings: &mut BindingTable, config: &IocConfig) -> Result<()> {
        self(bindings, config)
    }
}

#[derive(Debug, Clone)]
struct ScopeDefinition {
    name: String,
    parent: Option<String>,
}

/// Declarative root-plus-children hierarchy
///
/// Scopes are created in declaration order; the root must come first and
/// each parent must be declared before its children. Modules are applied
/// to their scope in the order they were added.
#[derive(Default)]
pub struct HierarchyBootstrap {
    scopes: Vec<ScopeDefinition>,
    modules: Vec<(String, Arc<dyn ScopeModule>)>,
}

impl HierarchyBootstrap {
    /// Create an empty hierarchy
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the root scope
    pub fn root<S: Into<String>>(mut self, name: S) -> Self {
        self.scopes.push(ScopeDefinition {
            name: name.into(),
            parent: None,
        });
        self
    }

    /// Declare a child scope of `parent`
    pub fn child<S: Into<String>, P: Into<String>>(mut self, name: S, parent: P) -> Self {
        self.scopes.push(ScopeDefinition {
            name: name.into(),
            parent: Some(parent.into()),
        });
        self
    }

    /// Add a module that configures `scope`
    pub fn module<S, M>(mut self, scope: S, module: M) -> Self
    where
        S: Into<String>,
        M: ScopeModule + 'static,
    {
        self.modules.push((scope.into(), Arc::new(module)));
        self
    }

    /// Declared scope names in declaration order
    pub fn scope_names(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(|scope| scope.name.as_str())
    }

    fn validate(&self) -> Result<()> {
        let roots = self.scopes.iter().filter(|s| s.parent.is_none()).count();
        match self.scopes.first() {
            None => return Err(Error::bootstrap("No scopes declared")),
            Some(first) if first.parent.is_some() => {
                return Err(Error::bootstrap(format!(
                    "The first declared scope '{}' must be the root",
                    first.name
                )));
            }
            Some(_) if roots > 1 => {
                return Err(Error::bootstrap(format!(
                    "Exactly one root scope is allowed, found {roots}"
                )));
            }
            Some(_) => {}
        }

        for (scope, module) in &self.modules {
            if !self.scopes.iter().any(|s| &s.name == scope) {
                return Err(Error::bootstrap(format!(
                    "Module '{}' targets undeclared scope '{}'",
                    module.name(),
                    scope
                )));
            }
        }
        Ok(())
    }

    fn configure_scope(&self, name: &ScopeName, config: &IocConfig) -> Result<BindingTable> {
        let mut bindings = BindingTable::new();
        for (_, module) in self
            .modules
            .iter()
            .filter(|(scope, _)| scope.as_str() == name.as_str())
        {
            module
                .configure(&mut bindings, config)
                .map_err(|e| module_failure(name, module.name(), e))?;
            debug!(scope = %name, module = module.name(), "Scope module applied");
        }
        Ok(bindings)
    }
}

impl RegistryBootstrap for HierarchyBootstrap {
    fn build(&self, config: &IocConfig) -> Result<ScopeRegistry> {
        self.validate()?;

        let mut registry = ScopeRegistry::default();
        for definition in &self.scopes {
            let name = ScopeName::new(definition.name.as_str())
                .map_err(|e| Error::bootstrap_with_source("Invalid scope name", e))?;
            let parent = match &definition.parent {
                Some(parent) => Some(registry.find(parent).cloned().ok_or_else(|| {
                    Error::bootstrap(format!(
                        "Parent scope '{parent}' of '{name}' must be declared before it"
                    ))
                })?),
                None => None,
            };

            let bindings = self.configure_scope(&name, config)?;
            info!(
                scope = %name,
                parent = parent.as_ref().map(|p| p.name().as_str()).unwrap_or("-"),
                bindings = bindings.len(),
                "Scope configured"
            );
            registry.insert(Arc::new(Scope::new(name, parent.as_ref(), bindings)))?;
        }
        Ok(registry)
    }
}

fn module_failure(scope: &ScopeName, module: &str, error: Error) -> Error {
    match error {
        Error::Bootstrap { .. } => error,
        other => Error::bootstrap_with_source(
            format!("Module '{module}' failed to configure scope '{scope}'"),
            other,
        ),
    }
}
