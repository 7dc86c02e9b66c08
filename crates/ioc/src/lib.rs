//! # Storefront IoC Registry
//!
//! A process-wide registry that maps service contracts to implementations,
//! organized into a root scope with named child scopes and bootstrapped
//! lazily on first use.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ioc::storefront::services::PRODUCT_SERVICE;
//!
//! let resolver = ioc::load_resolver(None)?;
//! let ctx = resolver.begin_context();
//! let products = ctx.resolve(PRODUCT_SERVICE)?;
//! ```
//!
//! ## Crate Organization
//!
//! | Module | Crate | Description |
//! |--------|-------|-------------|
//! | [`domain`] | `ioc-domain` | Contracts, scope names, lifetimes, errors |
//! | [`infrastructure`] | `ioc-infrastructure` | Resolver, bootstrap, config, logging |
//! | [`storefront`] | `ioc-storefront` | Storefront contracts and scope modules |

use std::path::Path;

use tracing::info;

/// Domain layer: contracts, scope names, lifetimes, errors
pub mod domain {
    pub use ioc_domain::*;
}

/// Infrastructure layer: resolver, bootstrap, config, logging
pub mod infrastructure {
    pub use ioc_infrastructure::*;
}

/// Storefront catalogue and scope modules
pub mod storefront {
    pub use ioc_storefront::*;
}

pub use ioc_domain::{Contract, Error, LifetimePolicy, Result, ScopeName};
pub use ioc_infrastructure::logging::init_logging;
pub use ioc_infrastructure::{ConfigLoader, ExecutionContext, IocConfig, Resolver};

/// Resolver over the storefront hierarchy
///
/// Nothing is built until the first resolution.
pub fn init_resolver(config: IocConfig) -> Resolver {
    info!(
        default_scope = config.default_scope().unwrap_or("-"),
        "Creating storefront resolver"
    );
    Resolver::new(config, ioc_storefront::storefront_bootstrap())
}

/// Load configuration, then create the storefront resolver
///
/// Without `config_path` the default `ioc.toml` locations are searched;
/// `IOC__*` environment variables override file values either way.
pub fn load_resolver(config_path: Option<&Path>) -> Result<Resolver> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(init_resolver(loader.load()?))
}
