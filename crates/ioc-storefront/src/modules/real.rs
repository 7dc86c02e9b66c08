use ioc_domain::error::Result;
use ioc_infrastructure::config::IocConfig;
use ioc_infrastructure::di::{BindingTable, ScopeModule};
use ioc_infrastructure::error_ext::ErrorContext;

use crate::data::EntityDataContext;

/// Binds the database-backed data context
///
/// The connection descriptor is assembled from `[data]` settings while the
/// scope is configured, so a malformed provider connection string fails
/// bootstrap rather than the first resolution. A blank one is accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealAppModule;

impl ScopeModule for RealAppModule {
    fn name(&self) -> &str {
        "RealAppModule"
    }

    fn configure(&self, bindings: &mut BindingTable, config: &IocConfig) -> Result<()> {
        let descriptor = config
            .data
            .descriptor()
            .bootstrap_context("Invalid data connection settings")?;
        bindings.register(EntityDataContext::binding(&descriptor));
        Ok(())
    }
}
