use ioc_domain::error::Result;
use ioc_infrastructure::config::IocConfig;
use ioc_infrastructure::di::{BindingTable, ScopeModule};

use crate::services::register_services;

/// Binds every storefront service in the root scope
#[derive(Debug, Default, Clone, Copy)]
pub struct RootServicesModule;

impl ScopeModule for RootServicesModule {
    fn name(&self) -> &str {
        "RootServicesModule"
    }

    fn configure(&self, bindings: &mut BindingTable, _config: &IocConfig) -> Result<()> {
        register_services(bindings);
        Ok(())
    }
}
