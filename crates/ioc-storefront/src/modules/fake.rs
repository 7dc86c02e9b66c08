use ioc_domain::error::Result;
use ioc_infrastructure::config::IocConfig;
use ioc_infrastructure::di::{BindingTable, ScopeModule};

use crate::data::InMemoryDataContext;

/// Binds the in-memory data context used by tests
#[derive(Debug, Default, Clone, Copy)]
pub struct FakeAppModule;

impl ScopeModule for FakeAppModule {
    fn name(&self) -> &str {
        "FakeAppModule"
    }

    fn configure(&self, bindings: &mut BindingTable, _config: &IocConfig) -> Result<()> {
        bindings.register(InMemoryDataContext::binding());
        Ok(())
    }
}
