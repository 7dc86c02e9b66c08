//! Storefront hierarchy

use ioc_domain::constants::{FAKE_SCOPE, REAL_SCOPE, ROOT_SCOPE};
use ioc_infrastructure::di::HierarchyBootstrap;

use crate::modules::{FakeAppModule, RealAppModule, RootServicesModule};

/// Root scope with the services, plus the real and fake application scopes
///
/// Extra modules can be chained onto the result before it is handed to a
/// resolver, e.g. to rebind a contract in `FakeAppContext` for a test.
pub fn storefront_bootstrap() -> HierarchyBootstrap {
    HierarchyBootstrap::new()
        .root(ROOT_SCOPE)
        .child(REAL_SCOPE, ROOT_SCOPE)
        .child(FAKE_SCOPE, ROOT_SCOPE)
        .module(ROOT_SCOPE, RootServicesModule)
        .module(REAL_SCOPE, RealAppModule)
        .module(FAKE_SCOPE, FakeAppModule)
}
