//! Scope Hierarchy Tests

use std::sync::Arc;

use ioc_domain::constants::{FAKE_SCOPE, REAL_SCOPE, ROOT_SCOPE};
use ioc_domain::{ContractId, Result};
use ioc_infrastructure::config::IocConfig;
use ioc_infrastructure::di::{BindingTable, HierarchyBootstrap, RegistryBootstrap};

use crate::test_utils::{WIDGET, widget_binding, widget_hierarchy};

#[test]
fn test_children_link_to_root() {
    let registry = widget_hierarchy().build(&IocConfig::default()).unwrap();

    let root = registry.find(ROOT_SCOPE).unwrap();
    assert!(root.is_root());
    assert!(root.parent().is_none());

    for name in [REAL_SCOPE, FAKE_SCOPE] {
        let child = registry.find(name).unwrap();
        assert!(!child.is_root());
        let parent = child.parent().unwrap();
        assert!(Arc::ptr_eq(&parent, root));
    }
}

#[test]
fn test_lookup_reports_owning_scope() {
    let registry = widget_hierarchy().build(&IocConfig::default()).unwrap();
    let real = registry.find(REAL_SCOPE).unwrap();

    let resolved = real.lookup(WIDGET.id()).unwrap();
    assert_eq!(resolved.owner.as_str(), ROOT_SCOPE);
    assert_eq!(resolved.binding.implementation(), "WidgetImpl");

    assert!(real.lookup(ContractId::new("IUnknown")).is_none());
    assert!(real.is_empty());
}

#[test]
fn test_lookup_walks_multiple_levels() {
    let bootstrap = HierarchyBootstrap::new()
        .root(ROOT_SCOPE)
        .child(REAL_SCOPE, ROOT_SCOPE)
        .child("RealAppContext.Tenant", REAL_SCOPE)
        .module(
            ROOT_SCOPE,
            |bindings: &mut BindingTable, _: &IocConfig| -> Result<()> {
                bindings.register(widget_binding("root"));
                Ok(())
            },
        );
    let registry = bootstrap.build(&IocConfig::default()).unwrap();
    let tenant = registry.find("RealAppContext.Tenant").unwrap();

    assert_eq!(
        tenant.parent().unwrap().name().as_str(),
        REAL_SCOPE
    );
    assert_eq!(tenant.lookup(WIDGET.id()).unwrap().owner.as_str(), ROOT_SCOPE);
}

#[test]
fn test_modules_for_one_scope_apply_in_order() {
    let bootstrap = widget_hierarchy().module(
        ROOT_SCOPE,
        |bindings: &mut BindingTable, _: &IocConfig| -> Result<()> {
            let replaced = bindings.register(widget_binding("override"));
            assert!(replaced.is_some());
            Ok(())
        },
    );
    let registry = bootstrap.build(&IocConfig::default()).unwrap();
    let root = registry.find(ROOT_SCOPE).unwrap();

    assert_eq!(root.len(), 1);
    assert_eq!(root.contracts(), vec![WIDGET.id()]);
    assert_eq!(registry.binding_count(), 1);
}

#[test]
fn test_modules_receive_config() {
    let bootstrap = HierarchyBootstrap::new().root(ROOT_SCOPE).module(
        ROOT_SCOPE,
        |bindings: &mut BindingTable, config: &IocConfig| -> Result<()> {
            if config.default_scope() == Some(ROOT_SCOPE) {
                bindings.register(widget_binding("configured"));
            }
            Ok(())
        },
    );

    let unset = bootstrap.build(&IocConfig::default()).unwrap();
    assert!(unset.find(ROOT_SCOPE).unwrap().is_empty());

    let set = bootstrap
        .build(&IocConfig::default().with_default_scope(ROOT_SCOPE))
        .unwrap();
    assert_eq!(set.find(ROOT_SCOPE).unwrap().len(), 1);
}
