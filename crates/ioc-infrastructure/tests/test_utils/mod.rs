//! Shared fixtures: a widget contract bound in a three-scope hierarchy

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ioc_domain::constants::{FAKE_SCOPE, REAL_SCOPE, ROOT_SCOPE};
use ioc_domain::{Contract, Result};
use ioc_infrastructure::config::IocConfig;
use ioc_infrastructure::di::{
    Binding, BindingTable, HierarchyBootstrap, RegistryBootstrap, ScopeRegistry,
};

pub trait Widget: Send + Sync {
    fn label(&self) -> &str;
}

#[derive(Debug)]
pub struct WidgetImpl {
    label: String,
}

impl WidgetImpl {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
        }
    }
}

impl Widget for WidgetImpl {
    fn label(&self) -> &str {
        &self.label
    }
}

pub const WIDGET: Contract<dyn Widget> = Contract::new("IWidget");

pub fn widget_binding(label: &'static str) -> Binding {
    Binding::new(WIDGET, "WidgetImpl", move |_| {
        Ok(Arc::new(WidgetImpl::new(label)) as Arc<dyn Widget>)
    })
}

/// Root, real and fake scopes with `IWidget` bound in the root only
pub fn widget_hierarchy() -> HierarchyBootstrap {
    HierarchyBootstrap::new()
        .root(ROOT_SCOPE)
        .child(REAL_SCOPE, ROOT_SCOPE)
        .child(FAKE_SCOPE, ROOT_SCOPE)
        .module(
            ROOT_SCOPE,
            |bindings: &mut BindingTable, _: &IocConfig| -> Result<()> {
                bindings.register(widget_binding("root"));
                Ok(())
            },
        )
}

/// Bootstrap wrapper counting how many builds actually ran
pub struct CountingBootstrap {
    inner: HierarchyBootstrap,
    builds: Arc<AtomicUsize>,
}

impl CountingBootstrap {
    pub fn new(inner: HierarchyBootstrap) -> (Self, Arc<AtomicUsize>) {
        let builds = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                builds: Arc::clone(&builds),
            },
            builds,
        )
    }
}

impl RegistryBootstrap for CountingBootstrap {
    fn build(&self, config: &IocConfig) -> Result<ScopeRegistry> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        // Widen the race window for concurrent first access
        std::thread::sleep(std::time::Duration::from_millis(20));
        self.inner.build(config)
    }
}
