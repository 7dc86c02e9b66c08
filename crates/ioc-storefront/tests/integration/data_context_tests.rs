//! Data context bindings in the real and fake scopes

use std::sync::Arc;

use ioc_domain::Error;
use ioc_domain::constants::{FAKE_SCOPE, REAL_SCOPE, ROOT_SCOPE};
use ioc_infrastructure::config::IocConfig;
use ioc_infrastructure::di::{BindingTable, Resolver};
use ioc_storefront::data::IN_MEMORY_PROVIDER;
use ioc_storefront::services::{CUSTOMER_SERVICE, CustomerService, StorefrontService};
use ioc_storefront::{DATA_CONTEXT, DataContext, storefront_bootstrap};

const CONNECTION: &str = "Data Source=.;Initial Catalog=storefront;Integrated Security=True";

#[test]
fn test_real_scope_binds_entity_context() {
    let resolver = Resolver::new(
        IocConfig::default()
            .with_default_scope(REAL_SCOPE)
            .with_connection_string(CONNECTION),
        storefront_bootstrap(),
    );
    let ctx = resolver.begin_context();

    let data = ctx.resolve(DATA_CONTEXT).unwrap();
    assert_eq!(data.provider(), "System.Data.SqlClient");
    assert!(data.is_persistent());

    let connection = data.connection_string().unwrap();
    assert!(connection.starts_with("metadata=res://*/"));
    assert!(connection.contains(";provider=System.Data.SqlClient;"));
    assert!(connection.ends_with(&format!("provider connection string=\"{CONNECTION}\"")));

    assert!(Arc::ptr_eq(&data, &ctx.resolve(DATA_CONTEXT).unwrap()));
}

#[test]
fn test_fake_scope_binds_in_memory_context() {
    let resolver = Resolver::new(
        IocConfig::default().with_default_scope(FAKE_SCOPE),
        storefront_bootstrap(),
    );
    let ctx = resolver.begin_context();

    let data = ctx.resolve(DATA_CONTEXT).unwrap();
    assert_eq!(data.provider(), IN_MEMORY_PROVIDER);
    assert!(data.connection_string().is_none());
    assert!(!data.is_persistent());
}

#[test]
fn test_root_scope_has_no_data_context() {
    let resolver = Resolver::new(
        IocConfig::default().with_connection_string(CONNECTION),
        storefront_bootstrap(),
    );
    let ctx = resolver.begin_context();

    let err = ctx.resolve_in(DATA_CONTEXT, Some(ROOT_SCOPE)).err().expect("resolution should fail");
    assert!(err.is_binding_not_found());
}

#[test]
fn test_blank_connection_string_still_bootstraps() {
    let resolver = Resolver::new(IocConfig::default(), storefront_bootstrap());
    let ctx = resolver.begin_context();

    let fake = ctx.resolve_in(DATA_CONTEXT, Some(FAKE_SCOPE)).unwrap();
    assert_eq!(fake.provider(), IN_MEMORY_PROVIDER);

    let real = ctx.resolve_in(DATA_CONTEXT, Some(REAL_SCOPE)).unwrap();
    assert!(
        real.connection_string()
            .unwrap()
            .ends_with(";provider connection string=")
    );
    assert!(resolver.is_initialized());
}

#[test]
fn test_malformed_connection_string_fails_bootstrap() {
    for connection in ["Data Source", "=storefront", "Password=\"open"] {
        let resolver = Resolver::new(
            IocConfig::default().with_connection_string(connection),
            storefront_bootstrap(),
        );
        let err = resolver.ensure_initialized().unwrap_err();
        assert!(matches!(err, Error::Bootstrap { .. }), "{connection}: {err:?}");
    }
}

#[test]
fn test_quoted_separator_in_password_bootstraps() {
    let resolver = Resolver::new(
        IocConfig::default()
            .with_default_scope(REAL_SCOPE)
            .with_connection_string("Server=db;Password=\"p;w\";Database=shop"),
        storefront_bootstrap(),
    );
    let ctx = resolver.begin_context();

    let data = ctx.resolve(DATA_CONTEXT).unwrap();
    assert!(data.connection_string().unwrap().contains("Password=\"p;w\""));
}

/// Customer service double that reports a fixed name
struct RecordingCustomerService;

impl StorefrontService for RecordingCustomerService {
    fn service_name(&self) -> &'static str {
        "RecordingCustomerService"
    }
}

impl CustomerService for RecordingCustomerService {}

#[test]
fn test_fake_scope_can_rebind_services_before_bootstrap() {
    let bootstrap = storefront_bootstrap().module(
        FAKE_SCOPE,
        |bindings: &mut BindingTable, _: &IocConfig| -> ioc_domain::Result<()> {
            bindings.register(ioc_infrastructure::di::Binding::new(
                CUSTOMER_SERVICE,
                "RecordingCustomerService",
                |_| Ok(Arc::new(RecordingCustomerService) as Arc<dyn CustomerService>),
            ));
            Ok(())
        },
    );
    let resolver = Resolver::new(
        IocConfig::default().with_connection_string(CONNECTION),
        bootstrap,
    );
    let ctx = resolver.begin_context();

    let fake = ctx.resolve_in(CUSTOMER_SERVICE, Some(FAKE_SCOPE)).unwrap();
    let real = ctx.resolve_in(CUSTOMER_SERVICE, Some(REAL_SCOPE)).unwrap();
    assert_eq!(fake.service_name(), "RecordingCustomerService");
    assert_eq!(real.service_name(), "DefaultCustomerService");
}
