//! Tests for contract tokens and instance keys

use std::sync::Arc;

use ioc_domain::{Contract, ContractId, InstanceKey, ScopeName};

trait Widget: Send + Sync {}
trait Gadget: Send + Sync {}

const WIDGET: Contract<dyn Widget> = Contract::new("IWidget");
const GADGET: Contract<dyn Gadget> = Contract::new("IGadget");
const WIDGET_ALIAS: Contract<dyn Gadget> = Contract::new("IWidget");

#[test]
fn test_contract_exposes_its_id() {
    assert_eq!(WIDGET.name(), "IWidget");
    assert_eq!(WIDGET.id(), ContractId::new("IWidget"));
    assert_eq!(ContractId::from(GADGET).to_string(), "IGadget");
}

#[test]
fn test_handle_type_tracks_trait_object() {
    assert_eq!(WIDGET.handle_type(), std::any::TypeId::of::<Arc<dyn Widget>>());
    assert_ne!(WIDGET.handle_type(), GADGET.handle_type());
    // Same registration name, different capability set
    assert_eq!(WIDGET.id(), WIDGET_ALIAS.id());
    assert_ne!(WIDGET.handle_type(), WIDGET_ALIAS.handle_type());
}

#[test]
fn test_instance_key_includes_scope() {
    let root = InstanceKey::new(ScopeName::new("RootContext").unwrap(), WIDGET.id());
    let real = InstanceKey::new(ScopeName::new("RealAppContext").unwrap(), WIDGET.id());

    assert_ne!(root, real);
    assert_eq!(root.to_string(), "RootContext::IWidget");
}

#[test]
fn test_scope_name_rejects_blank() {
    assert!(ScopeName::new("").is_err());
    assert!(ScopeName::new("  ").is_err());
    assert!(ScopeName::try_from("RootContext").is_ok());
}

#[test]
fn test_scope_name_serde_is_transparent() {
    let name: ScopeName = serde_json::from_str("\"FakeAppContext\"").unwrap();
    assert_eq!(name.as_str(), "FakeAppContext");
    assert!(serde_json::from_str::<ScopeName>("\"  \"").is_err());
}
