//! Unit tests for domain error types

use ioc_domain::Error;
use ioc_domain::constants::DEFAULT_SCOPE_KEY;

#[test]
fn test_configuration_missing_error() {
    let error = Error::configuration_missing(DEFAULT_SCOPE_KEY);
    match &error {
        Error::ConfigurationMissing { key } => assert_eq!(key, "default_scope"),
        _ => panic!("Expected ConfigurationMissing error"),
    }
    assert!(error.is_configuration_missing());
    assert!(error.to_string().contains("default_scope"));
}

#[test]
fn test_scope_not_found_error() {
    let error = Error::scope_not_found("DoesNotExist");
    assert!(error.is_scope_not_found());
    assert_eq!(error.to_string(), "Scope not found: DoesNotExist");
}

#[test]
fn test_binding_not_found_error() {
    let error = Error::binding_not_found("IWidget", "RootContext");
    match error {
        Error::BindingNotFound { contract, scope } => {
            assert_eq!(contract, "IWidget");
            assert_eq!(scope, "RootContext");
        }
        _ => panic!("Expected BindingNotFound error"),
    }
}

#[test]
fn test_bootstrap_error_keeps_source() {
    let io = std::io::Error::other("disk gone");
    let error = Error::bootstrap_with_source("Real scope configuration failed", io);

    assert!(error.is_bootstrap());
    let source = std::error::Error::source(&error).expect("source should be kept");
    assert_eq!(source.to_string(), "disk gone");
}

#[test]
fn test_classification_is_exclusive() {
    let error = Error::construction("IWidget", "factory exploded");
    assert!(!error.is_bootstrap());
    assert!(!error.is_scope_not_found());
    assert!(!error.is_binding_not_found());
    assert!(!error.is_configuration_missing());
}
