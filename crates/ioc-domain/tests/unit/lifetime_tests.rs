//! Tests for lifetime policies

use ioc_domain::LifetimePolicy;

#[test]
fn test_default_policy_is_per_execution_context() {
    assert_eq!(LifetimePolicy::default(), LifetimePolicy::PerExecutionContext);
}

#[test]
fn test_only_transient_is_uncached() {
    assert!(LifetimePolicy::PerExecutionContext.is_cached());
    assert!(LifetimePolicy::Singleton.is_cached());
    assert!(!LifetimePolicy::Transient.is_cached());
}

#[test]
fn test_policy_serializes_snake_case() {
    let json = serde_json::to_string(&LifetimePolicy::PerExecutionContext).unwrap();
    assert_eq!(json, "\"per_execution_context\"");

    let parsed: LifetimePolicy = serde_json::from_str("\"singleton\"").unwrap();
    assert_eq!(parsed, LifetimePolicy::Singleton);
    assert_eq!(parsed.to_string(), "singleton");
}
