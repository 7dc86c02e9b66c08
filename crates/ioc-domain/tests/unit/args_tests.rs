//! Tests for constructor argument lists

use ioc_domain::ConstructorArgs;
use serde_json::json;

#[test]
fn test_args_keep_order() {
    let args = ConstructorArgs::new().with("first").with(2).with(true);

    assert_eq!(args.len(), 3);
    assert_eq!(args.get(0), Some(&json!("first")));
    assert_eq!(args.get(1), Some(&json!(2)));
    assert_eq!(args.iter().count(), 3);
}

#[test]
fn test_str_at_reports_missing_and_wrong_type() {
    let args = ConstructorArgs::new().with("conn").with(42);

    assert_eq!(args.str_at(0).unwrap(), "conn");
    assert!(args.str_at(1).is_err());
    assert!(args.str_at(2).is_err());
    assert!(ConstructorArgs::new().is_empty());
}
