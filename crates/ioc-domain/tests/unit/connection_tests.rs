//! Tests for the composite connection descriptor

use ioc_domain::ConnectionDescriptor;
use ioc_domain::value_objects::connection::parse_segments;
use ioc_domain::constants::{DEFAULT_DATA_METADATA, DEFAULT_DATA_PROVIDER};

#[test]
fn test_descriptor_renders_all_components() {
    let descriptor = ConnectionDescriptor::new(
        DEFAULT_DATA_PROVIDER,
        "Data Source=.;Initial Catalog=store;Integrated Security=True",
        DEFAULT_DATA_METADATA,
    )
    .unwrap();

    assert_eq!(
        descriptor.to_connection_string(),
        format!(
            "metadata={DEFAULT_DATA_METADATA};provider=System.Data.SqlClient;\
             provider connection string=\"Data Source=.;Initial Catalog=store;Integrated Security=True\""
        )
    );
    assert_eq!(descriptor.to_string(), descriptor.to_connection_string());
}

#[test]
fn test_descriptor_without_separator_is_unquoted() {
    let descriptor =
        ConnectionDescriptor::new("Npgsql", "Host=db", "res://*/Model.csdl").unwrap();

    assert_eq!(
        descriptor.to_connection_string(),
        "metadata=res://*/Model.csdl;provider=Npgsql;provider connection string=Host=db"
    );
}

#[test]
fn test_descriptor_rejects_blank_provider_and_metadata() {
    assert!(ConnectionDescriptor::new("", "Host=db", DEFAULT_DATA_METADATA).is_err());
    assert!(ConnectionDescriptor::new(DEFAULT_DATA_PROVIDER, "Host=db", "").is_err());
}

#[test]
fn test_descriptor_accepts_blank_provider_connection_string() {
    for blank in ["", "   "] {
        let descriptor =
            ConnectionDescriptor::new(DEFAULT_DATA_PROVIDER, blank, DEFAULT_DATA_METADATA).unwrap();
        assert_eq!(descriptor.provider_connection_string(), blank);
    }

    let descriptor =
        ConnectionDescriptor::new(DEFAULT_DATA_PROVIDER, "", DEFAULT_DATA_METADATA).unwrap();
    assert!(
        descriptor
            .to_connection_string()
            .ends_with(";provider=System.Data.SqlClient;provider connection string=")
    );
}

#[test]
fn test_descriptor_rejects_malformed_segments() {
    let missing_equals =
        ConnectionDescriptor::new(DEFAULT_DATA_PROVIDER, "Data Source=.;oops", DEFAULT_DATA_METADATA);
    assert!(missing_equals.is_err());

    let empty_key =
        ConnectionDescriptor::new(DEFAULT_DATA_PROVIDER, "=value", DEFAULT_DATA_METADATA);
    assert!(empty_key.is_err());
}

#[test]
fn test_descriptor_tolerates_trailing_separator() {
    let descriptor =
        ConnectionDescriptor::new(DEFAULT_DATA_PROVIDER, "Server=db;", DEFAULT_DATA_METADATA);
    assert!(descriptor.is_ok());
}

#[test]
fn test_descriptor_accepts_separator_inside_quotes() {
    let descriptor = ConnectionDescriptor::new(
        DEFAULT_DATA_PROVIDER,
        "Server=db;Password=\"p;w\";Database=shop",
        DEFAULT_DATA_METADATA,
    )
    .unwrap();

    assert!(descriptor.to_connection_string().ends_with(
        "provider connection string='Server=db;Password=\"p;w\";Database=shop'"
    ));
}

#[test]
fn test_descriptor_doubles_quotes_when_both_kinds_present() {
    let descriptor = ConnectionDescriptor::new(
        DEFAULT_DATA_PROVIDER,
        "Password=it's \"secret\"",
        DEFAULT_DATA_METADATA,
    )
    .unwrap();

    assert!(descriptor.to_connection_string().ends_with(
        "provider connection string=\"Password=it's \"\"secret\"\"\""
    ));
}

#[test]
fn test_descriptor_rejects_unterminated_quote() {
    let result = ConnectionDescriptor::new(
        DEFAULT_DATA_PROVIDER,
        "Server=db;Password=\"open",
        DEFAULT_DATA_METADATA,
    );
    assert!(result.is_err());
}

#[test]
fn test_parse_segments_unquotes_values() {
    let segments =
        parse_segments("Server = db ; Password='it''s;here' ;Name=\"a \"\"b\"\"\"").unwrap();

    assert_eq!(
        segments,
        vec![
            ("Server".to_string(), "db".to_string()),
            ("Password".to_string(), "it's;here".to_string()),
            ("Name".to_string(), "a \"b\"".to_string()),
        ]
    );
    assert!(parse_segments("").unwrap().is_empty());
    assert!(parse_segments("Password=\"x\"junk").is_err());
}
