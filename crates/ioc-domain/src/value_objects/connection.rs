//! Composite connection descriptor for the entity data context
//!
//! The descriptor joins three components into one connection string:
//!
//! ```text
//! metadata=<locator>;provider=<invariant name>;provider connection string="<inner>"
//! ```
//!
//! Values are quoted when they contain `;`, a quote character, or
//! surrounding whitespace. Double quotes are preferred; single quotes are
//! used when the value itself contains only double quotes. A value holding
//! both kinds is double-quoted with each inner `"` doubled, which is also how
//! quotes inside quoted values are read back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const METADATA_KEYWORD: &str = "metadata";
const PROVIDER_KEYWORD: &str = "provider";
const PROVIDER_CONNECTION_STRING_KEYWORD: &str = "provider connection string";

/// Validated components of the data context connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDescriptor {
    provider: String,
    provider_connection_string: String,
    metadata: String,
}

impl ConnectionDescriptor {
    /// Validate and assemble a descriptor
    ///
    /// The provider connection string may be blank; when present it must be a
    /// well-formed `key=value` list. Fails with [`Error::InvalidArgument`] when
    /// the provider or metadata is blank, or when a segment has no `=`, an
    /// empty keyword, or an unterminated quoted value.
    pub fn new<P, C, M>(provider: P, provider_connection_string: C, metadata: M) -> Result<Self>
    where
        P: Into<String>,
        C: Into<String>,
        M: Into<String>,
    {
        let descriptor = Self {
            provider: provider.into(),
            provider_connection_string: provider_connection_string.into(),
            metadata: metadata.into(),
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Provider invariant name
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Provider-specific connection string
    pub fn provider_connection_string(&self) -> &str {
        &self.provider_connection_string
    }

    /// Metadata locator
    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    /// Render the composite connection string
    pub fn to_connection_string(&self) -> String {
        [
            (METADATA_KEYWORD, self.metadata.as_str()),
            (PROVIDER_KEYWORD, self.provider.as_str()),
            (
                PROVIDER_CONNECTION_STRING_KEYWORD,
                self.provider_connection_string.as_str(),
            ),
        ]
        .iter()
        .map(|(key, value)| format!("{key}={}", quote_value(value)))
        .collect::<Vec<_>>()
        .join(";")
    }

    fn validate(&self) -> Result<()> {
        if self.provider.trim().is_empty() {
            return Err(Error::invalid_argument("Data provider name cannot be blank"));
        }
        if self.metadata.trim().is_empty() {
            return Err(Error::invalid_argument("Data metadata locator cannot be blank"));
        }
        parse_segments(&self.provider_connection_string)?;
        Ok(())
    }
}

impl fmt::Display for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_connection_string())
    }
}

/// Split a `key=value;…` connection string into unquoted pairs
///
/// Quoted values may contain `;`; a doubled quote inside a quoted value
/// stands for one literal quote. Empty segments are skipped.
pub fn parse_segments(input: &str) -> Result<Vec<(String, String)>> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace() || *c == ';').is_some() {}
        if chars.peek().is_none() {
            break;
        }

        let mut key = String::new();
        loop {
            match chars.next() {
                Some('=') => break,
                Some(';') | None => {
                    return Err(Error::invalid_argument(format!(
                        "Malformed connection string segment '{}': expected key=value",
                        key.trim()
                    )));
                }
                Some(c) => key.push(c),
            }
        }
        let key = key.trim().to_string();
        if key.is_empty() {
            return Err(Error::invalid_argument(
                "Malformed connection string segment: empty keyword",
            ));
        }

        while chars.next_if(|c| *c != ';' && c.is_whitespace()).is_some() {}
        let value = match chars.peek().copied() {
            Some(quote @ ('"' | '\'')) => {
                chars.next();
                let mut value = String::new();
                loop {
                    match chars.next() {
                        Some(c) if c == quote => {
                            if chars.next_if_eq(&quote).is_some() {
                                value.push(quote);
                            } else {
                                break;
                            }
                        }
                        Some(c) => value.push(c),
                        None => {
                            return Err(Error::invalid_argument(format!(
                                "Unterminated quoted value for '{key}'"
                            )));
                        }
                    }
                }
                while chars.next_if(|c| *c != ';' && c.is_whitespace()).is_some() {}
                if chars.next_if(|c| *c != ';').is_some() {
                    return Err(Error::invalid_argument(format!(
                        "Unexpected text after quoted value for '{key}'"
                    )));
                }
                value
            }
            _ => {
                let mut value = String::new();
                while let Some(c) = chars.next_if(|c| *c != ';') {
                    value.push(c);
                }
                value.trim().to_string()
            }
        };
        segments.push((key, value));
    }

    Ok(segments)
}

fn quote_value(value: &str) -> String {
    let needs_quotes = value.contains([';', '"', '\''])
        || value.starts_with(char::is_whitespace)
        || value.ends_with(char::is_whitespace);
    if !needs_quotes {
        return value.to_string();
    }

    match (value.contains('"'), value.contains('\'')) {
        (false, _) => format!("\"{value}\""),
        (true, false) => format!("'{value}'"),
        (true, true) => format!("\"{}\"", value.replace('"', "\"\"")),
    }
}
