//! Item encoding contract shared by every DynamoDB write and read.
//!
//! Writes never persist a null marker for an absent value: the attribute is
//! left out. Empty strings are kept as-is. Reads hand back native values
//! (numbers parsed from `N`, timestamps parsed from RFC 3339) and fail on
//! any attribute whose type does not match, instead of coercing it.

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, SecondsFormat, Utc};
use taskboard_core::storage::RepositoryError;

/// A DynamoDB item as sent to and returned by the SDK.
pub type Item = HashMap<String, AttributeValue>;

/// Builds an [`Item`] attribute by attribute.
#[derive(Debug, Clone, Default)]
pub struct ItemBuilder {
    item: Item,
}

impl ItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a string attribute. Empty strings are stored, not dropped.
    pub fn string(mut self, key: &str, value: impl Into<String>) -> Self {
        self.item
            .insert(key.to_string(), AttributeValue::S(value.into()));
        self
    }

    /// Adds a string attribute only when a value is present.
    pub fn optional_string(self, key: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.string(key, value),
            None => self,
        }
    }

    /// Adds a numeric attribute.
    pub fn number(mut self, key: &str, value: impl Display) -> Self {
        self.item
            .insert(key.to_string(), AttributeValue::N(value.to_string()));
        self
    }

    /// Adds a timestamp attribute as RFC 3339 UTC.
    pub fn datetime(self, key: &str, value: &DateTime<Utc>) -> Self {
        self.string(key, format_datetime(value))
    }

    pub fn build(self) -> Item {
        self.item
    }
}

/// Formats a timestamp as RFC 3339 with the shortest exact sub-second
/// precision, so parsing it back yields the same instant.
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Get a required string attribute.
pub fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
///
/// Absent is `None`; present with a non-string type is an error.
pub fn get_optional_string(item: &Item, key: &str) -> Result<Option<String>, RepositoryError> {
    match item.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_s()
            .map(|s| Some(s.to_string()))
            .map_err(|_| RepositoryError::InvalidData(format!("Invalid field type: {}", key))),
    }
}

/// Get a required numeric attribute as a native number.
pub fn get_number<T>(item: &Item, key: &str) -> Result<T, RepositoryError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?;

    raw.parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

/// Get a required string attribute and parse it with `FromStr`.
pub fn get_parsed<T>(item: &Item, key: &str) -> Result<T, RepositoryError>
where
    T: FromStr,
    T::Err: Display,
{
    let s = get_string(item, key)?;
    s.parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid {}: {}", key, e)))
}

/// Get a required datetime attribute (RFC 3339 format).
pub fn get_datetime(item: &Item, key: &str) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}
