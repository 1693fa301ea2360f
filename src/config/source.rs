//! The property store contract and an in-memory implementation.

use std::collections::BTreeMap;

use super::ConfigError;

/// Read-only access to a set of string properties.
///
/// Implementors only provide [`lookup`](Self::lookup); the typed reads are built on
/// top of it. Values are trimmed before they are interpreted. A value that is
/// present but malformed is always an error, it never falls back to the default.
pub trait PropertyReader: Send + Sync + std::fmt::Debug {
    /// Returns the raw value for `key`, if present.
    fn lookup(&self, key: &str) -> Option<&str>;

    /// A label for where the properties came from, used in error messages.
    fn source_name(&self) -> String;

    fn read_property(&self, key: &str) -> Result<String, ConfigError> {
        self.lookup(key)
            .map(|v| v.trim().to_string())
            .ok_or_else(|| ConfigError::MissingProperty {
                key: key.to_string(),
                source_name: self.source_name(),
            })
    }

    fn read_property_or_default(
        &self,
        key: &str,
        default: &str,
    ) -> Result<String, ConfigError> {
        let value = match self.lookup(key) {
            Some(value) => value.trim(),
            None => default,
        };
        Ok(value.to_string())
    }

    fn read_integer_property(&self, key: &str) -> Result<i64, ConfigError> {
        let value = self.read_property(key)?;
        parse_integer(key, &value)
    }

    fn read_integer_property_or_default(
        &self,
        key: &str,
        default: i64,
    ) -> Result<i64, ConfigError> {
        match self.lookup(key) {
            Some(value) => parse_integer(key, value.trim()),
            None => Ok(default),
        }
    }

    fn read_boolean_property(&self, key: &str) -> Result<bool, ConfigError> {
        let value = self.read_property(key)?;
        parse_boolean(key, &value)
    }

    fn read_boolean_property_or_default(
        &self,
        key: &str,
        default: bool,
    ) -> Result<bool, ConfigError> {
        match self.lookup(key) {
            Some(value) => parse_boolean(key, value.trim()),
            None => Ok(default),
        }
    }
}

fn parse_integer(key: &str, value: &str) -> Result<i64, ConfigError> {
    value
        .parse::<i64>()
        .map_err(|_| ConfigError::invalid_format(key, value, "a base-10 integer"))
}

fn parse_boolean(key: &str, value: &str) -> Result<bool, ConfigError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConfigError::invalid_format(key, value, "'true' or 'false'"))
    }
}

/// Properties held in memory, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MapPropertyReader {
    name: String,
    values: BTreeMap<String, String>,
}

impl MapPropertyReader {
    pub fn new<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: "in-memory properties".to_string(),
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Overrides the label reported by [`PropertyReader::source_name`].
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl PropertyReader for MapPropertyReader {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn source_name(&self) -> String {
        self.name.clone()
    }
}
