//! The fixed registry of lobby properties.
//!
//! Each entry is declared once as a typed [`Property`] constant; [`LOBBY_SCHEMA`]
//! is the type-erased view of the same entries, for validation and display.

use serde::Serialize;

/// A named property of type `T`. `default` is `None` for required properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property<T> {
    pub key: &'static str,
    pub default: Option<T>,
}

impl<T: Copy> Property<T> {
    pub const fn required(key: &'static str) -> Self {
        Self { key, default: None }
    }

    pub const fn optional(key: &'static str, default: T) -> Self {
        Self {
            key,
            default: Some(default),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    String,
    Integer,
    Boolean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    String(&'static str),
    Integer(i64),
    Boolean(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaEntry {
    pub key: &'static str,
    pub kind: PropertyKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
}

impl SchemaEntry {
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

impl Property<&'static str> {
    pub const fn entry(self) -> SchemaEntry {
        SchemaEntry {
            key: self.key,
            kind: PropertyKind::String,
            default: match self.default {
                Some(d) => Some(DefaultValue::String(d)),
                None => None,
            },
        }
    }
}

impl Property<u16> {
    pub const fn entry(self) -> SchemaEntry {
        SchemaEntry {
            key: self.key,
            kind: PropertyKind::Integer,
            default: match self.default {
                Some(d) => Some(DefaultValue::Integer(d as i64)),
                None => None,
            },
        }
    }
}

impl Property<bool> {
    pub const fn entry(self) -> SchemaEntry {
        SchemaEntry {
            key: self.key,
            kind: PropertyKind::Boolean,
            default: match self.default {
                Some(d) => Some(DefaultValue::Boolean(d)),
                None => None,
            },
        }
    }
}

pub const PORT: Property<u16> = Property::optional("port", 3304);
pub const POSTGRES_DATABASE: Property<&str> = Property::optional("postgres_database", "ta_users");
pub const POSTGRES_HOST: Property<&str> = Property::optional("postgres_host", "localhost");
pub const POSTGRES_PASSWORD: Property<&str> = Property::required("postgres_password");
pub const POSTGRES_PORT: Property<u16> = Property::optional("postgres_port", 5432);
pub const POSTGRES_USER: Property<&str> = Property::required("postgres_user");
pub const MAINTENANCE_MODE: Property<bool> = Property::optional("maintenance_mode", false);

// Credentials are never defaulted.
pub static LOBBY_SCHEMA: &[SchemaEntry] = &[
    PORT.entry(),
    POSTGRES_DATABASE.entry(),
    POSTGRES_HOST.entry(),
    POSTGRES_PASSWORD.entry(),
    POSTGRES_PORT.entry(),
    POSTGRES_USER.entry(),
    MAINTENANCE_MODE.entry(),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_entries() {
        assert_eq!(
            LOBBY_SCHEMA[0],
            SchemaEntry {
                key: "port",
                kind: PropertyKind::Integer,
                default: Some(DefaultValue::Integer(3304)),
            }
        );
        assert_eq!(
            POSTGRES_HOST.entry().default,
            Some(DefaultValue::String("localhost"))
        );
        assert_eq!(MAINTENANCE_MODE.entry().kind, PropertyKind::Boolean);
        assert!(POSTGRES_USER.entry().is_required());
        assert!(!POSTGRES_PORT.entry().is_required());
    }

    #[test]
    fn test_schema_serializes() {
        let text = toml::to_string(&Dump { entry: LOBBY_SCHEMA.to_vec() }).unwrap();
        assert!(text.contains("key = \"postgres_database\""));
        assert!(text.contains("default = \"ta_users\""));
        assert!(text.contains("kind = \"boolean\""));
    }

    #[derive(Serialize)]
    struct Dump {
        entry: Vec<SchemaEntry>,
    }

    #[test]
    fn test_only_credentials_are_required() {
        let required: Vec<&str> = LOBBY_SCHEMA
            .iter()
            .filter(|e| e.is_required())
            .map(|e| e.key)
            .collect();
        assert_eq!(required, ["postgres_password", "postgres_user"]);
    }

    #[test]
    fn test_defaults_match_kind() {
        for entry in LOBBY_SCHEMA {
            match (entry.kind, entry.default) {
                (_, None) => {}
                (PropertyKind::String, Some(DefaultValue::String(_)))
                | (PropertyKind::Integer, Some(DefaultValue::Integer(_)))
                | (PropertyKind::Boolean, Some(DefaultValue::Boolean(_))) => {}
                other => panic!("mismatched default for {}: {other:?}", entry.key),
            }
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = LOBBY_SCHEMA.iter().map(|e| e.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), LOBBY_SCHEMA.len());
    }
}
