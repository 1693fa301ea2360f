//! Typed access to the lobby's deployment properties.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use super::env::EnvOverlay;
use super::file::FilePropertyReader;
use super::resolve::resolve_path;
use super::schema::{self, DefaultValue, Property, PropertyKind, SchemaEntry, LOBBY_SCHEMA};
use super::source::PropertyReader;
use super::ConfigError;

/// Where deployments put the lobby properties.
pub const PRIMARY_PROPERTIES_PATH: &str = "config/lobby/lobby.properties";
/// Fallback used when running from a development checkout.
pub const SECONDARY_PROPERTIES_PATH: &str = "lobby.properties";

/// Reads the lobby properties through a fixed set of typed accessors.
///
/// Optional properties fall back to their defaults when absent. Required ones
/// (the database credentials) are only checked when their accessor is called;
/// call [`validate`](Self::validate) right after construction to fail fast.
///
/// ## Example
///
/// ```no_run
/// use lobby_fnd::LobbyPropertyReader;
///
/// let props = LobbyPropertyReader::new()?;
/// let port = props.port()?;
/// let user = props.postgres_user()?;
/// # Ok::<(), lobby_fnd::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct LobbyPropertyReader {
    reader: Box<dyn PropertyReader>,
    path: Option<PathBuf>,
}

impl LobbyPropertyReader {
    /// Loads the first of [`PRIMARY_PROPERTIES_PATH`] and
    /// [`SECONDARY_PROPERTIES_PATH`] that exists, relative to the working directory.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load([
            Path::new(PRIMARY_PROPERTIES_PATH),
            Path::new(SECONDARY_PROPERTIES_PATH),
        ])
    }

    /// Like [`new`](Self::new), but resolves both candidates under `base`.
    pub fn from_dir(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let base = base.as_ref();
        Self::load([
            base.join(PRIMARY_PROPERTIES_PATH),
            base.join(SECONDARY_PROPERTIES_PATH),
        ])
    }

    /// Wraps an already constructed reader.
    pub fn with_reader(reader: impl PropertyReader + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            path: None,
        }
    }

    /// Lets `{prefix}{separator}{KEY}` environment variables override the file.
    pub fn with_env_overrides(
        self,
        prefix: impl Into<String>,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            reader: Box::new(EnvOverlay::new(self.reader, prefix, separator)),
            path: self.path,
        }
    }

    fn load<P: AsRef<Path>>(candidates: [P; 2]) -> Result<Self, ConfigError> {
        let path = resolve_path(candidates)?;
        let reader = FilePropertyReader::open(&path)?;
        info!(path = %path.display(), "using lobby properties");
        Ok(Self {
            reader: Box::new(reader),
            path: Some(path),
        })
    }

    /// The file the properties were loaded from, if they came from a file.
    pub fn resolved_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn port(&self) -> Result<u16, ConfigError> {
        self.port_value(&schema::PORT)
    }

    pub fn postgres_database(&self) -> Result<String, ConfigError> {
        self.string(&schema::POSTGRES_DATABASE)
    }

    pub fn postgres_host(&self) -> Result<String, ConfigError> {
        self.string(&schema::POSTGRES_HOST)
    }

    pub fn postgres_password(&self) -> Result<String, ConfigError> {
        self.string(&schema::POSTGRES_PASSWORD)
    }

    pub fn postgres_port(&self) -> Result<u16, ConfigError> {
        self.port_value(&schema::POSTGRES_PORT)
    }

    pub fn postgres_user(&self) -> Result<String, ConfigError> {
        self.string(&schema::POSTGRES_USER)
    }

    pub fn is_maintenance_mode(&self) -> Result<bool, ConfigError> {
        self.flag(&schema::MAINTENANCE_MODE)
    }

    /// Reads every entry of [`LOBBY_SCHEMA`] and reports all failures at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let errors: Vec<ConfigError> = LOBBY_SCHEMA
            .iter()
            .filter_map(|entry| self.check(entry).err())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    /// The effective settings, with the password left out.
    pub fn settings(&self) -> Result<LobbySettings, ConfigError> {
        Ok(LobbySettings {
            port: self.port()?,
            postgres_database: self.postgres_database()?,
            postgres_host: self.postgres_host()?,
            postgres_port: self.postgres_port()?,
            postgres_user: self.postgres_user()?,
            maintenance_mode: self.is_maintenance_mode()?,
        })
    }

    fn string(&self, property: &Property<&'static str>) -> Result<String, ConfigError> {
        match property.default {
            Some(default) => self.reader.read_property_or_default(property.key, default),
            None => self.reader.read_property(property.key),
        }
    }

    fn port_value(&self, property: &Property<u16>) -> Result<u16, ConfigError> {
        let raw = match property.default {
            Some(default) => self
                .reader
                .read_integer_property_or_default(property.key, i64::from(default))?,
            None => self.reader.read_integer_property(property.key)?,
        };
        narrow_port(property.key, raw)
    }

    fn flag(&self, property: &Property<bool>) -> Result<bool, ConfigError> {
        match property.default {
            Some(default) => self
                .reader
                .read_boolean_property_or_default(property.key, default),
            None => self.reader.read_boolean_property(property.key),
        }
    }

    fn check(&self, entry: &SchemaEntry) -> Result<(), ConfigError> {
        let key = entry.key;
        match (entry.kind, entry.default) {
            (PropertyKind::String, _) if entry.is_required() => {
                self.reader.read_property(key).map(drop)
            }
            (PropertyKind::String, _) => Ok(()),
            (PropertyKind::Integer, Some(DefaultValue::Integer(default))) => {
                let raw = self.reader.read_integer_property_or_default(key, default)?;
                narrow_port(key, raw).map(drop)
            }
            (PropertyKind::Integer, _) => {
                let raw = self.reader.read_integer_property(key)?;
                narrow_port(key, raw).map(drop)
            }
            (PropertyKind::Boolean, Some(DefaultValue::Boolean(default))) => self
                .reader
                .read_boolean_property_or_default(key, default)
                .map(drop),
            (PropertyKind::Boolean, _) => self.reader.read_boolean_property(key).map(drop),
        }
    }
}

// Integer entries in the registry are all port numbers.
fn narrow_port(key: &str, raw: i64) -> Result<u16, ConfigError> {
    u16::try_from(raw).map_err(|_| {
        ConfigError::invalid_format(key, &raw.to_string(), "a port number (0-65535)")
    })
}

/// A snapshot of the lobby settings, safe to log or print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LobbySettings {
    pub port: u16,
    pub postgres_database: String,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub maintenance_mode: bool,
}

impl LobbySettings {
    /// Renders the settings as TOML, for startup logs and operator tooling.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
