//! Lobby configuration: locating, loading and reading the property file.

mod env;
mod error;
mod file;
mod lobby;
mod resolve;
pub mod schema;
mod source;

pub use env::EnvOverlay;
pub use error::ConfigError;
pub use file::FilePropertyReader;
pub use lobby::{
    LobbyPropertyReader, LobbySettings, PRIMARY_PROPERTIES_PATH, SECONDARY_PROPERTIES_PATH,
};
pub use resolve::resolve_path;
pub use source::{MapPropertyReader, PropertyReader};
