use crate::config::ConfigError;
use thiserror::Error;

/// Top-level error type for the lobby-fnd library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("lobby context requires a property reader")]
    MissingProperties,

    #[error("lobby context requires a sound channel")]
    MissingSound,
}
