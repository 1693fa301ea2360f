pub mod config;
pub mod context;
mod error;
pub mod sound;

pub use config::{ConfigError, LobbyPropertyReader, PropertyReader};
pub use context::LobbyContext;
pub use error::Error;
pub use sound::{HeadlessSoundChannel, PlayerId, SoundChannel};
