//! The lobby's startup-time wiring: configuration plus the chosen sound backend.

use crate::config::LobbyPropertyReader;
use crate::sound::SoundChannel;
use crate::Error;

/// Everything the lobby reads from its environment, chosen once at startup.
///
/// ## Example
///
/// ```no_run
/// use lobby_fnd::{LobbyContext, LobbyPropertyReader, SoundChannel};
///
/// let ctx = LobbyContext::builder()
///     .with_properties(LobbyPropertyReader::new()?)
///     .with_sound(SoundChannel::headless())
///     .build()?;
///
/// let port = ctx.properties().port()?;
/// ctx.sound().play_sound_for_all("game_start", None);
/// # Ok::<(), lobby_fnd::Error>(())
/// ```
#[derive(Debug)]
pub struct LobbyContext {
    properties: LobbyPropertyReader,
    sound: SoundChannel,
}

impl LobbyContext {
    /// Creates a new builder for constructing a `LobbyContext`.
    pub fn builder() -> LobbyContextBuilder {
        LobbyContextBuilder::default()
    }

    pub fn properties(&self) -> &LobbyPropertyReader {
        &self.properties
    }

    pub fn sound(&self) -> &SoundChannel {
        &self.sound
    }
}

/// Builder for constructing a [`LobbyContext`].
///
/// Both the properties and the sound backend must be given explicitly.
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct LobbyContextBuilder {
    properties: Option<LobbyPropertyReader>,
    sound: Option<SoundChannel>,
}

impl LobbyContextBuilder {
    pub fn with_properties(mut self, properties: LobbyPropertyReader) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn with_sound(mut self, sound: SoundChannel) -> Self {
        self.sound = Some(sound);
        self
    }

    /// Builds the `LobbyContext`.
    ///
    /// Returns an error if either part was not provided.
    pub fn build(self) -> Result<LobbyContext, Error> {
        Ok(LobbyContext {
            properties: self.properties.ok_or(Error::MissingProperties)?,
            sound: self.sound.ok_or(Error::MissingSound)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapPropertyReader;

    fn properties() -> LobbyPropertyReader {
        LobbyPropertyReader::with_reader(MapPropertyReader::new([("port", "4000")]))
    }

    #[test]
    fn test_build_with_both_parts() {
        let ctx = LobbyContext::builder()
            .with_properties(properties())
            .with_sound(SoundChannel::headless())
            .build()
            .unwrap();

        assert_eq!(ctx.properties().port().unwrap(), 4000);
        assert!(ctx.sound().is_headless());
    }

    #[test]
    fn test_missing_properties() {
        let result = LobbyContext::builder()
            .with_sound(SoundChannel::headless())
            .build();
        assert!(matches!(result, Err(Error::MissingProperties)));
    }

    #[test]
    fn test_missing_sound() {
        let result = LobbyContext::builder().with_properties(properties()).build();
        assert!(matches!(result, Err(Error::MissingSound)));
    }
}
