//! Loads the lobby properties from the working directory and prints the effective
//! settings.
//!
//! Run with `RUST_LOG=lobby_fnd=debug` to see which candidate file was chosen.

use lobby_fnd::{LobbyContext, LobbyPropertyReader, SoundChannel};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let ctx = LobbyContext::builder()
        .with_properties(LobbyPropertyReader::new()?.with_env_overrides("LOBBY", "__"))
        .with_sound(SoundChannel::headless())
        .build()?;

    // Fail at startup rather than on first use of a missing credential.
    ctx.properties().validate()?;

    let settings = ctx.properties().settings()?;
    print!("{}", settings.to_toml()?);

    ctx.sound().play_sound_for_all("lobby_ready", None);
    Ok(())
}
