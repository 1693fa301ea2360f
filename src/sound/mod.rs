//! Sound notifications.
//!
//! `SoundChannel` is an enum over the available backends. The variant is chosen
//! once at startup; call sites play sounds unconditionally and never check whether
//! audio is available.

mod headless;

pub use headless::HeadlessSoundChannel;

/// Identifies a player. Owned by the game's player model; only carried through here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// All available sound backends.
///
/// Only the headless backend lives in this crate. Adding a backend = new module +
/// new variant + new arm in each method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SoundChannel {
    Headless(HeadlessSoundChannel),
}

impl SoundChannel {
    /// The backend for processes without audio output.
    pub const fn headless() -> Self {
        SoundChannel::Headless(HeadlessSoundChannel)
    }

    /// Plays `clip` for every player. `originator` is the player whose action
    /// triggered it, if any.
    pub fn play_sound_for_all(&self, clip: &str, originator: Option<&PlayerId>) {
        match self {
            SoundChannel::Headless(c) => c.play_sound_for_all(clip, originator),
        }
    }

    /// Plays `clip` for each player in `to` that is not in `except`, and for
    /// observers when `include_observers` is set.
    pub fn play_sound_to_players(
        &self,
        clip: &str,
        to: &[PlayerId],
        except: &[PlayerId],
        include_observers: bool,
    ) {
        match self {
            SoundChannel::Headless(c) => {
                c.play_sound_to_players(clip, to, except, include_observers)
            }
        }
    }

    pub fn is_headless(&self) -> bool {
        matches!(self, SoundChannel::Headless(_))
    }
}
