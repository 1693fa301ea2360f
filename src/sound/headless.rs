//! Sound backend that plays nothing, for servers and other headless processes.

use super::PlayerId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadlessSoundChannel;

impl HeadlessSoundChannel {
    pub fn play_sound_for_all(&self, _clip: &str, _originator: Option<&PlayerId>) {}

    pub fn play_sound_to_players(
        &self,
        _clip: &str,
        _to: &[PlayerId],
        _except: &[PlayerId],
        _include_observers: bool,
    ) {
    }
}
