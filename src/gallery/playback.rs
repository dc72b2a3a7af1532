// SPDX-License-Identifier: MPL-2.0
//! Video playback state of a card.
//!
//! Clips are muted and loop, so there is no end state: a video is either
//! playing or paused at some position.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

impl PlaybackState {
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// Playback state plus elapsed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Playback {
    state: PlaybackState,
    position: Duration,
}

impl Playback {
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    #[must_use]
    pub fn position(&self) -> Duration {
        self.position
    }

    pub fn play(&mut self) {
        self.state = PlaybackState::Playing;
    }

    pub fn pause(&mut self) {
        self.state = PlaybackState::Paused;
    }

    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Stops a preview: pause and go back to the first frame.
    pub fn pause_and_rewind(&mut self) {
        self.state = PlaybackState::Paused;
        self.position = Duration::ZERO;
    }

    /// Advances the position by `delta` when playing.
    pub fn advance(&mut self, delta: Duration) {
        if self.is_playing() {
            self.position = self.position.saturating_add(delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_paused_at_zero() {
        let playback = Playback::default();
        assert_eq!(playback.state(), PlaybackState::Paused);
        assert_eq!(playback.position(), Duration::ZERO);
    }

    #[test]
    fn advance_only_moves_while_playing() {
        let mut playback = Playback::default();
        playback.advance(Duration::from_millis(500));
        assert_eq!(playback.position(), Duration::ZERO);

        playback.play();
        playback.advance(Duration::from_millis(500));
        playback.advance(Duration::from_millis(250));
        assert_eq!(playback.position(), Duration::from_millis(750));
    }

    #[test]
    fn toggle_keeps_position() {
        let mut playback = Playback::default();
        playback.play();
        playback.advance(Duration::from_secs(2));
        playback.toggle();

        assert!(!playback.is_playing());
        assert_eq!(playback.position(), Duration::from_secs(2));
    }

    #[test]
    fn pause_and_rewind_resets_position() {
        let mut playback = Playback::default();
        playback.play();
        playback.advance(Duration::from_secs(3));
        playback.pause_and_rewind();

        assert!(!playback.is_playing());
        assert_eq!(playback.position(), Duration::ZERO);
    }
}
