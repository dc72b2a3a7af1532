// SPDX-License-Identifier: MPL-2.0
//! Lightbox controller: shows one media item of the page in closeup.
//!
//! The controller is a two-state machine, `Closed` and `Open(index)`, over
//! the page's ordered [`MediaSequence`]. It never touches widgets directly.
//! Each transition returns the ordered list of [`Effect`]s the rendering
//! adapter must apply. Teardown of the previous item always comes before
//! setup of the next one, so at most one item is ever in closeup.
//!
//! Invalid media ids are ignored without any state change.

mod closeup;
mod focus;
mod sequence;

pub use closeup::{Closeup, Control};
pub use focus::{FocusTarget, FocusTrap, TabPhase, FOCUS_RING};
pub use sequence::MediaSequence;

use crate::domain::MediaId;

/// Keys the lightbox listens to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Space,
    Tab,
    ShiftTab,
}

/// Instruction for the rendering adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Remove the controls from the item, clear its closeup flag and show its
    /// like counter again. When `stop_video` is set, a playing video is paused
    /// and rewound.
    Unmount { index: usize, stop_video: bool },
    /// Put the described item in closeup.
    Mount(Closeup),
    /// Disable page scrolling.
    LockScroll,
    /// Re-enable page scrolling.
    ReleaseScroll,
    /// Move keyboard focus inside the closeup.
    Focus(FocusTarget),
    /// Give focus back to the gallery item that opened the lightbox.
    RestoreFocus(MediaId),
    /// Play or pause the video shown in closeup.
    TogglePlayback { index: usize },
}

/// Lightbox session state.
///
/// `active` is `None` exactly when the lightbox is closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    active: Option<usize>,
    focus: FocusTrap,
    opener: Option<MediaId>,
}

impl Lightbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Id of the media in closeup, looked up from the sequence.
    #[must_use]
    pub fn active_media<S>(&self, seq: &S) -> Option<MediaId>
    where
        S: MediaSequence + ?Sized,
    {
        self.active.and_then(|index| seq.media_id(index))
    }

    #[must_use]
    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus.focused()
    }

    /// Description of the item currently in closeup.
    #[must_use]
    pub fn closeup<S>(&self, seq: &S) -> Option<Closeup>
    where
        S: MediaSequence + ?Sized,
    {
        let index = self.active?;
        let media_id = seq.media_id(index)?;
        Some(Closeup::new(index, media_id, seq.is_video(index)))
    }

    /// Opens the media with the given id, switching away from the current one
    /// if needed. Unknown ids and the already active id are no-ops.
    pub fn open_media<S>(&mut self, seq: &S, id: MediaId) -> Vec<Effect>
    where
        S: MediaSequence + ?Sized,
    {
        let Some(index) = seq.position(id) else {
            tracing::debug!(%id, "ignoring lightbox request for unknown media");
            return Vec::new();
        };

        if self.active == Some(index) {
            return Vec::new();
        }

        if self.active.is_none() {
            self.opener = Some(id);
        }

        tracing::info!(from = ?self.active, to = index, "switching closeup media");
        self.transition(seq, Some(index))
    }

    /// Closes the lightbox. No-op when already closed.
    pub fn close<S>(&mut self, seq: &S) -> Vec<Effect>
    where
        S: MediaSequence + ?Sized,
    {
        if self.active.is_none() {
            return Vec::new();
        }
        self.transition(seq, None)
    }

    /// Shows the following media, wrapping to the first one.
    pub fn next<S>(&mut self, seq: &S) -> Vec<Effect>
    where
        S: MediaSequence + ?Sized,
    {
        match self.active {
            Some(index) if !seq.is_empty() => {
                self.transition(seq, Some((index + 1) % seq.len()))
            }
            _ => Vec::new(),
        }
    }

    /// Shows the preceding media, wrapping to the last one.
    pub fn previous<S>(&mut self, seq: &S) -> Vec<Effect>
    where
        S: MediaSequence + ?Sized,
    {
        match self.active {
            Some(index) if !seq.is_empty() => {
                let len = seq.len();
                self.transition(seq, Some((index + len - 1) % len))
            }
            _ => Vec::new(),
        }
    }

    /// Pointer activation of a closeup control.
    pub fn activate<S>(&mut self, seq: &S, control: Control) -> Vec<Effect>
    where
        S: MediaSequence + ?Sized,
    {
        if self.active.is_none() {
            return Vec::new();
        }
        match control {
            Control::Previous => self.previous(seq),
            Control::Next => self.next(seq),
            Control::Close => self.close(seq),
        }
    }

    /// Pointer activation of the media shown in closeup.
    pub fn activate_media<S>(&mut self, seq: &S) -> Vec<Effect>
    where
        S: MediaSequence + ?Sized,
    {
        match self.active {
            Some(index) if seq.is_video(index) => vec![Effect::TogglePlayback { index }],
            _ => Vec::new(),
        }
    }

    /// Keyboard handling while open. Keys are ignored when closed.
    pub fn handle_key<S>(&mut self, seq: &S, key: LightboxKey) -> Vec<Effect>
    where
        S: MediaSequence + ?Sized,
    {
        if self.active.is_none() {
            return Vec::new();
        }

        match key {
            LightboxKey::ArrowLeft => self.previous(seq),
            LightboxKey::ArrowRight => self.next(seq),
            LightboxKey::Escape => {
                let opener = self.opener;
                let mut effects = self.close(seq);
                if let Some(opener) = opener {
                    effects.push(Effect::RestoreFocus(opener));
                }
                effects
            }
            LightboxKey::Enter | LightboxKey::Space => match self.focus.focused() {
                Some(FocusTarget::Control(control)) => self.activate(seq, control),
                Some(FocusTarget::Media) => self.activate_media(seq),
                None => Vec::new(),
            },
            LightboxKey::Tab => self.focus.tab_forward().map(Effect::Focus).into_iter().collect(),
            LightboxKey::ShiftTab => self
                .focus
                .tab_backward()
                .map(Effect::Focus)
                .into_iter()
                .collect(),
        }
    }

    /// Teardown of the current item (if any) followed by setup of `target`.
    fn transition<S>(&mut self, seq: &S, target: Option<usize>) -> Vec<Effect>
    where
        S: MediaSequence + ?Sized,
    {
        let mut effects = Vec::with_capacity(4);
        let was_open = self.active.is_some();

        if let Some(index) = self.active.take() {
            effects.push(Effect::Unmount {
                index,
                stop_video: seq.is_video(index),
            });
        }

        let setup = target.and_then(|index| {
            seq.media_id(index)
                .map(|media_id| Closeup::new(index, media_id, seq.is_video(index)))
        });

        match setup {
            Some(closeup) => {
                self.active = Some(closeup.index);
                effects.push(Effect::Mount(closeup));
                if !was_open {
                    effects.push(Effect::LockScroll);
                }
                effects.push(Effect::Focus(self.focus.enter()));
            }
            None => {
                self.focus.release();
                self.opener = None;
                if was_open {
                    effects.push(Effect::ReleaseScroll);
                }
                tracing::debug!("lightbox closed");
            }
        }

        effects
    }
}
