// SPDX-License-Identifier: MPL-2.0
//! Declarative description of the closeup presentation.
//!
//! The controller never touches widgets. It produces a [`Closeup`] describing
//! what the active item must look like, and the rendering adapter applies it.

use crate::domain::MediaId;

/// Controls injected on the item shown in closeup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Previous,
    Next,
    Close,
}

impl Control {
    /// Every control, in the order they are laid out.
    pub const ALL: [Control; 3] = [Control::Previous, Control::Next, Control::Close];

    /// i18n key of the accessible label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Control::Previous => "lightbox-previous",
            Control::Next => "lightbox-next",
            Control::Close => "lightbox-close",
        }
    }

    /// Untranslated accessible label.
    #[must_use]
    pub fn default_label(self) -> &'static str {
        match self {
            Control::Previous => "Previous image",
            Control::Next => "Next image",
            Control::Close => "Close dialog",
        }
    }

    /// Glyph drawn on the control.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Control::Previous => "‹",
            Control::Next => "›",
            Control::Close => "✕",
        }
    }
}

/// Presentation of the single item currently shown in closeup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Closeup {
    pub index: usize,
    pub media_id: MediaId,
    pub controls: [Control; 3],
    /// The like-count indicator is hidden in closeup.
    pub likes_visible: bool,
    /// Hover-driven video preview is suspended in closeup.
    pub hover_preview: bool,
    pub is_video: bool,
}

impl Closeup {
    #[must_use]
    pub fn new(index: usize, media_id: MediaId, is_video: bool) -> Self {
        Self {
            index,
            media_id,
            controls: Control::ALL,
            likes_visible: false,
            hover_preview: false,
            is_video,
        }
    }

    #[must_use]
    pub fn has_control(&self, control: Control) -> bool {
        self.controls.contains(&control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closeup_carries_all_three_controls() {
        let closeup = Closeup::new(0, MediaId(1), false);
        for control in Control::ALL {
            assert!(closeup.has_control(control));
        }
    }

    #[test]
    fn closeup_hides_likes_and_suspends_hover() {
        let closeup = Closeup::new(2, MediaId(9), true);
        assert!(!closeup.likes_visible);
        assert!(!closeup.hover_preview);
        assert!(closeup.is_video);
    }

    #[test]
    fn labels_match_accessible_names() {
        assert_eq!(Control::Previous.default_label(), "Previous image");
        assert_eq!(Control::Next.default_label(), "Next image");
        assert_eq!(Control::Close.default_label(), "Close dialog");
    }
}
