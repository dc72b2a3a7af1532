// SPDX-License-Identifier: MPL-2.0
//! The ordered media of one photographer's page.
//!
//! A [`Gallery`] owns one [`Card`] per media in display order. It is the
//! sequence the lightbox navigates and the adapter that applies the
//! lightbox's [`Effect`]s to the cards. Besides that it carries the sort
//! filter, the like counter and per-card video playback.

mod playback;
mod sort;

pub use playback::{Playback, PlaybackState};
pub use sort::SortBy;

use crate::domain::{Media, MediaId};
use crate::lightbox::{Effect, MediaSequence};
use crate::session::TabOrder;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    /// The order must stay fixed while a lightbox session is open.
    #[error("the media order cannot change while the lightbox is open")]
    LightboxOpen,

    #[error("no media with id {0} on this page")]
    UnknownMedia(MediaId),
}

/// How a card is currently drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub closeup: bool,
    pub likes_visible: bool,
    pub hover_preview: bool,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            closeup: false,
            likes_visible: true,
            hover_preview: true,
        }
    }
}

/// One media of the gallery with its page-local state.
#[derive(Debug, Clone)]
pub struct Card {
    pub media: Media,
    liked: bool,
    likes: u32,
    tab_index: u32,
    presentation: Presentation,
    playback: Option<Playback>,
}

impl Card {
    fn new(media: Media) -> Self {
        let playback = media.is_video().then(Playback::default);
        Self {
            likes: media.likes,
            media,
            liked: false,
            tab_index: 0,
            presentation: Presentation::default(),
            playback,
        }
    }

    #[must_use]
    pub fn id(&self) -> MediaId {
        self.media.id
    }

    #[must_use]
    pub fn liked(&self) -> bool {
        self.liked
    }

    #[must_use]
    pub fn likes(&self) -> u32 {
        self.likes
    }

    #[must_use]
    pub fn tab_index(&self) -> u32 {
        self.tab_index
    }

    #[must_use]
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    #[must_use]
    pub fn in_closeup(&self) -> bool {
        self.presentation.closeup
    }

    /// Playback state, `None` for pictures.
    #[must_use]
    pub fn playback(&self) -> Option<&Playback> {
        self.playback.as_ref()
    }

    /// Pauses and rewinds a playing video. A paused one keeps its position.
    fn stop_video(&mut self) {
        if let Some(playback) = self.playback.as_mut().filter(|p| p.is_playing()) {
            playback.pause_and_rewind();
        }
    }
}

#[derive(Debug, Clone)]
pub struct Gallery {
    cards: Vec<Card>,
    sort_by: SortBy,
    /// First tab index reserved for the cards.
    tab_base: u32,
    /// Card holding keyboard focus while the lightbox is closed.
    focused: Option<MediaId>,
    hover_preview: bool,
}

impl Gallery {
    /// Builds the gallery sorted by `sort_by`, reserving one tab index per
    /// card from the page's allocator.
    pub fn new(media: Vec<Media>, sort_by: SortBy, tab_order: &mut TabOrder) -> Self {
        let cards: Vec<Card> = media.into_iter().map(Card::new).collect();

        let tab_base = tab_order.last_issued() + 1;
        for _ in &cards {
            tab_order.next_index();
        }

        let mut gallery = Self {
            cards,
            sort_by,
            tab_base,
            focused: None,
            hover_preview: true,
        };
        gallery.resort();
        gallery
    }

    /// Enables or disables the hover preview of videos outside the closeup.
    #[must_use]
    pub fn with_hover_preview(mut self, enabled: bool) -> Self {
        self.hover_preview = enabled;
        self
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, id: MediaId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == id)
    }

    #[must_use]
    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    /// Sum of the live like counts of every card.
    #[must_use]
    pub fn total_likes(&self) -> u32 {
        self.cards.iter().map(Card::likes).sum()
    }

    /// Number of cards currently in closeup. Never more than one.
    #[must_use]
    pub fn closeup_count(&self) -> usize {
        self.cards.iter().filter(|card| card.in_closeup()).count()
    }

    /// Changes the sort criterion and reorders the cards.
    pub fn sort(&mut self, sort_by: SortBy, lightbox_open: bool) -> Result<(), GalleryError> {
        if lightbox_open {
            return Err(GalleryError::LightboxOpen);
        }
        self.sort_by = sort_by;
        self.resort();
        tracing::debug!(?sort_by, "gallery sorted");
        Ok(())
    }

    /// Adds the visitor's like, or takes it back. Returns the new count.
    pub fn toggle_like(&mut self, id: MediaId, lightbox_open: bool) -> Result<u32, GalleryError> {
        if lightbox_open {
            return Err(GalleryError::LightboxOpen);
        }
        let card = self
            .cards
            .iter_mut()
            .find(|card| card.id() == id)
            .ok_or(GalleryError::UnknownMedia(id))?;

        if card.liked {
            card.liked = false;
            card.likes = card.likes.saturating_sub(1);
        } else {
            card.liked = true;
            card.likes += 1;
        }
        let likes = card.likes;

        if self.sort_by == SortBy::Popularity {
            self.resort();
        }
        Ok(likes)
    }

    /// Pointer entered (`true`) or left (`false`) a card.
    ///
    /// Videos outside the closeup preview while hovered and go back to their
    /// first frame when the pointer leaves. Cards in closeup ignore hover.
    pub fn hover(&mut self, id: MediaId, entered: bool) {
        if !self.hover_preview {
            return;
        }
        let Some(card) = self.cards.iter_mut().find(|card| card.id() == id) else {
            return;
        };
        if !card.presentation.hover_preview {
            return;
        }
        if let Some(playback) = card.playback.as_mut() {
            match (entered, playback.is_playing()) {
                (true, false) => playback.play(),
                (false, true) => playback.pause_and_rewind(),
                _ => {}
            }
        }
    }

    /// Moves every playing video forward.
    pub fn tick(&mut self, delta: Duration) {
        for playback in self.cards.iter_mut().filter_map(|card| card.playback.as_mut()) {
            playback.advance(delta);
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.cards
            .iter()
            .filter_map(Card::playback)
            .any(Playback::is_playing)
    }

    /// Applies one lightbox effect to the cards.
    ///
    /// Scroll and in-closeup focus effects belong to the page session and the
    /// overlay, so they are ignored here.
    pub fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::Unmount { index, stop_video } => {
                if let Some(card) = self.cards.get_mut(*index) {
                    card.presentation = Presentation::default();
                    if *stop_video {
                        card.stop_video();
                    }
                }
            }
            Effect::Mount(closeup) => {
                if let Some(card) = self.cards.get_mut(closeup.index) {
                    card.presentation = Presentation {
                        closeup: true,
                        likes_visible: closeup.likes_visible,
                        hover_preview: closeup.hover_preview,
                    };
                    // Only explicit activation plays a video in closeup.
                    card.stop_video();
                }
            }
            Effect::TogglePlayback { index } => {
                if let Some(playback) = self
                    .cards
                    .get_mut(*index)
                    .and_then(|card| card.playback.as_mut())
                {
                    playback.toggle();
                }
            }
            Effect::RestoreFocus(id) => self.focused = Some(*id),
            Effect::LockScroll | Effect::ReleaseScroll | Effect::Focus(_) => {}
        }
    }

    #[must_use]
    pub fn focused(&self) -> Option<MediaId> {
        self.focused
    }

    /// Moves card focus forward in tab order, wrapping at the end.
    pub fn focus_next(&mut self) -> Option<MediaId> {
        self.move_focus(true)
    }

    /// Moves card focus backward in tab order, wrapping at the start.
    pub fn focus_previous(&mut self) -> Option<MediaId> {
        self.move_focus(false)
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    fn move_focus(&mut self, forward: bool) -> Option<MediaId> {
        if self.cards.is_empty() {
            return None;
        }
        let len = self.cards.len();
        let current = self
            .focused
            .and_then(|id| self.cards.iter().position(|card| card.id() == id));

        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.focused = Some(self.cards[next].id());
        self.focused
    }

    fn resort(&mut self) {
        let sort_by = self.sort_by;
        self.cards
            .sort_by(|a, b| sort_by.compare((&a.media, a.likes), (&b.media, b.likes)));
        for (offset, card) in (0u32..).zip(self.cards.iter_mut()) {
            card.tab_index = self.tab_base + offset;
        }
    }
}

impl MediaSequence for Gallery {
    fn len(&self) -> usize {
        self.cards.len()
    }

    fn media_id(&self, index: usize) -> Option<MediaId> {
        self.cards.get(index).map(Card::id)
    }

    fn is_video(&self, index: usize) -> bool {
        self.cards.get(index).is_some_and(|card| card.media.is_video())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MediaKind, PhotographerId};
    use crate::lightbox::Lightbox;
    use chrono::NaiveDate;

    fn media(id: u32, title: &str, likes: u32, video: bool) -> Media {
        let file = format!("{id}.file");
        Media {
            id: MediaId(id),
            photographer_id: PhotographerId(82),
            title: title.to_string(),
            kind: if video {
                MediaKind::Video(file)
            } else {
                MediaKind::Image(file)
            },
            likes,
            date: NaiveDate::from_ymd_opt(2020, 1, id % 28 + 1).unwrap(),
            price: 55,
            description: None,
        }
    }

    fn sample() -> Gallery {
        let mut tab_order = TabOrder::default();
        Gallery::new(
            vec![
                media(1, "Horseshoe", 12, false),
                media(2, "Wild horses", 40, true),
                media(3, "Arctic", 40, false),
            ],
            SortBy::Popularity,
            &mut tab_order,
        )
    }

    fn ids(gallery: &Gallery) -> Vec<u32> {
        gallery.cards().iter().map(|c| c.id().value()).collect()
    }

    #[test]
    fn new_gallery_is_sorted_by_popularity_with_title_tie_break() {
        let gallery = sample();
        assert_eq!(ids(&gallery), vec![3, 2, 1]);
    }

    #[test]
    fn tab_indices_follow_display_order() {
        let mut tab_order = TabOrder::new(2);
        let gallery = Gallery::new(
            vec![media(1, "B", 1, false), media(2, "A", 9, false)],
            SortBy::Popularity,
            &mut tab_order,
        );
        let tabs: Vec<u32> = gallery.cards().iter().map(Card::tab_index).collect();
        assert_eq!(tabs, vec![3, 4]);
        assert_eq!(tab_order.last_issued(), 4);
    }

    #[test]
    fn sort_by_title_reorders_cards() {
        let mut gallery = sample();
        gallery.sort(SortBy::Title, false).unwrap();
        assert_eq!(ids(&gallery), vec![3, 1, 2]);
        assert_eq!(gallery.sort_by(), SortBy::Title);
    }

    #[test]
    fn sort_is_rejected_while_lightbox_is_open() {
        let mut gallery = sample();
        assert_eq!(
            gallery.sort(SortBy::Title, true),
            Err(GalleryError::LightboxOpen)
        );
        assert_eq!(ids(&gallery), vec![3, 2, 1]);
    }

    #[test]
    fn toggle_like_adds_then_removes() {
        let mut gallery = sample();
        let before = gallery.total_likes();

        assert_eq!(gallery.toggle_like(MediaId(1), false), Ok(13));
        assert!(gallery.card(MediaId(1)).unwrap().liked());
        assert_eq!(gallery.total_likes(), before + 1);

        assert_eq!(gallery.toggle_like(MediaId(1), false), Ok(12));
        assert_eq!(gallery.total_likes(), before);
    }

    #[test]
    fn like_resorts_when_sorted_by_popularity() {
        let mut gallery = sample();
        gallery.toggle_like(MediaId(2), false).unwrap();
        assert_eq!(ids(&gallery), vec![2, 3, 1]);
    }

    #[test]
    fn like_on_unknown_media_fails() {
        let mut gallery = sample();
        assert_eq!(
            gallery.toggle_like(MediaId(99), false),
            Err(GalleryError::UnknownMedia(MediaId(99)))
        );
    }

    #[test]
    fn hover_previews_video_outside_closeup() {
        let mut gallery = sample();
        gallery.hover(MediaId(2), true);
        assert!(gallery.card(MediaId(2)).unwrap().playback().unwrap().is_playing());

        gallery.tick(Duration::from_secs(1));
        gallery.hover(MediaId(2), false);
        let playback = gallery.card(MediaId(2)).unwrap().playback().unwrap();
        assert!(!playback.is_playing());
        assert_eq!(playback.position(), Duration::ZERO);
    }

    #[test]
    fn hover_preview_can_be_disabled() {
        let mut gallery = sample().with_hover_preview(false);
        gallery.hover(MediaId(2), true);
        assert!(!gallery.is_playing());
    }

    #[test]
    fn closeup_ignores_hover_and_toggles_on_activation() {
        let mut gallery = sample();
        let mut lightbox = Lightbox::new();

        for effect in lightbox.open_media(&gallery, MediaId(2)) {
            gallery.apply(&effect);
        }
        let card = gallery.card(MediaId(2)).unwrap();
        assert!(card.in_closeup());
        assert!(!card.presentation().likes_visible);

        gallery.hover(MediaId(2), true);
        assert!(!gallery.is_playing());

        for effect in lightbox.activate_media(&gallery) {
            gallery.apply(&effect);
        }
        assert!(gallery.is_playing());
    }

    #[test]
    fn leaving_a_playing_video_stops_it() {
        let mut gallery = sample();
        let mut lightbox = Lightbox::new();

        for effect in lightbox.open_media(&gallery, MediaId(2)) {
            gallery.apply(&effect);
        }
        for effect in lightbox.activate_media(&gallery) {
            gallery.apply(&effect);
        }
        gallery.tick(Duration::from_millis(800));

        for effect in lightbox.next(&gallery) {
            gallery.apply(&effect);
        }
        let playback = gallery.card(MediaId(2)).unwrap().playback().unwrap();
        assert!(!playback.is_playing());
        assert_eq!(playback.position(), Duration::ZERO);
    }

    #[test]
    fn paused_video_keeps_its_position_when_leaving() {
        let mut gallery = sample();
        let mut lightbox = Lightbox::new();

        for effect in lightbox.open_media(&gallery, MediaId(2)) {
            gallery.apply(&effect);
        }
        for effect in lightbox.activate_media(&gallery) {
            gallery.apply(&effect);
        }
        gallery.tick(Duration::from_secs(3));
        for effect in lightbox.activate_media(&gallery) {
            gallery.apply(&effect);
        }
        assert!(!gallery.is_playing());

        for effect in lightbox.next(&gallery) {
            gallery.apply(&effect);
        }
        let playback = gallery.card(MediaId(2)).unwrap().playback().unwrap();
        assert!(!playback.is_playing());
        assert_eq!(playback.position(), Duration::from_secs(3));
    }

    #[test]
    fn opening_a_hovered_video_stops_the_preview() {
        let mut gallery = sample();
        let mut lightbox = Lightbox::new();

        gallery.hover(MediaId(2), true);
        gallery.tick(Duration::from_millis(500));
        assert!(gallery.is_playing());

        for effect in lightbox.open_media(&gallery, MediaId(2)) {
            gallery.apply(&effect);
        }
        let playback = gallery.card(MediaId(2)).unwrap().playback().unwrap();
        assert!(!playback.is_playing());
        assert_eq!(playback.position(), Duration::ZERO);

        // Pointer leaving the closeup does not matter any more.
        gallery.hover(MediaId(2), false);
        for effect in lightbox.activate_media(&gallery) {
            gallery.apply(&effect);
        }
        assert!(gallery.is_playing());
    }

    #[test]
    fn at_most_one_closeup_during_navigation() {
        let mut gallery = sample();
        let mut lightbox = Lightbox::new();

        for effect in lightbox.open_media(&gallery, MediaId(1)) {
            gallery.apply(&effect);
            assert!(gallery.closeup_count() <= 1);
        }
        for _ in 0..5 {
            for effect in lightbox.next(&gallery) {
                gallery.apply(&effect);
                assert!(gallery.closeup_count() <= 1);
            }
        }
        for effect in lightbox.close(&gallery) {
            gallery.apply(&effect);
        }
        assert_eq!(gallery.closeup_count(), 0);
        assert!(gallery
            .cards()
            .iter()
            .all(|card| card.presentation() == Presentation::default()));
    }

    #[test]
    fn card_focus_wraps_both_ways() {
        let mut gallery = sample();
        assert_eq!(gallery.focus_next(), Some(MediaId(3)));
        assert_eq!(gallery.focus_previous(), Some(MediaId(1)));
        assert_eq!(gallery.focus_next(), Some(MediaId(3)));
    }

    #[test]
    fn restore_focus_effect_focuses_the_opener() {
        let mut gallery = sample();
        gallery.apply(&Effect::RestoreFocus(MediaId(2)));
        assert_eq!(gallery.focused(), Some(MediaId(2)));
    }
}
