// SPDX-License-Identifier: MPL-2.0
//! Screens and the state each of them owns.
//!
//! Every page state holds its own [`PageSession`]; it is created when the
//! screen is entered and dropped when the screen is left.

use crate::config::{Config, LISTING_INITIAL_TAB_INDEX, PROFILE_INITIAL_TAB_INDEX};
use crate::contact;
use crate::domain::{Catalog, MediaId, Photographer, PhotographerId};
use crate::gallery::Gallery;
use crate::lightbox::Lightbox;
use crate::session::PageSession;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Listing,
    Profile(PhotographerId),
}

/// Photographer listing.
#[derive(Debug, Clone)]
pub struct ListingPage {
    pub session: PageSession,
    /// Tab index of each photographer card, in catalog order.
    pub tab_indices: Vec<u32>,
    pub focused: Option<usize>,
}

impl ListingPage {
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let mut session = PageSession::new(LISTING_INITIAL_TAB_INDEX);
        let tab_indices = catalog
            .photographers()
            .iter()
            .map(|_| session.tab_order.next_index())
            .collect();
        Self {
            session,
            tab_indices,
            focused: None,
        }
    }

    pub fn focus_next(&mut self) {
        let len = self.tab_indices.len();
        if len > 0 {
            self.focused = Some(self.focused.map_or(0, |i| (i + 1) % len));
        }
    }

    pub fn focus_previous(&mut self) {
        let len = self.tab_indices.len();
        if len > 0 {
            self.focused = Some(self.focused.map_or(len - 1, |i| (i + len - 1) % len));
        }
    }
}

/// Where keyboard focus sits on a profile while no overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileFocus {
    #[default]
    None,
    ContactButton,
    Card(MediaId),
}

/// One photographer's page.
#[derive(Debug, Clone)]
pub struct ProfilePage {
    pub photographer: Photographer,
    pub session: PageSession,
    /// Tab index of the contact button.
    pub contact_tab_index: u32,
    pub gallery: Gallery,
    pub lightbox: Lightbox,
    pub contact: contact::State,
    pub contact_button_focused: bool,
}

impl ProfilePage {
    #[must_use]
    pub fn new(photographer: Photographer, catalog: &Catalog, config: &Config) -> Self {
        let mut session = PageSession::new(PROFILE_INITIAL_TAB_INDEX);
        let contact_tab_index = session.tab_order.next_index();
        let gallery = Gallery::new(
            catalog.media_of(photographer.id),
            config.gallery.sort(),
            &mut session.tab_order,
        )
        .with_hover_preview(config.gallery.hover_preview());
        let contact = contact::State::new(photographer.id);

        Self {
            photographer,
            session,
            contact_tab_index,
            gallery,
            lightbox: Lightbox::new(),
            contact,
            contact_button_focused: false,
        }
    }

    #[must_use]
    pub fn focus(&self) -> ProfileFocus {
        if self.contact_button_focused {
            ProfileFocus::ContactButton
        } else {
            self.gallery
                .focused()
                .map_or(ProfileFocus::None, ProfileFocus::Card)
        }
    }

    /// Tab ring of the page: contact button, then every card.
    pub fn tab(&mut self, forward: bool) {
        let cards = self.gallery.cards();
        let first = cards.first().map(|c| c.id());
        let last = cards.last().map(|c| c.id());

        match (self.focus(), forward) {
            (ProfileFocus::None, true) | (ProfileFocus::None, false) if first.is_none() => {
                self.contact_button_focused = true;
            }
            (ProfileFocus::None, true) => self.contact_button_focused = true,
            (ProfileFocus::None, false) => {
                self.gallery.focus_previous();
            }
            (ProfileFocus::ContactButton, true) => {
                self.contact_button_focused = false;
                self.gallery.clear_focus();
                self.gallery.focus_next();
            }
            (ProfileFocus::ContactButton, false) => {
                self.contact_button_focused = false;
                self.gallery.clear_focus();
                self.gallery.focus_previous();
            }
            (ProfileFocus::Card(id), true) if Some(id) == last => {
                self.gallery.clear_focus();
                self.contact_button_focused = true;
            }
            (ProfileFocus::Card(id), false) if Some(id) == first => {
                self.gallery.clear_focus();
                self.contact_button_focused = true;
            }
            (ProfileFocus::Card(_), true) => {
                self.gallery.focus_next();
            }
            (ProfileFocus::Card(_), false) => {
                self.gallery.focus_previous();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "photographers": [
            { "name": "Mimi Keel", "id": 243, "city": "London", "country": "UK",
              "tagline": "t", "price": 400, "portrait": "MimiKeel.jpg" },
            { "name": "Tracy Galindo", "id": 82, "city": "Montreal", "country": "Canada",
              "tagline": "t", "price": 500, "portrait": "TracyGalindo.jpg" }
        ],
        "media": [
            { "id": 1, "photographerId": 243, "title": "B", "image": "b.jpg",
              "likes": 5, "date": "2019-01-01", "price": 50 },
            { "id": 2, "photographerId": 243, "title": "A", "image": "a.jpg",
              "likes": 9, "date": "2019-01-02", "price": 50 }
        ]
    }"#;

    fn catalog() -> Catalog {
        Catalog::from_json(CATALOG).unwrap()
    }

    fn profile() -> ProfilePage {
        let catalog = catalog();
        let photographer = catalog.photographer(PhotographerId(243)).unwrap().clone();
        ProfilePage::new(photographer, &catalog, &Config::default())
    }

    #[test]
    fn listing_tab_indices_start_after_initial_index() {
        let page = ListingPage::new(&catalog());
        assert_eq!(page.tab_indices, vec![3, 4]);
    }

    #[test]
    fn listing_focus_wraps() {
        let mut page = ListingPage::new(&catalog());
        page.focus_previous();
        assert_eq!(page.focused, Some(1));
        page.focus_next();
        assert_eq!(page.focused, Some(0));
    }

    #[test]
    fn profile_contact_button_precedes_cards() {
        let page = profile();
        assert_eq!(page.contact_tab_index, 2);
        let tabs: Vec<u32> = page.gallery.cards().iter().map(|c| c.tab_index()).collect();
        assert_eq!(tabs, vec![3, 4]);
    }

    #[test]
    fn profile_tab_ring_cycles_through_button_and_cards() {
        let mut page = profile();
        page.tab(true);
        assert_eq!(page.focus(), ProfileFocus::ContactButton);
        page.tab(true);
        assert_eq!(page.focus(), ProfileFocus::Card(MediaId(2)));
        page.tab(true);
        assert_eq!(page.focus(), ProfileFocus::Card(MediaId(1)));
        page.tab(true);
        assert_eq!(page.focus(), ProfileFocus::ContactButton);
        page.tab(false);
        assert_eq!(page.focus(), ProfileFocus::Card(MediaId(1)));
    }
}
