// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler works on an [`UpdateContext`] borrowing the parts of
//! [`super::App`] it needs. Lightbox and contact effects are applied here:
//! the gallery renders the closeup, the page session owns the scroll lock.

use super::message::{GalleryMessage, LightboxMessage, PageKey};
use super::screen::{ListingPage, ProfileFocus, ProfilePage};
use super::{Message, Screen};
use crate::config::{Config, PLAYBACK_TICK_MILLIS};
use crate::contact;
use crate::domain::{Catalog, PhotographerId};
use crate::error::Error;
use crate::lightbox::Effect;
use crate::session::LockOwner;
use iced::Task;
use std::time::Duration;

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub config: &'a Config,
    pub catalog: &'a mut Option<Catalog>,
    pub load_error: &'a mut Option<Error>,
    /// Profile requested on the command line, consumed once the catalog loads.
    pub requested: &'a mut Option<PhotographerId>,
    pub listing: &'a mut Option<ListingPage>,
    pub profile: &'a mut Option<ProfilePage>,
    /// i18n key of the warning banner.
    pub warning: &'a mut Option<String>,
}

pub fn handle_catalog_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Catalog, Error>,
) -> Task<Message> {
    match result {
        Ok(catalog) => {
            *ctx.load_error = None;
            *ctx.catalog = Some(catalog);
            match ctx.requested.take() {
                Some(id) => handle_open_profile(ctx, id),
                None => handle_back_to_listing(ctx),
            }
        }
        Err(err) => {
            tracing::error!(%err, "failed to load the catalog");
            *ctx.load_error = Some(err);
            Task::none()
        }
    }
}

/// Enters the profile of `id`. Unknown photographers fall back to the
/// listing with a warning.
pub fn handle_open_profile(ctx: &mut UpdateContext<'_>, id: PhotographerId) -> Task<Message> {
    let Some(catalog) = ctx.catalog.as_ref() else {
        return Task::none();
    };

    let Some(photographer) = catalog.photographer(id) else {
        tracing::warn!(%id, "unknown photographer, showing the listing");
        *ctx.warning = Some(Error::NotFound(id.value()).i18n_key().to_string());
        return handle_back_to_listing(ctx);
    };

    let page = ProfilePage::new(photographer.clone(), catalog, ctx.config);
    tracing::info!(%id, media = page.gallery.cards().len(), "entering profile");

    *ctx.listing = None;
    *ctx.profile = Some(page);
    *ctx.screen = Screen::Profile(id);
    Task::none()
}

pub fn handle_back_to_listing(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(catalog) = ctx.catalog.as_ref() else {
        return Task::none();
    };

    *ctx.profile = None;
    *ctx.listing = Some(ListingPage::new(catalog));
    *ctx.screen = Screen::Listing;
    Task::none()
}

/// Keyboard on a page with no overlay open.
pub fn handle_page_key(ctx: &mut UpdateContext<'_>, key: PageKey) -> Task<Message> {
    match *ctx.screen {
        Screen::Listing => {
            let Some(listing) = ctx.listing.as_mut() else {
                return Task::none();
            };
            match key {
                PageKey::Tab => listing.focus_next(),
                PageKey::ShiftTab => listing.focus_previous(),
                PageKey::Activate => {
                    let target = listing.focused.and_then(|position| {
                        ctx.catalog
                            .as_ref()
                            .and_then(|catalog| catalog.photographers().get(position))
                            .map(|photographer| photographer.id)
                    });
                    if let Some(id) = target {
                        return handle_open_profile(ctx, id);
                    }
                }
            }
            Task::none()
        }
        Screen::Profile(_) => {
            let Some(page) = ctx.profile.as_mut() else {
                return Task::none();
            };
            if page.lightbox.is_open() || page.contact.is_open() {
                return Task::none();
            }
            match key {
                PageKey::Tab => page.tab(true),
                PageKey::ShiftTab => page.tab(false),
                PageKey::Activate => match page.focus() {
                    ProfileFocus::ContactButton => {
                        return handle_contact_message(ctx, contact::Message::Open);
                    }
                    ProfileFocus::Card(id) => {
                        return handle_gallery_message(ctx, GalleryMessage::OpenMedia(id));
                    }
                    ProfileFocus::None => {}
                },
            }
            Task::none()
        }
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: GalleryMessage,
) -> Task<Message> {
    let Some(page) = ctx.profile.as_mut() else {
        return Task::none();
    };

    match message {
        GalleryMessage::OpenMedia(id) => {
            page.contact_button_focused = false;
            let effects = page.lightbox.open_media(&page.gallery, id);
            apply_lightbox_effects(page, effects);
        }
        GalleryMessage::ToggleLike(id) => {
            match page.gallery.toggle_like(id, page.lightbox.is_open()) {
                Ok(likes) => tracing::debug!(%id, likes, "like toggled"),
                Err(err) => tracing::warn!(%err, "like ignored"),
            }
        }
        GalleryMessage::Hover { id, entered } => page.gallery.hover(id, entered),
        GalleryMessage::SortChanged(sort_by) => {
            if let Err(err) = page.gallery.sort(sort_by, page.lightbox.is_open()) {
                tracing::warn!(%err, ?sort_by, "sort ignored");
            }
        }
    }
    Task::none()
}

pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: LightboxMessage,
) -> Task<Message> {
    let Some(page) = ctx.profile.as_mut() else {
        return Task::none();
    };

    let effects = match message {
        LightboxMessage::Key(key) => page.lightbox.handle_key(&page.gallery, key),
        LightboxMessage::Control(control) => page.lightbox.activate(&page.gallery, control),
        LightboxMessage::MediaPressed => page.lightbox.activate_media(&page.gallery),
    };
    apply_lightbox_effects(page, effects);
    Task::none()
}

pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact::Message,
) -> Task<Message> {
    let Some(page) = ctx.profile.as_mut() else {
        return Task::none();
    };
    if page.lightbox.is_open() {
        return Task::none();
    }

    match page.contact.handle(message) {
        contact::Effect::None => {}
        contact::Effect::Opened => {
            page.session.scroll_lock.lock(LockOwner::ContactModal);
            page.contact_button_focused = false;
            page.gallery.clear_focus();
        }
        contact::Effect::Closed | contact::Effect::Submitted(_) => {
            page.session.scroll_lock.release(LockOwner::ContactModal);
            page.contact_button_focused = true;
        }
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(page) = ctx.profile.as_mut() {
        page.gallery
            .tick(Duration::from_millis(PLAYBACK_TICK_MILLIS));
    }
    Task::none()
}

/// Applies lightbox effects in order. The gallery handles presentation and
/// playback; scroll effects go to the page session.
fn apply_lightbox_effects(page: &mut ProfilePage, effects: Vec<Effect>) {
    for effect in effects {
        page.gallery.apply(&effect);
        match effect {
            Effect::LockScroll => {
                page.session.scroll_lock.lock(LockOwner::Lightbox);
            }
            Effect::ReleaseScroll => {
                page.session.scroll_lock.release(LockOwner::Lightbox);
            }
            _ => {}
        }
    }
}
