// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::contact;
use crate::domain::{Catalog, MediaId, PhotographerId};
use crate::error::Error;
use crate::gallery::SortBy;
use crate::lightbox::{Control, LightboxKey};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    CatalogLoaded(Result<Catalog, Error>),
    OpenProfile(PhotographerId),
    BackToListing,
    /// Keyboard on a screen with no overlay open.
    PageKey(PageKey),
    Gallery(GalleryMessage),
    Lightbox(LightboxMessage),
    Contact(contact::Message),
    /// Playback clock while a video plays.
    Tick(Instant),
    DismissWarning,
}

/// Keys handled by a screen when no overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKey {
    Tab,
    ShiftTab,
    /// Enter or Space.
    Activate,
}

/// Interaction with the gallery of a profile.
#[derive(Debug, Clone)]
pub enum GalleryMessage {
    OpenMedia(MediaId),
    ToggleLike(MediaId),
    Hover { id: MediaId, entered: bool },
    SortChanged(SortBy),
}

/// Interaction with the closeup view.
#[derive(Debug, Clone)]
pub enum LightboxMessage {
    Key(LightboxKey),
    Control(Control),
    MediaPressed,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Profile to open at startup instead of the listing.
    pub photographer: Option<PhotographerId>,
    /// Catalog document override.
    pub data: Option<String>,
    /// Media folder override.
    pub assets: Option<String>,
    /// Config directory override (for settings.toml).
    /// Takes precedence over `FISHEYE_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
