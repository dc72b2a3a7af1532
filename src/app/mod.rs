// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the listing and the
//! photographer pages.
//!
//! The `App` struct wires together the catalog, localization and settings,
//! and routes messages to the page that is currently shown. Startup loads
//! the catalog asynchronously; once it arrives the app lands on the
//! listing, or on the profile requested on the command line.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, GalleryMessage, LightboxMessage, Message, PageKey};
pub use screen::{ListingPage, ProfileFocus, ProfilePage, Screen};
pub use subscription::KeyboardOwner;

use crate::config::{self, Config};
use crate::domain::{Catalog, PhotographerId};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    theme_mode: ThemeMode,
    assets_dir: PathBuf,
    catalog: Option<Catalog>,
    load_error: Option<Error>,
    requested: Option<PhotographerId>,
    listing: Option<ListingPage>,
    profile: Option<ProfilePage>,
    /// i18n key of the warning banner, if any.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("catalog_loaded", &self.catalog.is_some())
            .field("warning", &self.warning)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Listing,
            config: Config::default(),
            theme_mode: ThemeMode::default(),
            assets_dir: PathBuf::from(paths::DEFAULT_ASSETS_DIR),
            catalog: None,
            load_error: None,
            requested: None,
            listing: None,
            profile: None,
            warning: None,
        }
    }
}

impl App {
    /// Loads settings and localization, then starts loading the catalog.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let catalog_path = paths::catalog_path(flags.data.as_deref(), &config.data);
        let assets_dir = paths::assets_dir(flags.assets.as_deref(), &config.data);
        tracing::info!(
            catalog = %catalog_path.display(),
            assets = %assets_dir.display(),
            locale = %i18n.current_locale(),
            "starting"
        );

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            assets_dir,
            requested: flags.photographer,
            warning: config_warning,
            config,
            ..Self::default()
        };

        let task = Task::perform(Catalog::load(catalog_path), Message::CatalogLoaded);
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        match self.profile.as_ref() {
            Some(page) if matches!(self.screen, Screen::Profile(_)) => {
                format!("{} - {app_name}", page.photographer.name)
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    /// Who receives keyboard events, `None` until the catalog is loaded.
    #[must_use]
    pub fn keyboard_owner(&self) -> Option<KeyboardOwner> {
        self.catalog.as_ref()?;
        let owner = match (self.screen, self.profile.as_ref()) {
            (Screen::Profile(_), Some(page)) if page.lightbox.is_open() => KeyboardOwner::Lightbox,
            (Screen::Profile(_), Some(page)) if page.contact.is_open() => {
                KeyboardOwner::ContactModal
            }
            _ => KeyboardOwner::Page,
        };
        Some(owner)
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = self
            .keyboard_owner()
            .map_or_else(Subscription::none, subscription::create_keyboard_subscription);
        let playing = self
            .profile
            .as_ref()
            .is_some_and(|page| page.gallery.is_playing());
        let tick_sub = subscription::create_tick_subscription(playing);

        Subscription::batch([keyboard_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            config: &self.config,
            catalog: &mut self.catalog,
            load_error: &mut self.load_error,
            requested: &mut self.requested,
            listing: &mut self.listing,
            profile: &mut self.profile,
            warning: &mut self.warning,
        };

        match message {
            Message::CatalogLoaded(result) => update::handle_catalog_loaded(&mut ctx, result),
            Message::OpenProfile(id) => update::handle_open_profile(&mut ctx, id),
            Message::BackToListing => update::handle_back_to_listing(&mut ctx),
            Message::PageKey(key) => update::handle_page_key(&mut ctx, key),
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(&mut ctx, lightbox_message)
            }
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::Tick(_instant) => update::handle_tick(&mut ctx),
            Message::DismissWarning => {
                *ctx.warning = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            catalog: self.catalog.as_ref(),
            load_error: self.load_error.as_ref(),
            listing: self.listing.as_ref(),
            profile: self.profile.as_ref(),
            assets_dir: &self.assets_dir,
            warning: self.warning.as_deref(),
        })
    }
}
