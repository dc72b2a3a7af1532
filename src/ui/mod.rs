// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views are pure functions of the application state following the
//! Elm-style "state down, messages up" pattern. They never mutate state;
//! every interaction becomes an [`crate::app::Message`].
//!
//! # Screens
//!
//! - [`photographer_list`] - Home screen with one card per photographer
//! - [`profile`] - Photographer page with header, gallery and overlays
//!
//! # Components
//!
//! - [`media_card`] - Gallery card with the media and its like counter
//! - [`sort_filter`] - "Sort by" picker
//! - [`lightbox`] - Closeup overlay with previous, next and close controls
//! - [`contact_modal`] - Contact dialog
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod contact_modal;
pub mod design_tokens;
pub mod lightbox;
pub mod media_card;
pub mod photographer_list;
pub mod profile;
pub mod sort_filter;
pub mod styles;
pub mod theming;
