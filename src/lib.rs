// SPDX-License-Identifier: MPL-2.0
//! `fisheye` is a desktop portfolio browser for photographers built with the
//! Iced GUI framework.
//!
//! The listing shows every photographer of the bundled catalog. A profile
//! page presents their work as a sortable gallery with a like counter, a
//! keyboard-accessible lightbox and a contact form.
//!
//! The crate is split into framework-free logic and Iced views:
//!
//! - [`domain`] parses and validates the catalog document.
//! - [`gallery`] owns the ordered cards of a page, sorting, likes and playback.
//! - [`lightbox`] is the closeup state machine and its focus trap.
//! - [`contact`] holds the contact form and its validation.
//! - [`session`] is the per-page scroll lock and tab order allocator.
//! - [`app`] and [`ui`] wire everything into the Iced runtime.

pub mod app;
pub mod config;
pub mod contact;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod lightbox;
pub mod session;
pub mod ui;
