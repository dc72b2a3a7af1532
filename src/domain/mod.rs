// SPDX-License-Identifier: MPL-2.0
//! Domain layer - photographers, their media and the bundled catalog.
//!
//! These types are pure data with no presentation dependencies. The only
//! fallible piece is the catalog loader, which validates the JSON document
//! once so everything downstream can trust its input.
//!
//! # Modules
//!
//! - [`ids`]: Identifier newtypes ([`PhotographerId`], [`MediaId`])
//! - [`photographer`]: [`Photographer`] profile data
//! - [`media`]: [`Media`] records and their [`MediaKind`]
//! - [`catalog`]: The [`Catalog`] document and its async loader

pub mod catalog;
pub mod ids;
pub mod media;
pub mod photographer;

pub use catalog::Catalog;
pub use ids::{MediaId, PhotographerId};
pub use media::{Media, MediaKind};
pub use photographer::Photographer;
