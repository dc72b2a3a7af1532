// SPDX-License-Identifier: MPL-2.0
//! Media records (photos and videos) belonging to a photographer.

mod types;

pub use types::{Media, MediaKind};
