// SPDX-License-Identifier: MPL-2.0
//! Photographer profile data.

use super::ids::PhotographerId;
use serde::Deserialize;

/// One entry of the `photographers` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Photographer {
    pub id: PhotographerId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub tagline: String,
    /// Daily rate in euros.
    pub price: u32,
    /// Portrait file name under `assets/photographers/`.
    pub portrait: String,
}

impl Photographer {
    /// First word of the name. Media files live in a folder named after it.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// "City, Country" as displayed on cards and in the profile header.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}
