// SPDX-License-Identifier: MPL-2.0
//! Sort filter for a photographer's media.

use crate::domain::Media;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Criterion selected in the sort filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Most liked first.
    #[default]
    Popularity,
    /// Newest first.
    Date,
    /// Alphabetical, case-insensitive.
    Title,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Popularity, SortBy::Date, SortBy::Title];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SortBy::Popularity => "sort-popularity",
            SortBy::Date => "sort-date",
            SortBy::Title => "sort-title",
        }
    }

    /// Total order between two media for this criterion.
    ///
    /// `likes` is the live like count of each side, which may differ from the
    /// count shipped in the document. Ties fall back to the title and then the
    /// id, so two distinct media never compare equal.
    #[must_use]
    pub fn compare(self, a: (&Media, u32), b: (&Media, u32)) -> Ordering {
        let (a, a_likes) = a;
        let (b, b_likes) = b;

        let primary = match self {
            SortBy::Popularity => b_likes.cmp(&a_likes),
            SortBy::Date => b.date.cmp(&a.date),
            SortBy::Title => Ordering::Equal,
        };

        primary
            .then_with(|| title_key(&a.title).cmp(&title_key(&b.title)))
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.id.cmp(&b.id))
    }
}

fn title_key(title: &str) -> String {
    title.to_lowercase()
}
