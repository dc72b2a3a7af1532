// SPDX-License-Identifier: MPL-2.0
//! Centralized default values.
//!
//! # Categories
//!
//! - **Gallery**: Sorting and video preview
//! - **Tab order**: First tab index of each screen
//! - **Playback**: Simulated playback clock

use crate::gallery::SortBy;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Sort criterion applied when a profile is opened.
pub const DEFAULT_SORT: SortBy = SortBy::Popularity;

/// Whether hovering a video card plays a muted preview.
pub const DEFAULT_HOVER_PREVIEW: bool = true;

// ==========================================================================
// Tab Order Defaults
// ==========================================================================

/// Tab index preceding the first card of the photographer listing.
pub const LISTING_INITIAL_TAB_INDEX: u32 = 2;

/// Tab index preceding the first focusable element of a profile.
pub const PROFILE_INITIAL_TAB_INDEX: u32 = crate::session::DEFAULT_INITIAL_TAB_INDEX;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Interval of the playback clock while a video plays (milliseconds).
pub const PLAYBACK_TICK_MILLIS: u64 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_starts_after_profile_default() {
        assert!(LISTING_INITIAL_TAB_INDEX > PROFILE_INITIAL_TAB_INDEX);
    }
}
