// SPDX-License-Identifier: MPL-2.0
//! Read-only access to the ordered media of a page.

use crate::domain::{Media, MediaId};

/// Ordered, index-addressable media owned by the page.
///
/// The order must not change while a lightbox session is open.
pub trait MediaSequence {
    fn len(&self) -> usize;

    fn media_id(&self, index: usize) -> Option<MediaId>;

    fn is_video(&self, index: usize) -> bool;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the media with the given id.
    fn position(&self, id: MediaId) -> Option<usize> {
        (0..self.len()).find(|&index| self.media_id(index) == Some(id))
    }
}

impl MediaSequence for [Media] {
    fn len(&self) -> usize {
        <[Media]>::len(self)
    }

    fn media_id(&self, index: usize) -> Option<MediaId> {
        self.get(index).map(|m| m.id)
    }

    fn is_video(&self, index: usize) -> bool {
        self.get(index).is_some_and(Media::is_video)
    }
}

impl MediaSequence for Vec<Media> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn media_id(&self, index: usize) -> Option<MediaId> {
        self.as_slice().media_id(index)
    }

    fn is_video(&self, index: usize) -> bool {
        MediaSequence::is_video(self.as_slice(), index)
    }
}
