// SPDX-License-Identifier: MPL-2.0
//! Core media types.
//!
//! The JSON document describes a media item with either an `image` or a
//! `video` field. [`Media`] folds that into a [`MediaKind`] at parse time, so a
//! record with neither is rejected by the loader instead of failing later
//! while rendering.

use crate::domain::ids::{MediaId, PhotographerId};
use crate::error::Error;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// What kind of file a media item points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaKind {
    /// Still picture, file name relative to the photographer's folder.
    Image(String),
    /// Video clip, file name relative to the photographer's folder.
    Video(String),
}

impl MediaKind {
    #[must_use]
    pub fn file_name(&self) -> &str {
        match self {
            MediaKind::Image(file) | MediaKind::Video(file) => file,
        }
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        matches!(self, MediaKind::Video(_))
    }
}

/// One entry of the `media` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawMedia")]
pub struct Media {
    pub id: MediaId,
    pub photographer_id: PhotographerId,
    pub title: String,
    pub kind: MediaKind,
    /// Like count as shipped in the document.
    pub likes: u32,
    pub date: NaiveDate,
    pub price: u32,
    /// Alternative text; falls back to the title when absent.
    pub description: Option<String>,
}

impl Media {
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind.is_video()
    }

    /// Text announced for the media itself.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.title)
    }

    /// Location of the media file: `<assets>/media/<first name>/<file>`.
    #[must_use]
    pub fn file_path(&self, assets_dir: &Path, first_name: &str) -> PathBuf {
        assets_dir
            .join("media")
            .join(first_name)
            .join(self.kind.file_name())
    }
}

/// Wire shape of a media record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMedia {
    id: MediaId,
    photographer_id: PhotographerId,
    title: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    video: Option<String>,
    likes: u32,
    date: NaiveDate,
    price: u32,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<RawMedia> for Media {
    type Error = Error;

    fn try_from(raw: RawMedia) -> Result<Self, Self::Error> {
        let kind = match (raw.image, raw.video) {
            (Some(image), _) => MediaKind::Image(image),
            (None, Some(video)) => MediaKind::Video(video),
            (None, None) => return Err(Error::UnknownMediaType(raw.id.value())),
        };

        Ok(Media {
            id: raw.id,
            photographer_id: raw.photographer_id,
            title: raw.title,
            kind,
            likes: raw.likes,
            date: raw.date,
            price: raw.price,
            description: raw.description.filter(|d| !d.trim().is_empty()),
        })
    }
}
