// SPDX-License-Identifier: MPL-2.0
//! The bundled catalog document.
//!
//! The document has two top-level arrays, `photographers` and `media`. It is
//! read once at startup; nothing ever writes it back.

use super::ids::PhotographerId;
use super::media::Media;
use super::photographer::Photographer;
use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    photographers: Vec<Photographer>,
    #[serde(default, rename = "media")]
    media: Vec<Media>,
}

impl Catalog {
    /// Parses a catalog from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Data`](crate::error::Error::Data) if the text is not a
    /// valid catalog, including media records with no image or video file.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses the catalog file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a data error if it
    /// does not parse.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&text)?;
        tracing::info!(
            path = %path.display(),
            photographers = catalog.photographers.len(),
            media = catalog.media.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn photographers(&self) -> &[Photographer] {
        &self.photographers
    }

    #[must_use]
    pub fn photographer(&self, id: PhotographerId) -> Option<&Photographer> {
        self.photographers.iter().find(|p| p.id == id)
    }

    /// Media owned by the photographer, in document order.
    #[must_use]
    pub fn media_of(&self, id: PhotographerId) -> Vec<Media> {
        self.media
            .iter()
            .filter(|m| m.photographer_id == id)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photographers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::MediaId;
    use crate::error::Error;

    const SAMPLE: &str = r#"{
        "photographers": [
            { "name": "Mimi Keel", "id": 243, "city": "London", "country": "UK",
              "tagline": "Voir le beau dans le quotidien", "price": 400, "portrait": "MimiKeel.jpg" },
            { "name": "Rhode Dubois", "id": 925, "city": "Barcelona", "country": "Spain",
              "tagline": "Je crée des souvenirs", "price": 275, "portrait": "RhodeDubois.jpg" }
        ],
        "media": [
            { "id": 342550, "photographerId": 243, "title": "Arc-en-ciel", "image": "Event_Rainbow.jpg",
              "likes": 11, "date": "2019-06-08", "price": 55 },
            { "id": 8520927, "photographerId": 925, "title": "Fashion Urban Jungle", "image": "Fashion_Urban_Jungle.jpg",
              "likes": 11, "date": "2011-11-06", "price": 55 },
            { "id": 5234343, "photographerId": 243, "title": "Wild horses", "video": "Wild_horses.mp4",
              "likes": 142, "date": "2016-08-12", "price": 60 }
        ]
    }"#;

    #[test]
    fn parses_both_arrays() {
        let catalog = Catalog::from_json(SAMPLE).expect("sample parses");
        assert_eq!(catalog.photographers().len(), 2);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn media_of_filters_by_owner_in_document_order() {
        let catalog = Catalog::from_json(SAMPLE).expect("sample parses");
        let ids: Vec<MediaId> = catalog
            .media_of(PhotographerId(243))
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![MediaId(342_550), MediaId(5_234_343)]);
    }

    #[test]
    fn unknown_photographer_yields_none() {
        let catalog = Catalog::from_json(SAMPLE).expect("sample parses");
        assert!(catalog.photographer(PhotographerId(1)).is_none());
        assert!(catalog.media_of(PhotographerId(1)).is_empty());
    }

    #[test]
    fn malformed_document_is_a_data_error() {
        let err = Catalog::from_json(r#"{ "photographers": 3 }"#).unwrap_err();
        assert!(matches!(err, Error::Data(_)));
    }

    #[tokio::test]
    async fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("photographers.json");
        std::fs::write(&path, SAMPLE).expect("failed to write sample");

        let catalog = Catalog::load(&path).await.expect("load should succeed");
        assert_eq!(
            catalog.photographer(PhotographerId(925)).map(|p| p.name.as_str()),
            Some("Rhode Dubois")
        );
    }

    #[tokio::test]
    async fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let err = Catalog::load(dir.path().join("absent.json")).await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
