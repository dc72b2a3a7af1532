// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Errors carry their source message as a `String` so they stay `Clone` and can
//! travel inside iced messages (e.g. the result of the async catalog load).

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    /// The bundled JSON document could not be parsed.
    #[error("Data Error: {0}")]
    Data(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// A media record carries neither an `image` nor a `video` file.
    #[error("Unknown media type for media {0}. Only pictures & videos are allowed.")]
    UnknownMediaType(u32),

    /// A photographer requested by id does not exist in the catalog.
    #[error("Photographer {0} not found")]
    NotFound(u32),
}

impl Error {
    /// Returns the i18n message key used to present this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-catalog-io",
            Error::Data(_) | Error::UnknownMediaType(_) => "error-catalog-data",
            Error::Config(_) => "error-config",
            Error::NotFound(_) => "error-photographer-not-found",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Data(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_json_error_produces_data_variant() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: Error = json_error.into();
        assert!(matches!(err, Error::Data(_)));
    }

    #[test]
    fn unknown_media_type_mentions_the_rule() {
        let err = Error::UnknownMediaType(42);
        let text = format!("{}", err);
        assert!(text.contains("42"));
        assert!(text.contains("Only pictures & videos"));
    }

    #[test]
    fn i18n_keys_group_data_errors() {
        assert_eq!(Error::Data("x".into()).i18n_key(), "error-catalog-data");
        assert_eq!(Error::UnknownMediaType(1).i18n_key(), "error-catalog-data");
        assert_eq!(Error::NotFound(7).i18n_key(), "error-photographer-not-found");
    }
}
