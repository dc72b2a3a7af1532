// SPDX-License-Identifier: MPL-2.0
//! Identifier newtypes.
//!
//! Photographers and media share the same integer id space in the JSON
//! document; wrapping them keeps the two from being mixed up at call sites.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a photographer (`id` in the `photographers` array).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotographerId(pub u32);

/// Identifier of a media item (`id` in the `media` array).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(pub u32);

impl PhotographerId {
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl MediaId {
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PhotographerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PhotographerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PhotographerId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photographer_id_parses_from_cli_text() {
        assert_eq!("243".parse::<PhotographerId>(), Ok(PhotographerId(243)));
        assert_eq!(" 82 ".parse::<PhotographerId>(), Ok(PhotographerId(82)));
        assert!("Oops!".parse::<PhotographerId>().is_err());
    }

    #[test]
    fn ids_deserialize_from_plain_integers() {
        let id: MediaId = serde_json::from_str("342550").expect("valid id");
        assert_eq!(id, MediaId(342_550));
    }
}
