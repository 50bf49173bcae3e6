// SPDX-License-Identifier: MPL-2.0
//! EXIF parsing port.
//!
//! An [`ExifParser`] converts raw image bytes into a map of tag name to
//! human-readable description. Descriptions are already formatted the way
//! they should be displayed (for example `"f/3.5"` or `"50 mm"`).

use std::collections::HashMap;

// =============================================================================
// Tag Names
// =============================================================================

/// Tag names the equipment description reads.
pub mod tag {
    pub const MODEL: &str = "Model";
    pub const FOCAL_LENGTH: &str = "FocalLength";
    pub const F_NUMBER: &str = "FNumber";
    pub const ISO_SPEED_RATINGS: &str = "ISOSpeedRatings";
    pub const ISO: &str = "ISO";
    pub const EXPOSURE_TIME: &str = "ExposureTime";
}

// =============================================================================
// ExifError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExifError {
    /// The bytes are not an image container with an EXIF segment.
    #[error("no EXIF data found")]
    NotFound,

    /// An EXIF segment exists but cannot be decoded.
    #[error("malformed EXIF data: {0}")]
    Malformed(String),
}

// =============================================================================
// ExifTags
// =============================================================================

/// Tag name → description map produced by an [`ExifParser`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExifTags {
    entries: HashMap<String, String>,
}

impl ExifTags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a tag description.
    pub fn insert(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.entries.insert(name.into(), description.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: &str, description: &str) -> Self {
        self.insert(name, description);
        self
    }

    /// Trimmed description of `name`.
    ///
    /// A tag whose description is empty after trimming counts as absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// First present tag among `names`.
    #[must_use]
    pub fn first_of(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.get(name))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ExifTags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// =============================================================================
// ExifParser Trait
// =============================================================================

/// Parses embedded EXIF metadata out of image bytes.
pub trait ExifParser: Send + Sync {
    /// Reads every primary-image tag from `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`ExifError`] if the bytes carry no readable EXIF segment.
    fn parse(&self, bytes: &[u8]) -> Result<ExifTags, ExifError>;
}
