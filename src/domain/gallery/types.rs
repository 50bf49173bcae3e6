// SPDX-License-Identifier: MPL-2.0
//! Core photo types for the domain layer.
//!
//! A [`PhotoDescriptor`] is known at build time. Once its metadata extraction
//! settles it becomes a [`PhotoRecord`]. The gallery keeps one [`PhotoSlot`] per
//! descriptor so a photo can be displayed before its record exists.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Fixed text shown when capture equipment cannot be determined.
pub const EQUIPMENT_UNAVAILABLE: &str = "Equipment information not available";

/// Unique identifier of a photo in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(pub u32);

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of tags used to group photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Nature,
    Portrait,
    Street,
}

impl Category {
    /// Every category, in the order filter controls list them.
    pub const ALL: [Category; 3] = [Category::Nature, Category::Portrait, Category::Street];

    /// Stable lowercase key (`"nature"`, `"portrait"`, `"street"`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Category::Nature => "nature",
            Category::Portrait => "portrait",
            Category::Street => "street",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an unknown category key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown photo category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Static description of a photo, defined before any metadata extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoDescriptor {
    pub id: PhotoId,
    /// Path or URL of the image asset.
    pub source: String,
    pub caption: String,
    pub category: Category,
}

impl PhotoDescriptor {
    #[must_use]
    pub fn new(
        id: u32,
        source: impl Into<String>,
        caption: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: PhotoId(id),
            source: source.into(),
            caption: caption.into(),
            category,
        }
    }
}

/// Outcome of a metadata extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Equipment {
    /// Human-readable capture summary, e.g. `"Z50II 50 mm f/3.5 1/200s ISO 200"`.
    Described(String),
    /// Extraction failed; displays as [`EQUIPMENT_UNAVAILABLE`].
    Unavailable,
}

impl Equipment {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Equipment::Described(text) => text,
            Equipment::Unavailable => EQUIPMENT_UNAVAILABLE,
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A descriptor merged with its extraction outcome. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    descriptor: PhotoDescriptor,
    equipment: Equipment,
}

impl PhotoRecord {
    #[must_use]
    pub fn new(descriptor: PhotoDescriptor, equipment: Equipment) -> Self {
        Self {
            descriptor,
            equipment,
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> &PhotoDescriptor {
        &self.descriptor
    }

    #[must_use]
    pub fn id(&self) -> PhotoId {
        self.descriptor.id
    }

    #[must_use]
    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }
}

/// A gallery entry: either still waiting for its metadata or complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSlot {
    Pending(PhotoDescriptor),
    Ready(PhotoRecord),
}

impl PhotoSlot {
    #[must_use]
    pub fn descriptor(&self) -> &PhotoDescriptor {
        match self {
            PhotoSlot::Pending(descriptor) => descriptor,
            PhotoSlot::Ready(record) => record.descriptor(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PhotoId {
        self.descriptor().id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.descriptor().category
    }

    /// Equipment of a settled record, `None` while extraction is in flight.
    #[must_use]
    pub fn equipment(&self) -> Option<&Equipment> {
        match self {
            PhotoSlot::Pending(_) => None,
            PhotoSlot::Ready(record) => Some(record.equipment()),
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, PhotoSlot::Pending(_))
    }
}

/// Decoded RGBA pixels of a photo, free of any UI toolkit types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePixels {
    width: u32,
    height: u32,
    rgba: Arc<Vec<u8>>,
}

impl TilePixels {
    /// Wraps RGBA data, returning `None` when its length does not match
    /// `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        (rgba.len() == expected).then(|| Self {
            width,
            height,
            rgba: Arc::new(rgba),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}
