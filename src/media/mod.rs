// SPDX-License-Identifier: MPL-2.0
//! Photo I/O: asset retrieval, EXIF parsing, equipment extraction and
//! decoding.
//!
//! This module holds the adapters behind the application ports plus the
//! async orchestration that runs them for the gallery.

pub mod equipment;
pub mod exif_parser;
pub mod extraction;
pub mod fetch;
pub mod tile;

pub use equipment::{
    describe_equipment, equipment_from_bytes, extract_equipment, normalize_camera_model,
};
pub use exif_parser::KamadakExifParser;
pub use extraction::{Extractor, LoadEvent};
pub use fetch::{AssetLocator, LocatorFetcher};
pub use tile::{decode_tile, decode_tile_blocking};
