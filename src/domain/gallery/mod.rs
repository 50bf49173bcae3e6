// SPDX-License-Identifier: MPL-2.0
//! Photo gallery domain types.

pub mod filter;
pub mod types;

pub use filter::CategoryFilter;
pub use types::{
    Category, Equipment, PhotoDescriptor, PhotoId, PhotoRecord, PhotoSlot, TilePixels,
    UnknownCategory, EQUIPMENT_UNAVAILABLE,
};
