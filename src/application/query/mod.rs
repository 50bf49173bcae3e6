// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! # Available Services
//!
//! - [`gallery`]: Photo gallery state and derived views (`GalleryState`)
//!
//! # Design Notes
//!
//! Query services hold view state over domain data. They never perform I/O:
//! results from the async adapters are merged in by the app shell.

pub mod gallery;

pub use gallery::{GalleryState, NavigationInfo};
