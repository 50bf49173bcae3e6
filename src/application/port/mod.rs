// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that adapters in [`crate::media`]
//! implement. The gallery only talks to these traits, which is what lets the
//! tests swap in in-memory fakes.
//!
//! # Available Ports
//!
//! - [`fetch`]: Asset retrieval (locator → bytes)
//! - [`exif`]: EXIF parsing (bytes → tag descriptions)
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so one adapter instance can be shared by every
//!   extraction task
//! - Fetching is asynchronous and returns a boxed `'static` future; parsing
//!   is synchronous and CPU-bound
//!
//! # Example
//!
//! ```ignore
//! use iced_folio::application::port::{AssetFetcher, ExifParser};
//!
//! async fn model(fetcher: &dyn AssetFetcher, parser: &dyn ExifParser) -> Option<String> {
//!     let bytes = fetcher.fetch("/photos/DSC_0085.jpg").await.ok()?;
//!     let tags = parser.parse(&bytes).ok()?;
//!     tags.get("Model").map(str::to_owned)
//! }
//! ```

pub mod exif;
pub mod fetch;

pub use exif::{ExifError, ExifParser, ExifTags};
pub use fetch::{AssetFetcher, FetchError};
