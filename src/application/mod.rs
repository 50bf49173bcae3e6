// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (CQRS read-side)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - [`crate::media`] implements application layer ports
//! - The UI and app shell use application layer services
//!
//! # Example
//!
//! ```ignore
//! use iced_folio::application::query::GalleryState;
//! use iced_folio::catalog;
//!
//! let mut gallery = GalleryState::new(catalog::photo_descriptors());
//! gallery.open(gallery.photos()[0].id());
//! ```

pub mod port;
pub mod query;
