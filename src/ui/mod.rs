// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one takes a `ViewContext`, emits its own `Message`, and reports to the app
//! through an `Event` or by updating the state it is handed.
//!
//! # Screens
//!
//! - [`profile`] - Hero block and profile sections
//! - [`gallery`] - Photography screen with filters and tiles
//! - [`viewer_overlay`] - Full-screen viewer drawn over the gallery
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Section links and theme toggle
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod profile;
pub mod styles;
pub mod theming;
pub mod viewer_overlay;
