// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio built with the Iced GUI framework.
//!
//! It renders a static profile and a photo gallery that reads camera EXIF
//! metadata from each photo to describe the equipment it was taken with.
//!
//! # Layers
//!
//! - [`domain`] - Gallery and profile types, free of I/O
//! - [`application`] - Ports and the gallery state manager
//! - [`media`] - Adapters: asset fetching, EXIF parsing, extraction, decoding
//! - [`ui`] and [`app`] - Iced components and the application shell

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod application;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod media;
pub mod ui;
