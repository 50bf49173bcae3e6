// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration settings.

/// Directory that `/`-rooted photo locators resolve against.
pub const DEFAULT_ASSET_ROOT: &str = "public";

/// User agent sent when fetching remote photos.
pub const DEFAULT_USER_AGENT: &str = concat!("IcedFolio/", env!("CARGO_PKG_VERSION"));

/// Locale used when neither the CLI, the config nor the OS provide one.
pub const DEFAULT_LOCALE: &str = "en-US";
