// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.

use super::Message;
use crate::app::config;
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Writes the theme preference to `settings.toml`, keeping the other
/// settings as they are on disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the function directly rather than through the update loop.
pub fn persist_theme_mode(theme_mode: ThemeMode) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }
    if let Err(error) = save_theme_mode(theme_mode, None) {
        tracing::warn!(%error, "failed to save config");
    }
    Task::none()
}

/// Loads the config from `base_dir` (or the default location), replaces the
/// theme mode and saves it back.
///
/// # Errors
///
/// Returns an error if the config file cannot be written.
pub fn save_theme_mode(
    theme_mode: ThemeMode,
    base_dir: Option<std::path::PathBuf>,
) -> crate::error::Result<()> {
    let (mut cfg, _warning) = config::load_with_override(base_dir.clone());
    cfg.general.theme_mode = theme_mode;
    config::save_with_override(&cfg, base_dir)
}
