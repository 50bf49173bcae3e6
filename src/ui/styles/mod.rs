// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for every UI component.

pub mod button;
pub mod container;
pub mod overlay;
pub mod tooltip;

use crate::ui::theming::ColorScheme;
use iced::Theme;

/// Resolves the app palette for the Iced theme a style function receives.
#[must_use]
pub fn scheme(theme: &Theme) -> ColorScheme {
    if matches!(theme, Theme::Dark) {
        ColorScheme::dark()
    } else {
        ColorScheme::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_follows_theme() {
        assert_eq!(scheme(&Theme::Light), ColorScheme::light());
        assert_eq!(scheme(&Theme::Dark), ColorScheme::dark());
    }
}
