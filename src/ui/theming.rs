// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.
//!
//! [`ThemeMode`] is the persisted preference; [`ColorScheme`] is the resolved
//! palette that views read their colors from.

use crate::ui::design_tokens::{opacity, palette, with_alpha};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub border: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    pub brand_primary: Color,
    pub error: Color,

    /// Backdrop of the photo viewer, identical in both modes.
    pub backdrop: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::SLATE_50,
            border: palette::SLATE_200,

            text_primary: palette::SLATE_900,
            text_secondary: palette::SLATE_600,
            text_tertiary: palette::SLATE_400,

            brand_primary: palette::INDIGO_600,
            error: palette::ERROR_500,

            backdrop: with_alpha(palette::BLACK, opacity::BACKDROP),
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::SLATE_950,
            surface_secondary: palette::SLATE_900,
            border: palette::SLATE_800,

            text_primary: palette::SLATE_100,
            text_secondary: palette::SLATE_300,
            text_tertiary: palette::SLATE_500,

            brand_primary: palette::INDIGO_400,
            error: palette::ERROR_500,

            backdrop: with_alpha(palette::BLACK, opacity::BACKDROP),
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    /// Follow the operating system preference.
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// Mode selected by the navbar toggle: the opposite of the effective theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Built-in Iced theme matching the effective mode.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn toggle_flips_explicit_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        // System resolves first, then flips to an explicit mode.
        assert_ne!(ThemeMode::System.toggled(), ThemeMode::System);
    }

    #[test]
    fn backdrop_is_the_same_in_both_modes() {
        assert_eq!(ColorScheme::light().backdrop, ColorScheme::dark().backdrop);
    }
}
