// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::scheme;
use crate::ui::design_tokens::{radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Page background behind every screen.
pub fn page(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Top navigation bar with a bottom hairline.
pub fn navbar(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Raised card used for profile entries and the equipment panel.
pub fn card(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Grey box shown in place of a tile that has no pixels.
pub fn tile_placeholder(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.border)),
        text_color: Some(colors.text_secondary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small pill holding a count next to a filter label.
pub fn badge(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_secondary),
        border: Border {
            color: colors.border,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}
