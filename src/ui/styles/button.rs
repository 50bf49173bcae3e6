// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use super::scheme;
use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow, with_alpha,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled brand button, used for the CV download and the active filter.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    let background = match status {
        button::Status::Hovered => palette::INDIGO_500,
        button::Status::Disabled => colors.text_tertiary,
        button::Status::Active | button::Status::Pressed => colors.brand_primary,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: background,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: if status == button::Status::Hovered {
            shadow::SM
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Outlined pill for filters that are not active.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    let (background, border) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (colors.surface_secondary, colors.brand_primary)
        }
        button::Status::Active | button::Status::Disabled => {
            (colors.surface_primary, colors.border)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.text_secondary,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only link used in the navbar and the profile sections.
///
/// `active` highlights the current navbar entry.
pub fn link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = scheme(theme);
        let text_color = match status {
            _ if active => colors.brand_primary,
            button::Status::Hovered | button::Status::Pressed => colors.text_primary,
            button::Status::Active | button::Status::Disabled => colors.text_secondary,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless wrapper around a gallery tile.
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: Color::TRANSPARENT,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: if status == button::Status::Hovered {
            shadow::LG
        } else {
            shadow::SM
        },
        snap: true,
    }
}

/// Round translucent control drawn over the viewer backdrop.
pub fn viewer_control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::STRONG,
        button::Status::Pressed => opacity::BACKDROP,
        button::Status::Active | button::Status::Disabled => opacity::MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(with_alpha(BLACK, alpha))),
        text_color: WHITE,
        border: Border {
            color: with_alpha(WHITE, opacity::SUBTLE),
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}
