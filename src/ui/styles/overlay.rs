// SPDX-License-Identifier: MPL-2.0
//! Styles for the full-screen photo viewer.

use super::scheme;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, with_alpha};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Dimmed layer covering the whole window behind the photo.
pub fn backdrop(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.backdrop)),
        text_color: Some(colors.overlay_text),
        ..Default::default()
    }
}

/// Caption block below the photo.
pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(WHITE, opacity::SUBTLE / 2.0))),
        text_color: Some(WHITE),
        border: Border {
            color: with_alpha(WHITE, opacity::SUBTLE),
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
