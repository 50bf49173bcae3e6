// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! The bubble uses the inverse of the page colors so it stands out in both
//! light and dark mode.

use super::scheme;
use crate::ui::design_tokens::{radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Element, Theme};

/// Style for the tooltip bubble.
pub fn bubble(theme: &Theme) -> container::Style {
    let colors = scheme(theme);

    container::Style {
        background: Some(Background::Color(colors.text_primary)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: colors.border,
        },
        shadow: shadow::SM,
        text_color: Some(colors.surface_primary),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(bubble);

    tooltip(content, tip_container, position).gap(spacing::XS)
}
