// SPDX-License-Identifier: MPL-2.0
//! Full-screen viewer for the active photo.
//!
//! The overlay is a layer meant to sit on top of the gallery in a `Stack`.
//! Presses on the backdrop close it. The photo and its controls are wrapped
//! in `opaque`, so presses on them never reach the backdrop.

use crate::application::query::{GalleryState, NavigationInfo};
use crate::domain::gallery::PhotoId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{
        button, center, mouse_area, opaque, tooltip, Column, Container, Image, Row, Space, Text,
    },
    ContentFit, Element,
};
use std::collections::HashMap;

/// Contextual data needed to render the viewer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryState,
    pub tiles: &'a HashMap<PhotoId, Handle>,
}

/// Messages emitted by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    Close,
}

/// Applies a viewer message to the gallery. Requests the gallery cannot
/// honor (no neighbor, nothing open) are ignored.
pub fn update(gallery: &mut GalleryState, message: Message) {
    match message {
        Message::Previous => gallery.previous(),
        Message::Next => gallery.next(),
        Message::Close => gallery.close(),
    }
}

/// Render the viewer layer, or `None` when no photo is active.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Option<Element<'_, Message>> {
    let slot = ctx.gallery.active()?;
    let descriptor = slot.descriptor();
    let navigation = ctx.gallery.navigation_info();

    let picture: Element<'_, Message> = match ctx.tiles.get(&descriptor.id) {
        Some(handle) if !ctx.gallery.has_failed(descriptor.id) => Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .into(),
        _ => Container::new(Text::new(ctx.i18n.tr("viewer-image-unavailable")))
            .width(sizing::TILE_WIDTH * 2.0)
            .height(sizing::TILE_HEIGHT * 2.0)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::tile_placeholder)
            .into(),
    };

    let mut caption = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(descriptor.caption.as_str()).size(typography::TITLE_SM));
    if let Some(position) = position_label(ctx.i18n, navigation) {
        caption = caption.push(Text::new(position).size(typography::CAPTION));
    }
    if let Some(equipment) = slot.equipment() {
        caption = caption.push(Text::new(equipment.as_str()).size(typography::BODY_SM));
    }

    let photo = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Container::new(picture)
                .max_width(sizing::VIEWER_IMAGE_MAX_WIDTH)
                .max_height(sizing::VIEWER_IMAGE_MAX_HEIGHT),
        )
        .push(
            Container::new(caption)
                .padding(spacing::SM)
                .style(styles::overlay::caption),
        );

    let previous = navigation.has_previous.then(|| {
        control(
            "‹",
            ctx.i18n.tr("viewer-previous"),
            Message::Previous,
            tooltip::Position::Right,
        )
    });
    let next = navigation.has_next.then(|| {
        control(
            "›",
            ctx.i18n.tr("viewer-next"),
            Message::Next,
            tooltip::Position::Left,
        )
    });

    let body = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(previous.unwrap_or_else(control_gap))
        .push(photo)
        .push(next.unwrap_or_else(control_gap));

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Right)
        .push(control(
            "×",
            ctx.i18n.tr("viewer-close"),
            Message::Close,
            tooltip::Position::Left,
        ))
        .push(body);

    let layer = mouse_area(center(opaque(content)).style(styles::overlay::backdrop))
        .on_press(Message::Close);

    Some(opaque(layer))
}

/// "2 / 5": position of the active photo in the filtered list.
#[must_use]
pub fn position_label(i18n: &I18n, navigation: NavigationInfo) -> Option<String> {
    let index = navigation.current_index?;
    let position = (index + 1).to_string();
    let count = navigation.filtered_count.to_string();
    Some(i18n.tr_with_args(
        "viewer-position",
        &[("position", position.as_str()), ("count", count.as_str())],
    ))
}

fn control<'a>(
    glyph: &'a str,
    tip: String,
    message: Message,
    position: tooltip::Position,
) -> Element<'a, Message> {
    let pressable = button(center(Text::new(glyph).size(typography::TITLE_LG)))
        .padding(0)
        .on_press(message)
        .width(sizing::VIEWER_CONTROL)
        .height(sizing::VIEWER_CONTROL)
        .style(styles::button::viewer_control);

    styles::tooltip::styled(pressable, tip, position).into()
}

/// Keeps the photo centered when a neighbor control is hidden.
fn control_gap<'a>() -> Element<'a, Message> {
    Space::new()
        .width(sizing::VIEWER_CONTROL)
        .height(sizing::VIEWER_CONTROL)
        .into()
}
