// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the navbar and the
//! current screen based on application state.

use super::{Message, Screen};
use crate::application::query::GalleryState;
use crate::domain::gallery::PhotoId;
use crate::domain::profile::ProfileSection;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::profile::{self, ViewContext as ProfileViewContext};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer_overlay::{self, ViewContext as ViewerViewContext};
use iced::widget::image::Handle;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};
use std::collections::HashMap;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub section: ProfileSection,
    pub theme_mode: ThemeMode,
    pub gallery: &'a GalleryState,
    pub tiles: &'a HashMap<PhotoId, Handle>,
}

/// Renders the navbar above the active screen, with the photo viewer
/// covering both when a photo is open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active_section: (ctx.screen == Screen::Profile).then_some(ctx.section),
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let current_view = match ctx.screen {
        Screen::Profile => profile::view(ProfileViewContext {
            i18n: ctx.i18n,
            section: ctx.section,
        }),
        Screen::Photos => gallery::view(GalleryViewContext {
            i18n: ctx.i18n,
            gallery: ctx.gallery,
            tiles: ctx.tiles,
        })
        .map(Message::Gallery),
    };

    let page = Container::new(
        Column::new()
            .push(navbar)
            .push(
                Container::new(current_view)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    let overlay = (ctx.screen == Screen::Photos)
        .then(|| {
            viewer_overlay::view(ViewerViewContext {
                i18n: ctx.i18n,
                gallery: ctx.gallery,
                tiles: ctx.tiles,
            })
        })
        .flatten();

    match overlay {
        Some(layer) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page)
            .push(layer.map(Message::Viewer))
            .into(),
        None => page.into(),
    }
}
