// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each gallery load gets a generation number. Results carry the number of
//! the load that produced them and are dropped when it is no longer current,
//! which is how a torn-down gallery ignores its late extractions.

use super::{persistence, Message, Screen};
use crate::application::query::GalleryState;
use crate::domain::gallery::{PhotoDescriptor, PhotoId, PhotoRecord, TilePixels};
use crate::domain::profile::ProfileSection;
use crate::error::Error;
use crate::media::{Extractor, LoadEvent};
use crate::ui::gallery::{self, Event as GalleryEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::theming::ThemeMode;
use crate::ui::viewer_overlay;
use iced::widget::image::Handle;
use iced::Task;
use std::collections::HashMap;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub section: &'a mut ProfileSection,
    pub theme_mode: &'a mut ThemeMode,
    pub gallery: &'a mut GalleryState,
    pub tiles: &'a mut HashMap<PhotoId, Handle>,
    pub generation: &'a mut u64,
    pub extractor: &'a Extractor,
    pub photos: &'a [PhotoDescriptor],
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::ShowSection(section) => {
            *ctx.section = section;
            handle_screen_switch(ctx, Screen::Profile)
        }
        NavbarEvent::ShowPhotography => handle_screen_switch(ctx, Screen::Photos),
        NavbarEvent::ToggleTheme => {
            *ctx.theme_mode = ctx.theme_mode.toggled();
            persistence::persist_theme_mode(*ctx.theme_mode)
        }
    }
}

/// Switches screens. Entering the gallery starts a load, leaving it tears
/// the gallery down.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }
    let previous = std::mem::replace(ctx.screen, target);

    if previous == Screen::Photos {
        teardown_gallery(ctx);
    }
    if target == Screen::Photos {
        return start_gallery_load(ctx);
    }
    Task::none()
}

/// Resets the gallery and spawns the load: one fetch per photo, reported as
/// a record and a tile.
pub fn start_gallery_load(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.generation = ctx.generation.wrapping_add(1);
    let generation = *ctx.generation;
    *ctx.gallery = GalleryState::new(ctx.photos.iter().cloned());
    ctx.tiles.clear();
    tracing::info!(generation, photos = ctx.photos.len(), "loading gallery");

    Task::run(ctx.extractor.load(ctx.photos.to_vec()), move |event| match event {
        LoadEvent::Record(record) => Message::RecordExtracted { generation, record },
        LoadEvent::Tile { id, result } => Message::TileLoaded {
            generation,
            id,
            result,
        },
    })
}

fn teardown_gallery(ctx: &mut UpdateContext<'_>) {
    *ctx.generation = ctx.generation.wrapping_add(1);
    *ctx.gallery = GalleryState::default();
    ctx.tiles.clear();
    tracing::debug!(generation = *ctx.generation, "gallery torn down");
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match gallery::update(ctx.gallery, message) {
        GalleryEvent::FilterChanged(filter) => {
            tracing::debug!(%filter, visible = ctx.gallery.visible().count(), "filter changed");
        }
        GalleryEvent::ViewerOpened(id) => tracing::debug!(%id, "viewer opened"),
        GalleryEvent::None => {}
    }
    Task::none()
}

pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: viewer_overlay::Message,
) -> Task<Message> {
    viewer_overlay::update(ctx.gallery, message);
    Task::none()
}

pub fn handle_record_extracted(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    record: PhotoRecord,
) -> Task<Message> {
    if generation != *ctx.generation {
        tracing::debug!(id = %record.id(), generation, "discarding stale record");
        return Task::none();
    }
    if ctx.gallery.merge(record) && !ctx.gallery.is_loading_metadata() {
        tracing::info!(generation, "metadata loaded for every photo");
    }
    Task::none()
}

pub fn handle_tile_loaded(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    id: PhotoId,
    result: Result<TilePixels, Error>,
) -> Task<Message> {
    if generation != *ctx.generation {
        return Task::none();
    }
    match result {
        Ok(pixels) => {
            let handle =
                Handle::from_rgba(pixels.width(), pixels.height(), pixels.rgba().to_vec());
            ctx.tiles.insert(id, handle);
        }
        Err(error) => {
            tracing::warn!(%id, %error, "tile could not be loaded");
            ctx.gallery.mark_load_failed(id, error);
        }
    }
    Task::none()
}
