// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the profile and the
//! photo gallery.
//!
//! The `App` struct wires together the domains (profile, gallery,
//! localization, preferences) and translates messages into side effects like
//! config persistence or photo loading.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use persistence::save_theme_mode;
pub use screen::Screen;

use crate::application::query::GalleryState;
use crate::domain::gallery::{PhotoDescriptor, PhotoId};
use crate::domain::profile::ProfileSection;
use crate::i18n::fluent::I18n;
use crate::media::Extractor;
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use iced::{window, Element, Task, Theme};
use std::collections::HashMap;
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    section: ProfileSection,
    theme_mode: ThemeMode,
    gallery: GalleryState,
    /// Decoded tiles of the current gallery load.
    tiles: HashMap<PhotoId, Handle>,
    /// Identifies the current gallery load; bumped on every start and teardown.
    generation: u64,
    extractor: Extractor,
    photos: Vec<PhotoDescriptor>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("section", &self.section)
            .field("generation", &self.generation)
            .field("active_photo", &self.gallery.active_id())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state and, when starting on the gallery,
    /// kicks off the photo load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &flags.config);
        if let Some(key) = &flags.config_warning {
            tracing::warn!(warning = %i18n.tr(key), "configuration problem");
        }

        let mut app = App {
            i18n,
            screen: Screen::Profile,
            section: ProfileSection::default(),
            theme_mode: flags.config.general.theme_mode,
            gallery: GalleryState::default(),
            tiles: HashMap::new(),
            generation: 0,
            extractor: flags.extractor,
            photos: flags.photos,
        };

        let task = if flags.start_screen == Screen::Photos {
            let task = app.update(Message::Navbar(crate::ui::navbar::Message::OpenPhotography));
            app.gallery.set_filter(flags.start_filter);
            task
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.active() {
            Some(slot) if self.screen == Screen::Photos => {
                format!("{} - {app_name}", slot.descriptor().caption)
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            section: &mut self.section,
            theme_mode: &mut self.theme_mode,
            gallery: &mut self.gallery,
            tiles: &mut self.tiles,
            generation: &mut self.generation,
            extractor: &self.extractor,
            photos: &self.photos,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::RecordExtracted { generation, record } => {
                update::handle_record_extracted(&mut ctx, generation, record)
            }
            Message::TileLoaded {
                generation,
                id,
                result,
            } => update::handle_tile_loaded(&mut ctx, generation, id, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            section: self.section,
            theme_mode: self.theme_mode,
            gallery: &self.gallery,
            tiles: &self.tiles,
        })
    }
}
