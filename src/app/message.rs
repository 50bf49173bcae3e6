// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::app::config::Config;
use crate::domain::gallery::{CategoryFilter, PhotoDescriptor, PhotoId, PhotoRecord, TilePixels};
use crate::error::Error;
use crate::media::Extractor;
use crate::ui::{gallery, navbar, viewer_overlay};

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery::Message),
    Viewer(viewer_overlay::Message),
    /// Equipment of one photo is known. `generation` identifies the gallery
    /// load that produced it.
    RecordExtracted {
        generation: u64,
        record: PhotoRecord,
    },
    /// Pixels of one tile were decoded, or could not be.
    TileLoaded {
        generation: u64,
        id: PhotoId,
        result: Result<TilePixels, Error>,
    },
}

/// Everything the application needs at startup, resolved by the launcher.
#[derive(Debug)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    pub config: Config,
    /// Localization key of a problem met while loading `config`.
    pub config_warning: Option<String>,
    /// Adapters used by every gallery load.
    pub extractor: Extractor,
    /// Photos shown in the gallery, in display order.
    pub photos: Vec<PhotoDescriptor>,
    /// Filter applied when the gallery is the start screen.
    pub start_filter: CategoryFilter,
    pub start_screen: Screen,
}
