// SPDX-License-Identifier: MPL-2.0
//! Photography screen: filter bar, tile grid, equipment panel.
//!
//! The screen reads everything from [`GalleryState`] and the decoded tile
//! handles owned by the app. The full-screen viewer is drawn on top of it
//! by [`crate::ui::viewer_overlay`].

use crate::application::query::GalleryState;
use crate::catalog;
use crate::domain::gallery::{CategoryFilter, PhotoId, PhotoSlot};
use crate::domain::profile::GearItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, Column, Container, Image, Row, Text},
    ContentFit, Element, Length,
};
use std::collections::HashMap;

/// Tiles per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryState,
    /// Decoded tiles; photos without an entry are still loading or failed.
    pub tiles: &'a HashMap<PhotoId, Handle>,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    FilterSelected(CategoryFilter),
    TilePressed(PhotoId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The filter was applied to the gallery; the viewer may have closed.
    FilterChanged(CategoryFilter),
    /// The viewer opened on this photo.
    ViewerOpened(PhotoId),
}

/// Applies a gallery message to the state.
pub fn update(gallery: &mut GalleryState, message: Message) -> Event {
    match message {
        Message::FilterSelected(filter) => {
            if gallery.active_filter() == filter {
                return Event::None;
            }
            gallery.set_filter(filter);
            Event::FilterChanged(filter)
        }
        Message::TilePressed(id) => {
            gallery.open(id);
            match gallery.active_id() {
                Some(active) if active == id => Event::ViewerOpened(id),
                _ => Event::None,
            }
        }
    }
}

/// Render the photography screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(ctx.i18n.tr("gallery-title")).size(typography::DISPLAY));

    if ctx.gallery.is_loading_metadata() {
        content = content.push(Text::new(ctx.i18n.tr("gallery-loading")).size(typography::BODY));
    }

    let content = content
        .push(build_filter_bar(&ctx))
        .push(build_grid(&ctx))
        .push(build_equipment_panel(&ctx))
        .push(Text::new(ctx.i18n.tr("gallery-footer")).size(typography::CAPTION));

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

fn build_filter_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = ctx.gallery.active_filter();

    ctx.gallery
        .filter_counts()
        .into_iter()
        .fold(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(Text::new(ctx.i18n.tr("gallery-filter-label")).size(typography::BODY)),
            |row, (filter, count)| {
                let label = Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(Text::new(ctx.i18n.tr(&filter_i18n_key(filter))).size(typography::BODY))
                    .push(
                        Container::new(Text::new(count.to_string()).size(typography::CAPTION))
                            .padding([0.0, spacing::XS])
                            .style(styles::container::badge),
                    );
                let chip = button(label)
                    .on_press(Message::FilterSelected(filter))
                    .padding([spacing::XXS, spacing::SM]);
                let chip = if filter == active {
                    chip.style(styles::button::selected)
                } else {
                    chip.style(styles::button::unselected)
                };
                row.push(chip)
            },
        )
        .into()
}

/// Localization key of a filter label.
#[must_use]
pub fn filter_i18n_key(filter: CategoryFilter) -> String {
    format!("filter-{}", filter.key())
}

fn build_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let visible: Vec<&PhotoSlot> = ctx.gallery.visible().collect();
    if visible.is_empty() {
        return Text::new(ctx.i18n.tr("gallery-empty"))
            .size(typography::BODY)
            .into();
    }

    visible
        .chunks(GRID_COLUMNS)
        .fold(Column::new().spacing(spacing::MD), |grid, chunk| {
            grid.push(
                chunk
                    .iter()
                    .fold(Row::new().spacing(spacing::MD), |row, slot| {
                        row.push(build_tile(ctx, slot))
                    }),
            )
        })
        .into()
}

fn build_tile<'a>(ctx: &ViewContext<'a>, slot: &'a PhotoSlot) -> Element<'a, Message> {
    let descriptor = slot.descriptor();
    let id = descriptor.id;

    let picture: Element<'a, Message> = match ctx.tiles.get(&id) {
        Some(handle) if !ctx.gallery.has_failed(id) => Image::new(handle.clone())
            .width(sizing::TILE_WIDTH)
            .height(sizing::TILE_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into(),
        _ => {
            // Failed tiles name the photo and the reason; loading tiles stay blank.
            let mut label = Column::new().spacing(spacing::XXS).align_x(Horizontal::Center);
            if let Some(reason) = ctx.gallery.failure(id) {
                label = label
                    .push(
                        Text::new(ctx.i18n.tr_with_args(
                            "gallery-tile-placeholder",
                            &[("id", id.to_string().as_str())],
                        ))
                        .size(typography::BODY),
                    )
                    .push(Text::new(ctx.i18n.tr(reason.i18n_key())).size(typography::CAPTION));
            }
            Container::new(label)
                .width(sizing::TILE_WIDTH)
                .height(sizing::TILE_HEIGHT)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(styles::container::tile_placeholder)
                .into()
        }
    };

    let tile = Column::new()
        .spacing(spacing::XS)
        .width(sizing::TILE_WIDTH)
        .push(picture)
        .push(Text::new(descriptor.caption.as_str()).size(typography::BODY))
        .push(
            Text::new(ctx.i18n.tr(&filter_i18n_key(descriptor.category.into())))
                .size(typography::CAPTION),
        );

    button(tile)
        .on_press(Message::TilePressed(id))
        .padding(0)
        .style(styles::button::tile)
        .into()
}

fn build_equipment_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let panel = Row::new()
        .spacing(spacing::XL)
        .push(build_gear_list(
            ctx.i18n.tr("gallery-equipment-cameras"),
            catalog::CAMERAS,
        ))
        .push(build_gear_list(
            ctx.i18n.tr("gallery-equipment-lenses"),
            catalog::LENSES,
        ));

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(ctx.i18n.tr("gallery-equipment-title")).size(typography::TITLE_MD))
            .push(panel),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn build_gear_list<'a>(title: String, items: &'a [GearItem]) -> Element<'a, Message> {
    items
        .iter()
        .fold(
            Column::new()
                .spacing(spacing::XS)
                .width(Length::Fill)
                .push(Text::new(title).size(typography::TITLE_SM)),
            |column, item| {
                column.push(
                    Column::new()
                        .push(Text::new(item.name).size(typography::BODY))
                        .push(Text::new(item.note).size(typography::CAPTION)),
                )
            },
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::domain::gallery::{Category, Equipment, PhotoDescriptor, PhotoRecord};
    use crate::error::Error;

    fn gallery() -> GalleryState {
        GalleryState::new(vec![
            PhotoDescriptor::new(1, "/a.jpg", "A", Category::Nature),
            PhotoDescriptor::new(2, "/b.jpg", "B", Category::Street),
            PhotoDescriptor::new(3, "/c.jpg", "C", Category::Street),
        ])
    }

    #[test]
    fn filter_keys_exist_in_translations() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        for filter in CategoryFilter::ALL {
            assert!(!i18n.tr(&filter_i18n_key(filter)).starts_with("MISSING"));
        }
    }

    #[test]
    fn selecting_the_active_filter_is_a_noop() {
        let mut gallery = gallery();
        assert_eq!(
            update(&mut gallery, Message::FilterSelected(CategoryFilter::All)),
            Event::None
        );
    }

    #[test]
    fn selecting_a_filter_updates_the_state() {
        let mut gallery = gallery();
        let event = update(
            &mut gallery,
            Message::FilterSelected(CategoryFilter::Only(Category::Street)),
        );
        assert_eq!(
            event,
            Event::FilterChanged(CategoryFilter::Only(Category::Street))
        );
        assert_eq!(gallery.visible().count(), 2);
    }

    #[test]
    fn pressing_a_tile_opens_the_viewer() {
        let mut gallery = gallery();
        let event = update(&mut gallery, Message::TilePressed(PhotoId(2)));
        assert_eq!(event, Event::ViewerOpened(PhotoId(2)));
        assert_eq!(gallery.active_id(), Some(PhotoId(2)));
    }

    #[test]
    fn pressing_an_unknown_tile_is_ignored() {
        let mut gallery = gallery();
        assert_eq!(update(&mut gallery, Message::TilePressed(PhotoId(9))), Event::None);
        assert_eq!(gallery.active_id(), None);
    }

    #[test]
    fn view_renders_loading_failed_and_empty_states() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let mut gallery = gallery();
        gallery.mark_load_failed(PhotoId(1), Error::Decode("truncated".into()));
        gallery.merge(PhotoRecord::new(
            PhotoDescriptor::new(2, "/b.jpg", "B", Category::Street),
            Equipment::Unavailable,
        ));
        let mut tiles = HashMap::new();
        tiles.insert(PhotoId(2), Handle::from_rgba(1, 1, vec![0_u8; 4]));

        {
            let _element = view(ViewContext {
                i18n: &i18n,
                gallery: &gallery,
                tiles: &tiles,
            });
        }

        gallery.set_filter(CategoryFilter::Only(Category::Portrait));
        let _empty = view(ViewContext {
            i18n: &i18n,
            gallery: &gallery,
            tiles: &tiles,
        });
    }
}
