// SPDX-License-Identifier: MPL-2.0
//! Gallery state management for the photo screen.
//!
//! [`GalleryState`] owns the photo collection, the active filter, the photo
//! shown in the viewer and the set of tiles that failed to render. Every
//! derived view (visible list, counts, navigation bounds) is recomputed from
//! the collection and the active filter, so none of them can go stale.
//!
//! The viewer invariant is enforced on every transition: if a photo is
//! active, it is part of the current filtered view.

use crate::domain::gallery::{CategoryFilter, PhotoDescriptor, PhotoId, PhotoRecord, PhotoSlot};
use crate::error::Error;
use std::collections::HashMap;

/// Navigation state information for the viewer overlay.
///
/// A snapshot computed from the visible list; the overlay renders its
/// previous/next controls from these flags alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether a later photo exists in the visible list.
    pub has_next: bool,
    /// Whether an earlier photo exists in the visible list.
    pub has_previous: bool,
    /// Position of the active photo in the visible list (0-indexed), if any.
    pub current_index: Option<usize>,
    /// Number of photos matching the active filter.
    pub filtered_count: usize,
}

/// Photo collection plus the view state layered over it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryState {
    photos: Vec<PhotoSlot>,
    active_filter: CategoryFilter,
    active_photo: Option<PhotoId>,
    /// Tiles that could not be rendered, with the reason.
    failed: HashMap<PhotoId, Error>,
}

impl GalleryState {
    /// Creates a gallery with every descriptor pending extraction.
    #[must_use]
    pub fn new(descriptors: impl IntoIterator<Item = PhotoDescriptor>) -> Self {
        Self {
            photos: descriptors.into_iter().map(PhotoSlot::Pending).collect(),
            ..Self::default()
        }
    }

    /// Creates a gallery from already-settled records.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = PhotoRecord>) -> Self {
        Self {
            photos: records.into_iter().map(PhotoSlot::Ready).collect(),
            ..Self::default()
        }
    }

    // =========================================================================
    // Collection
    // =========================================================================

    /// Replaces the pending slot of `record` with the settled record.
    ///
    /// Returns `false` (and changes nothing) if the photo is unknown or was
    /// already settled. Records are immutable once merged.
    pub fn merge(&mut self, record: PhotoRecord) -> bool {
        let id = record.id();
        match self.photos.iter_mut().find(|slot| slot.id() == id) {
            Some(slot) if slot.is_pending() => {
                *slot = PhotoSlot::Ready(record);
                true
            }
            _ => false,
        }
    }

    /// Returns `true` while at least one extraction has not settled.
    #[must_use]
    pub fn is_loading_metadata(&self) -> bool {
        self.photos.iter().any(PhotoSlot::is_pending)
    }

    /// Every photo in descriptor order, ignoring the filter.
    #[must_use]
    pub fn photos(&self) -> &[PhotoSlot] {
        &self.photos
    }

    #[must_use]
    pub fn get(&self, id: PhotoId) -> Option<&PhotoSlot> {
        self.photos.iter().find(|slot| slot.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    // =========================================================================
    // Filter
    // =========================================================================

    #[must_use]
    pub fn active_filter(&self) -> CategoryFilter {
        self.active_filter
    }

    /// Replaces the filter, closing the viewer if its photo drops out of view.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.active_filter = filter;
        if let Some(id) = self.active_photo {
            if !self.is_visible(id) {
                self.active_photo = None;
            }
        }
    }

    /// Photos matching the active filter, in descriptor order.
    pub fn visible(&self) -> impl Iterator<Item = &PhotoSlot> {
        let filter = self.active_filter;
        self.photos
            .iter()
            .filter(move |slot| filter.matches(slot.category()))
    }

    /// Number of photos in the whole collection matching `filter`.
    ///
    /// Independent of the active filter, so the filter bar labels stay stable.
    #[must_use]
    pub fn count(&self, filter: CategoryFilter) -> usize {
        self.photos
            .iter()
            .filter(|slot| filter.matches(slot.category()))
            .count()
    }

    /// `(filter, count)` for every filter value, wildcard first.
    #[must_use]
    pub fn filter_counts(&self) -> [(CategoryFilter, usize); 4] {
        CategoryFilter::ALL.map(|filter| (filter, self.count(filter)))
    }

    #[must_use]
    pub fn is_visible(&self, id: PhotoId) -> bool {
        self.visible().any(|slot| slot.id() == id)
    }

    // =========================================================================
    // Viewer
    // =========================================================================

    /// Opens the viewer on `id`. Ignored if the photo is not visible.
    pub fn open(&mut self, id: PhotoId) {
        if self.is_visible(id) {
            self.active_photo = Some(id);
        }
    }

    pub fn close(&mut self) {
        self.active_photo = None;
    }

    /// Moves the viewer to the next visible photo. No-op at the end.
    pub fn next(&mut self) {
        self.step(1);
    }

    /// Moves the viewer to the previous visible photo. No-op at the start.
    pub fn previous(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        let Some(index) = self.current_index() else {
            return;
        };
        let Some(target) = index.checked_add_signed(delta) else {
            return;
        };
        let next = self.visible().nth(target).map(PhotoSlot::id);
        if let Some(id) = next {
            self.active_photo = Some(id);
        }
    }

    /// Id of the photo shown in the viewer.
    #[must_use]
    pub fn active_id(&self) -> Option<PhotoId> {
        self.active_photo
    }

    /// Slot shown in the viewer, if any.
    #[must_use]
    pub fn active(&self) -> Option<&PhotoSlot> {
        let id = self.active_photo?;
        self.visible().find(|slot| slot.id() == id)
    }

    fn current_index(&self) -> Option<usize> {
        let id = self.active_photo?;
        self.visible().position(|slot| slot.id() == id)
    }

    /// Returns a snapshot of the viewer navigation state.
    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        let filtered_count = self.count(self.active_filter);
        let current_index = self.current_index();
        NavigationInfo {
            has_next: current_index.is_some_and(|i| i + 1 < filtered_count),
            has_previous: current_index.is_some_and(|i| i > 0),
            current_index,
            filtered_count,
        }
    }

    // =========================================================================
    // Render Failures
    // =========================================================================

    /// Records that the tile of `id` could not be rendered.
    ///
    /// Affects only how the tile is drawn; filters and counts are unchanged.
    pub fn mark_load_failed(&mut self, id: PhotoId, reason: Error) {
        if self.get(id).is_some() {
            self.failed.insert(id, reason);
        }
    }

    #[must_use]
    pub fn has_failed(&self, id: PhotoId) -> bool {
        self.failed.contains_key(&id)
    }

    /// Why the tile of `id` could not be rendered.
    #[must_use]
    pub fn failure(&self, id: PhotoId) -> Option<&Error> {
        self.failed.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{Category, Equipment};

    fn descriptors(categories: &[Category]) -> Vec<PhotoDescriptor> {
        categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let id = u32::try_from(i + 1).unwrap_or(u32::MAX);
                PhotoDescriptor::new(id, format!("/photos/{id}.jpg"), format!("Photo {id}"), *category)
            })
            .collect()
    }

    fn gallery(categories: &[Category]) -> GalleryState {
        GalleryState::from_records(
            descriptors(categories)
                .into_iter()
                .map(|d| PhotoRecord::new(d, Equipment::Unavailable)),
        )
    }

    fn visible_ids(state: &GalleryState) -> Vec<u32> {
        state.visible().map(|slot| slot.id().0).collect()
    }

    #[test]
    fn new_gallery_is_empty_and_closed() {
        let state = GalleryState::default();
        assert!(state.is_empty());
        assert!(state.active().is_none());
        assert!(!state.is_loading_metadata());
        assert_eq!(state.navigation_info(), NavigationInfo::default());
    }

    #[test]
    fn filter_keeps_descriptor_order() {
        let mut state = gallery(&[Category::Nature, Category::Street, Category::Street]);
        state.set_filter(CategoryFilter::Only(Category::Street));
        assert_eq!(visible_ids(&state), vec![2, 3]);
    }

    #[test]
    fn filter_excluding_active_photo_closes_viewer() {
        let mut state = gallery(&[Category::Nature, Category::Street]);
        state.open(PhotoId(1));
        state.set_filter(CategoryFilter::Only(Category::Street));
        assert_eq!(state.active_id(), None);
    }

    #[test]
    fn filter_including_active_photo_keeps_viewer_open() {
        let mut state = gallery(&[Category::Nature, Category::Street]);
        state.open(PhotoId(2));
        state.set_filter(CategoryFilter::Only(Category::Street));
        assert_eq!(state.active_id(), Some(PhotoId(2)));
    }

    #[test]
    fn open_ignores_hidden_and_unknown_photos() {
        let mut state = gallery(&[Category::Nature, Category::Street]);
        state.set_filter(CategoryFilter::Only(Category::Nature));
        state.open(PhotoId(2));
        assert_eq!(state.active_id(), None);
        state.open(PhotoId(42));
        assert_eq!(state.active_id(), None);
    }

    #[test]
    fn next_and_previous_stop_at_boundaries() {
        let mut state = gallery(&[Category::Street, Category::Street, Category::Street]);
        state.open(PhotoId(1));
        state.previous();
        assert_eq!(state.active_id(), Some(PhotoId(1)));
        state.next();
        state.next();
        assert_eq!(state.active_id(), Some(PhotoId(3)));
        state.next();
        assert_eq!(state.active_id(), Some(PhotoId(3)));
    }

    #[test]
    fn navigation_walks_the_filtered_list_only() {
        let mut state = gallery(&[
            Category::Street,
            Category::Nature,
            Category::Street,
            Category::Portrait,
        ]);
        state.set_filter(CategoryFilter::Only(Category::Street));
        state.open(PhotoId(1));
        state.next();
        assert_eq!(state.active_id(), Some(PhotoId(3)));
        let info = state.navigation_info();
        assert!(!info.has_next);
        assert!(info.has_previous);
        assert_eq!(info.current_index, Some(1));
        assert_eq!(info.filtered_count, 2);
    }

    #[test]
    fn previous_walks_back_to_the_first_visible_photo() {
        let mut state = gallery(&[Category::Street, Category::Nature, Category::Street]);
        state.set_filter(CategoryFilter::Only(Category::Street));
        state.open(PhotoId(3));
        state.previous();
        assert_eq!(state.active_id(), Some(PhotoId(1)));
        state.previous();
        assert_eq!(state.active_id(), Some(PhotoId(1)));
        assert_eq!(state.navigation_info().current_index, Some(0));
    }

    #[test]
    fn navigation_without_active_photo_is_noop() {
        let mut state = gallery(&[Category::Street, Category::Street]);
        state.next();
        state.previous();
        assert_eq!(state.active_id(), None);
        let info = state.navigation_info();
        assert!(!info.has_next && !info.has_previous);
    }

    #[test]
    fn counts_ignore_active_filter() {
        let mut state = gallery(&[Category::Nature, Category::Street, Category::Street]);
        state.set_filter(CategoryFilter::Only(Category::Nature));
        let counts = state.filter_counts();
        assert_eq!(
            counts,
            [
                (CategoryFilter::All, 3),
                (CategoryFilter::Only(Category::Nature), 1),
                (CategoryFilter::Only(Category::Portrait), 0),
                (CategoryFilter::Only(Category::Street), 2),
            ]
        );
    }

    #[test]
    fn load_failure_does_not_affect_counts() {
        let mut state = gallery(&[Category::Nature, Category::Street]);
        state.mark_load_failed(PhotoId(2), Error::Decode("truncated".into()));
        assert!(state.has_failed(PhotoId(2)));
        assert_eq!(
            state.failure(PhotoId(2)),
            Some(&Error::Decode("truncated".into()))
        );
        assert_eq!(state.failure(PhotoId(1)), None);
        assert!(!state.has_failed(PhotoId(1)));
        assert_eq!(state.count(CategoryFilter::All), 2);
        assert_eq!(visible_ids(&state), vec![1, 2]);
    }

    #[test]
    fn unknown_load_failure_is_ignored() {
        let mut state = gallery(&[Category::Nature]);
        state.mark_load_failed(PhotoId(9), Error::Decode("gone".into()));
        assert!(!state.has_failed(PhotoId(9)));
    }

    #[test]
    fn merge_settles_each_slot_once() {
        let mut state = GalleryState::new(descriptors(&[Category::Nature, Category::Street]));
        assert!(state.is_loading_metadata());

        let second = state.photos()[1].descriptor().clone();
        let described = PhotoRecord::new(second.clone(), Equipment::Described("Z50II".into()));
        assert!(state.merge(described));
        assert!(!state.merge(PhotoRecord::new(second, Equipment::Unavailable)));
        assert_eq!(
            state.get(PhotoId(2)).and_then(PhotoSlot::equipment),
            Some(&Equipment::Described("Z50II".into()))
        );
        assert!(state.is_loading_metadata());

        let first = state.photos()[0].descriptor().clone();
        assert!(state.merge(PhotoRecord::new(first, Equipment::Unavailable)));
        assert!(!state.is_loading_metadata());
    }

    #[test]
    fn pending_photos_are_viewable() {
        let mut state = GalleryState::new(descriptors(&[Category::Portrait]));
        state.open(PhotoId(1));
        let active = state.active().map(PhotoSlot::is_pending);
        assert_eq!(active, Some(true));
    }
}
