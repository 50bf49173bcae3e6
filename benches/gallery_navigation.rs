// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery state operations.
//!
//! Measures the performance of:
//! - Category filtering and filter counts
//! - Viewer navigation (next/previous) within a filtered view
//! - Equipment description from parsed EXIF tags

use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::application::port::exif::tag;
use iced_folio::application::port::ExifTags;
use iced_folio::application::query::GalleryState;
use iced_folio::domain::gallery::{Category, CategoryFilter, PhotoDescriptor, PhotoId};
use iced_folio::media::{describe_equipment, normalize_camera_model};
use std::hint::black_box;

const PHOTO_COUNT: u32 = 1_000;

/// Builds a gallery cycling through every category.
fn large_gallery() -> GalleryState {
    GalleryState::new((1..=PHOTO_COUNT).map(|id| {
        let category = Category::ALL[id as usize % Category::ALL.len()];
        PhotoDescriptor::new(id, format!("/photos/{id}.jpg"), format!("Photo {id}"), category)
    }))
}

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let gallery = large_gallery();

    group.bench_function("filter_counts", |b| {
        b.iter(|| black_box(gallery.filter_counts()));
    });

    group.bench_function("set_filter_and_collect_visible", |b| {
        b.iter(|| {
            let mut gallery = gallery.clone();
            gallery.set_filter(CategoryFilter::Only(Category::Street));
            black_box(gallery.visible().count())
        });
    });

    group.finish();
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let mut gallery = large_gallery();
    gallery.set_filter(CategoryFilter::Only(Category::Nature));
    let first = gallery.visible().next().map(|slot| slot.id());

    group.bench_function("next_previous", |b| {
        b.iter(|| {
            let mut gallery = gallery.clone();
            gallery.open(first.unwrap_or(PhotoId(1)));
            for _ in 0..10 {
                gallery.next();
            }
            for _ in 0..10 {
                gallery.previous();
            }
            black_box(gallery.navigation_info())
        });
    });

    group.finish();
}

fn bench_equipment(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let tags = ExifTags::new()
        .with(tag::MODEL, "NIKON CORPORATION Z 6_2")
        .with(tag::FOCAL_LENGTH, "24 mm")
        .with(tag::F_NUMBER, "f/4")
        .with(tag::EXPOSURE_TIME, "1/60")
        .with(tag::ISO_SPEED_RATINGS, "200");

    group.bench_function("describe_equipment", |b| {
        b.iter(|| black_box(describe_equipment(black_box(&tags))));
    });

    group.bench_function("normalize_camera_model", |b| {
        b.iter(|| black_box(normalize_camera_model(black_box(Some("NIKON Z50_2")))));
    });

    group.finish();
}

criterion_group!(benches, bench_filtering, bench_navigate, bench_equipment);
criterion_main!(benches);
