// SPDX-License-Identifier: MPL-2.0
//! Concurrent metadata extraction for the whole catalog.
//!
//! One task is spawned per photo. Tasks are independent: they run in
//! parallel, settle in any order, and a failure in one never affects another.
//! The stream ends once every task has settled, which is the signal that
//! metadata loading is complete.
//!
//! The gallery uses [`Extractor::load`], which fetches each photo once and
//! feeds the same bytes to the EXIF parser and to the tile decoder. The two
//! outcomes are reported separately: a photo can have equipment and no tile,
//! or the other way around.

use super::equipment::{equipment_from_bytes, extract_equipment};
use super::tile::decode_tile_blocking;
use crate::application::port::{AssetFetcher, ExifParser, FetchError};
use crate::domain::gallery::{Equipment, PhotoDescriptor, PhotoId, PhotoRecord, TilePixels};
use crate::error::Error;
use futures_util::stream::{self, FuturesUnordered};
use futures_util::{Stream, StreamExt};
use std::collections::HashMap;
use std::sync::Arc;

/// One outcome of a gallery load.
#[derive(Debug, Clone)]
pub enum LoadEvent {
    /// Equipment of the photo is settled.
    Record(PhotoRecord),
    /// Pixels of the photo were decoded, or could not be.
    Tile {
        id: PhotoId,
        result: Result<TilePixels, Error>,
    },
}

/// Adapters shared by every extraction task.
#[derive(Clone)]
pub struct Extractor {
    fetcher: Arc<dyn AssetFetcher>,
    parser: Arc<dyn ExifParser>,
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor").finish_non_exhaustive()
    }
}

impl Extractor {
    #[must_use]
    pub fn new(fetcher: Arc<dyn AssetFetcher>, parser: Arc<dyn ExifParser>) -> Self {
        Self { fetcher, parser }
    }

    /// Spawns one extraction per descriptor and yields records as they settle.
    ///
    /// Tasks are spawned on the first poll, so the stream can be built outside
    /// of a Tokio runtime and handed to one later.
    pub fn stream(
        &self,
        descriptors: Vec<PhotoDescriptor>,
    ) -> impl Stream<Item = PhotoRecord> + Send + 'static {
        let extractor = self.clone();
        stream::once(async move { extractor.spawn_all(descriptors) }).flatten()
    }

    fn spawn_all(
        &self,
        descriptors: Vec<PhotoDescriptor>,
    ) -> FuturesUnordered<impl std::future::Future<Output = PhotoRecord> + Send + 'static> {
        tracing::info!(count = descriptors.len(), "starting metadata extraction");
        descriptors
            .into_iter()
            .map(|descriptor| {
                let fetcher = Arc::clone(&self.fetcher);
                let parser = Arc::clone(&self.parser);
                let fallback = descriptor.clone();
                let handle = tokio::spawn(async move {
                    let equipment =
                        extract_equipment(fetcher.as_ref(), parser.as_ref(), &descriptor.source)
                            .await;
                    PhotoRecord::new(descriptor, equipment)
                });
                async move {
                    handle.await.unwrap_or_else(|err| {
                        tracing::warn!(id = %fallback.id, error = %err, "extraction task aborted");
                        PhotoRecord::new(fallback, Equipment::Unavailable)
                    })
                }
            })
            .collect()
    }

    /// Fetches every photo once and yields its record, then its tile.
    ///
    /// Each photo produces exactly one [`LoadEvent::Record`] followed by one
    /// [`LoadEvent::Tile`]. Like [`stream`](Self::stream), tasks are spawned
    /// on the first poll.
    pub fn load(
        &self,
        descriptors: Vec<PhotoDescriptor>,
    ) -> impl Stream<Item = LoadEvent> + Send + 'static {
        let extractor = self.clone();
        stream::once(async move {
            tracing::info!(count = descriptors.len(), "starting photo load");
            stream::select_all(
                descriptors
                    .into_iter()
                    .map(|descriptor| extractor.load_one(descriptor).boxed()),
            )
        })
        .flatten()
    }

    fn load_one(
        &self,
        descriptor: PhotoDescriptor,
    ) -> impl Stream<Item = LoadEvent> + Send + 'static {
        let fetcher = Arc::clone(&self.fetcher);
        let parser = Arc::clone(&self.parser);
        let fallback = descriptor.clone();
        let handle = tokio::spawn(async move {
            let fetched = fetcher.fetch(&descriptor.source).await;
            let equipment = match &fetched {
                Ok(bytes) => equipment_from_bytes(parser.as_ref(), &descriptor.source, bytes),
                Err(err) => {
                    tracing::warn!(
                        locator = %descriptor.source,
                        error = %err,
                        "asset fetch failed, equipment unavailable"
                    );
                    Equipment::Unavailable
                }
            };
            (PhotoRecord::new(descriptor, equipment), fetched)
        });

        stream::once(async move {
            handle.await.unwrap_or_else(|err| {
                tracing::warn!(id = %fallback.id, error = %err, "load task aborted");
                let reason = FetchError::Network(err.to_string());
                (PhotoRecord::new(fallback, Equipment::Unavailable), Err(reason))
            })
        })
        .flat_map(|(record, fetched)| {
            let id = record.id();
            let tile = async move {
                let result = match fetched {
                    Ok(bytes) => decode_tile_blocking(bytes).await,
                    Err(err) => Err(Error::from(err)),
                };
                LoadEvent::Tile { id, result }
            };
            stream::iter([LoadEvent::Record(record)]).chain(stream::once(tile))
        })
    }

    /// Runs every extraction to completion and returns the records in
    /// descriptor order.
    pub async fn extract_all(&self, descriptors: Vec<PhotoDescriptor>) -> Vec<PhotoRecord> {
        let order: HashMap<_, _> = descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| (descriptor.id, index))
            .collect();
        let mut records: Vec<PhotoRecord> = self.stream(descriptors).collect().await;
        records.sort_by_key(|record| order.get(&record.id()).copied().unwrap_or(usize::MAX));
        tracing::info!(count = records.len(), "metadata extraction settled");
        records
    }
}
