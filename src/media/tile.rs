// SPDX-License-Identifier: MPL-2.0
//! Photo decoding for gallery tiles and the viewer.

use crate::domain::gallery::TilePixels;
use crate::error::{Error, Result};

/// Longest edge kept after decoding. Larger photos are downscaled.
pub const MAX_DIMENSION: u32 = 2560;

/// Decodes encoded image bytes into RGBA pixels, downscaling oversized photos.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a supported image.
pub fn decode_tile(bytes: &[u8]) -> Result<TilePixels> {
    let image = image_rs::load_from_memory(bytes)?;
    let image = if image.width() > MAX_DIMENSION || image.height() > MAX_DIMENSION {
        image.thumbnail(MAX_DIMENSION, MAX_DIMENSION)
    } else {
        image
    };
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    TilePixels::from_rgba(width, height, rgba.into_raw())
        .ok_or_else(|| Error::Decode("pixel buffer size mismatch".into()))
}

/// Decodes `bytes` on the blocking pool so the async workers stay responsive.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a decodable image or the
/// blocking task was aborted.
pub async fn decode_tile_blocking(bytes: Vec<u8>) -> Result<TilePixels> {
    tokio::task::spawn_blocking(move || decode_tile(&bytes))
        .await
        .map_err(|e| Error::Decode(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([200, 10, 10, 255]));
        let mut buf = Cursor::new(Vec::new());
        image
            .write_to(&mut buf, ImageFormat::Png)
            .expect("failed to encode png");
        buf.into_inner()
    }

    #[test]
    fn decodes_png_into_rgba() {
        let tile = decode_tile(&png_bytes(4, 3)).expect("png should decode");
        assert_eq!((tile.width(), tile.height()), (4, 3));
        assert_eq!(&tile.rgba()[..4], &[200, 10, 10, 255]);
    }

    #[test]
    fn oversized_images_are_downscaled() {
        let tile = decode_tile(&png_bytes(MAX_DIMENSION * 2, 2)).expect("png should decode");
        assert!(tile.width() <= MAX_DIMENSION);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(decode_tile(b"not an image"), Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn blocking_decode_matches_inline_decode() {
        let tile = decode_tile_blocking(png_bytes(2, 2)).await.expect("tile");
        assert_eq!(tile.rgba().len(), 16);
        assert_eq!(Ok(tile), decode_tile(&png_bytes(2, 2)));
    }

    #[tokio::test]
    async fn blocking_decode_reports_garbage() {
        let result = decode_tile_blocking(b"GIF89a".to_vec()).await;
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}
