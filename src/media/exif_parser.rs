// SPDX-License-Identifier: MPL-2.0
//! [`ExifParser`] adapter backed by `kamadak-exif`.
//!
//! Supports every container `kamadak-exif` can read (JPEG, TIFF, HEIF, PNG,
//! WebP). Only primary-image tags are reported; thumbnail tags are skipped.

use crate::application::port::exif::tag;
use crate::application::port::{ExifError, ExifParser, ExifTags};
use std::io::Cursor;

/// Reads EXIF tags with `kamadak-exif`, naming them as the EXIF standard does.
#[derive(Debug, Clone, Copy, Default)]
pub struct KamadakExifParser;

impl KamadakExifParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ExifParser for KamadakExifParser {
    fn parse(&self, bytes: &[u8]) -> Result<ExifTags, ExifError> {
        let exif = exif::Reader::new()
            .read_from_container(&mut Cursor::new(bytes))
            .map_err(|err| match err {
                exif::Error::NotFound(_) => ExifError::NotFound,
                other => ExifError::Malformed(other.to_string()),
            })?;

        let mut tags = ExifTags::new();
        for field in exif.fields().filter(|f| f.ifd_num == exif::In::PRIMARY) {
            let description = describe(field, &exif);
            if field.tag == exif::Tag::PhotographicSensitivity {
                // EXIF 2.3 renamed ISOSpeedRatings; report both names.
                tags.insert(tag::ISO_SPEED_RATINGS, description.clone());
            }
            tags.insert(field.tag.to_string(), description);
        }
        Ok(tags)
    }
}

fn describe(field: &exif::Field, exif: &exif::Exif) -> String {
    // "f/3.5" and "50 mm"; exposure time stays bare so callers can add "s".
    if field.tag == exif::Tag::FNumber || field.tag == exif::Tag::FocalLength {
        return field.display_value().with_unit(exif).to_string();
    }
    match &field.value {
        exif::Value::Ascii(components) => join_ascii(components),
        _ => field.display_value().to_string().trim().to_string(),
    }
}

/// Joins the non-empty components of an ASCII value with spaces, dropping
/// NUL padding.
fn join_ascii(components: &[Vec<u8>]) -> String {
    components
        .iter()
        .map(|component| String::from_utf8_lossy(component))
        .map(|text| text.trim_matches(|c: char| c == '\0' || c.is_whitespace()).to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}


#[cfg(test)]
mod tests {
    use super::fixtures::{tiff_bytes, Capture};
    use super::*;

    #[test]
    fn reads_camera_and_exposure_tags() {
        let bytes = tiff_bytes(&Capture {
            model: Some("NIKON Z50_2"),
            focal_length: Some((50, 1)),
            f_number: Some((35, 10)),
            exposure: Some((1, 200)),
            iso: Some(200),
            ..Capture::default()
        });
        let tags = KamadakExifParser::new()
            .parse(&bytes)
            .expect("fixture should parse");

        assert_eq!(tags.get(tag::MODEL), Some("NIKON Z50_2"));
        assert_eq!(tags.get(tag::FOCAL_LENGTH), Some("50 mm"));
        assert_eq!(tags.get(tag::F_NUMBER), Some("f/3.5"));
        assert_eq!(tags.get(tag::EXPOSURE_TIME), Some("1/200"));
        assert_eq!(tags.get(tag::ISO_SPEED_RATINGS), Some("200"));
    }

    #[test]
    fn missing_tags_are_absent() {
        let bytes = tiff_bytes(&Capture {
            f_number: Some((28, 10)),
            ..Capture::default()
        });
        let tags = KamadakExifParser::new()
            .parse(&bytes)
            .expect("fixture should parse");
        assert_eq!(tags.get(tag::MODEL), None);
        assert_eq!(tags.get(tag::ISO_SPEED_RATINGS), None);
        assert_eq!(tags.get(tag::F_NUMBER), Some("f/2.8"));
    }

    #[test]
    fn multi_component_model_has_no_quotes() {
        let bytes = tiff_bytes(&Capture {
            model_parts: &["NIKON", "Z50_2"],
            ..Capture::default()
        });
        let tags = KamadakExifParser::new()
            .parse(&bytes)
            .expect("fixture should parse");
        assert_eq!(tags.get(tag::MODEL), Some("NIKON Z50_2"));
    }

    #[test]
    fn ascii_components_are_trimmed_and_joined() {
        let components = vec![b"Canon\0".to_vec(), Vec::new(), b" EOS R6 ".to_vec()];
        assert_eq!(join_ascii(&components), "Canon EOS R6");
    }

    #[test]
    fn non_image_bytes_are_rejected() {
        let result = KamadakExifParser::new().parse(b"definitely not an image");
        assert!(result.is_err());
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(KamadakExifParser::new().parse(&[]).is_err());
    }
}
