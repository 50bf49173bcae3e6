// SPDX-License-Identifier: MPL-2.0
//! Equipment description: turns EXIF tags into a one-line capture summary.
//!
//! The summary lists, space separated and always in this order:
//!
//! 1. the normalized camera model (`"Unknown Camera"` when absent)
//! 2. focal length, as reported (`"50 mm"`)
//! 3. aperture, as reported (`"f/3.5"`)
//! 4. exposure time followed by `s` (`"1/200s"`)
//! 5. `ISO ` followed by the sensitivity (`"ISO 200"`)
//!
//! Terms 2 to 5 are omitted when their tag is missing.

use crate::application::port::exif::tag;
use crate::application::port::{AssetFetcher, ExifParser, ExifTags};
use crate::domain::gallery::Equipment;

/// Shown when the Model tag is missing or normalizes to nothing.
pub const UNKNOWN_CAMERA: &str = "Unknown Camera";

/// Manufacturer prefixes removed from the Model tag. Longest first.
const MANUFACTURER_PREFIXES: &[&str] = &["NIKON CORPORATION ", "NIKON ", "Canon "];

/// Internal model identifiers written by camera firmware, and their
/// marketing names.
const MODEL_ALIASES: &[(&str, &str)] = &[
    ("Z50_2", "Z50II"),
    ("Z 6_2", "Z 6II"),
    ("Z 7_2", "Z 7II"),
    ("Z 6_3", "Z 6III"),
];

/// Normalizes a raw Model tag into a display name.
///
/// Idempotent: normalizing an already normalized name returns it unchanged.
///
/// # Examples
///
/// ```
/// use iced_folio::media::equipment::normalize_camera_model;
///
/// assert_eq!(normalize_camera_model(Some("NIKON Z50_2")), "Z50II");
/// assert_eq!(normalize_camera_model(None), "Unknown Camera");
/// ```
#[must_use]
pub fn normalize_camera_model(model: Option<&str>) -> String {
    let mut name = model.unwrap_or_default().trim_start();
    while let Some(rest) = MANUFACTURER_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
    {
        name = rest.trim_start();
    }

    let mut name = name.to_string();
    for (internal, marketing) in MODEL_ALIASES {
        if name.contains(internal) {
            name = name.replace(internal, marketing);
        }
    }

    let name = name.trim();
    if name.is_empty() {
        UNKNOWN_CAMERA.to_string()
    } else {
        name.to_string()
    }
}

/// Builds the capture summary from parsed tags.
#[must_use]
pub fn describe_equipment(tags: &ExifTags) -> String {
    let mut terms = vec![normalize_camera_model(tags.get(tag::MODEL))];
    if let Some(focal) = tags.get(tag::FOCAL_LENGTH) {
        terms.push(focal.to_string());
    }
    if let Some(aperture) = tags.get(tag::F_NUMBER) {
        terms.push(aperture.to_string());
    }
    if let Some(exposure) = tags.get(tag::EXPOSURE_TIME) {
        terms.push(format!("{exposure}s"));
    }
    if let Some(iso) = tags.first_of(&[tag::ISO_SPEED_RATINGS, tag::ISO]) {
        terms.push(format!("ISO {iso}"));
    }
    terms.join(" ")
}

/// Fetches the asset at `locator` and describes its capture equipment.
///
/// Never fails: any fetch or parse error is logged and reported as
/// [`Equipment::Unavailable`].
pub async fn extract_equipment(
    fetcher: &dyn AssetFetcher,
    parser: &dyn ExifParser,
    locator: &str,
) -> Equipment {
    match fetcher.fetch(locator).await {
        Ok(bytes) => equipment_from_bytes(parser, locator, &bytes),
        Err(err) => {
            tracing::warn!(locator, error = %err, "asset fetch failed, equipment unavailable");
            Equipment::Unavailable
        }
    }
}

/// Describes the capture equipment of already fetched bytes.
///
/// A parse error is logged and reported as [`Equipment::Unavailable`].
pub fn equipment_from_bytes(parser: &dyn ExifParser, locator: &str, bytes: &[u8]) -> Equipment {
    match parser.parse(bytes) {
        Ok(tags) => {
            let description = describe_equipment(&tags);
            tracing::debug!(locator, %description, "equipment extracted");
            Equipment::Described(description)
        }
        Err(err) => {
            tracing::warn!(locator, error = %err, "EXIF parse failed, equipment unavailable");
            Equipment::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{ExifError, FetchError};
    use futures_util::future::BoxFuture;

    fn tags(pairs: &[(&str, &str)]) -> ExifTags {
        pairs.iter().copied().collect()
    }

    #[test]
    fn full_tag_set_is_formatted_in_fixed_order() {
        let tags = tags(&[
            (tag::ISO_SPEED_RATINGS, "200"),
            (tag::EXPOSURE_TIME, "1/200"),
            (tag::F_NUMBER, "f/3.5"),
            (tag::FOCAL_LENGTH, "50 mm"),
            (tag::MODEL, "NIKON Z50_2"),
        ]);
        assert_eq!(describe_equipment(&tags), "Z50II 50 mm f/3.5 1/200s ISO 200");
    }

    #[test]
    fn missing_model_reads_unknown_camera() {
        let tags = tags(&[(tag::F_NUMBER, "f/3.5"), (tag::EXPOSURE_TIME, "1/200")]);
        assert_eq!(describe_equipment(&tags), "Unknown Camera f/3.5 1/200s");
    }

    #[test]
    fn empty_tag_map_reads_unknown_camera_only() {
        assert_eq!(describe_equipment(&ExifTags::new()), "Unknown Camera");
    }

    #[test]
    fn empty_values_are_omitted() {
        let tags = tags(&[(tag::MODEL, "Canon EOS R6"), (tag::FOCAL_LENGTH, "  ")]);
        assert_eq!(describe_equipment(&tags), "EOS R6");
    }

    #[test]
    fn iso_falls_back_to_iso_tag() {
        let tags = tags(&[(tag::ISO, "800")]);
        assert_eq!(describe_equipment(&tags), "Unknown Camera ISO 800");

        let both = tags_with_both_iso();
        assert_eq!(describe_equipment(&both), "Unknown Camera ISO 100");
    }

    fn tags_with_both_iso() -> ExifTags {
        tags(&[(tag::ISO_SPEED_RATINGS, "100"), (tag::ISO, "6400")])
    }

    #[test]
    fn normalization_strips_prefixes_and_aliases() {
        assert_eq!(normalize_camera_model(Some("NIKON Z50_2")), "Z50II");
        assert_eq!(normalize_camera_model(Some("NIKON CORPORATION NIKON Z 6_2")), "Z 6II");
        assert_eq!(normalize_camera_model(Some("  iPhone 13 Pro ")), "iPhone 13 Pro");
        assert_eq!(normalize_camera_model(Some("NIKON ")), UNKNOWN_CAMERA);
        assert_eq!(normalize_camera_model(Some("")), UNKNOWN_CAMERA);
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in [
            "NIKON Z50_2",
            "NIKON CORPORATION NIKON D750",
            "Canon EOS 5D",
            "iPhone 13 Pro",
            "",
            "Z 7_2",
        ] {
            let once = normalize_camera_model(Some(raw));
            assert_eq!(normalize_camera_model(Some(&once)), once, "raw = {raw:?}");
        }
    }

    struct FailingFetcher;

    impl AssetFetcher for FailingFetcher {
        fn fetch(&self, locator: &str) -> BoxFuture<'static, Result<Vec<u8>, FetchError>> {
            let locator = locator.to_string();
            Box::pin(async move { Err(FetchError::NotFound(locator)) })
        }
    }

    struct BytesFetcher;

    impl AssetFetcher for BytesFetcher {
        fn fetch(&self, _locator: &str) -> BoxFuture<'static, Result<Vec<u8>, FetchError>> {
            Box::pin(async { Ok(vec![0xFF, 0xD8]) })
        }
    }

    struct RejectingParser;

    impl ExifParser for RejectingParser {
        fn parse(&self, _bytes: &[u8]) -> Result<ExifTags, ExifError> {
            Err(ExifError::NotFound)
        }
    }

    struct ModelParser;

    impl ExifParser for ModelParser {
        fn parse(&self, _bytes: &[u8]) -> Result<ExifTags, ExifError> {
            Ok(ExifTags::new().with(tag::MODEL, "NIKON Z50_2"))
        }
    }

    #[tokio::test]
    async fn fetch_failure_yields_sentinel() {
        let equipment = extract_equipment(&FailingFetcher, &ModelParser, "/missing.jpg").await;
        assert_eq!(equipment, Equipment::Unavailable);
        assert_eq!(equipment.to_string(), "Equipment information not available");
    }

    #[tokio::test]
    async fn parse_failure_yields_sentinel() {
        let equipment = extract_equipment(&BytesFetcher, &RejectingParser, "/a.jpg").await;
        assert_eq!(equipment, Equipment::Unavailable);
    }

    #[tokio::test]
    async fn parsed_tags_are_described() {
        let equipment = extract_equipment(&BytesFetcher, &ModelParser, "/a.jpg").await;
        assert_eq!(equipment, Equipment::Described("Z50II".into()));
    }

    #[test]
    fn equipment_from_bytes_reads_without_fetching() {
        assert_eq!(
            equipment_from_bytes(&ModelParser, "/a.jpg", &[]),
            Equipment::Described("Z50II".into())
        );
        assert_eq!(
            equipment_from_bytes(&RejectingParser, "/a.jpg", &[]),
            Equipment::Unavailable
        );
    }
}
