// SPDX-License-Identifier: MPL-2.0
//! Default [`AssetFetcher`]: HTTP(S) through `reqwest`, everything else from
//! the local filesystem through `tokio::fs`.
//!
//! Locators follow web-root semantics. A locator starting with `/` is
//! resolved against the configured asset root, so `/photos/a.jpg` with root
//! `public` reads `public/photos/a.jpg`. Use a `file://` locator to address an
//! absolute filesystem path.

use crate::application::port::{AssetFetcher, FetchError};
use futures_util::future::BoxFuture;
use futures_util::StreamExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where a locator points to once classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLocator {
    Url(String),
    Path(PathBuf),
}

impl AssetLocator {
    /// Classifies `locator`, resolving relative and root-relative paths
    /// against `asset_root`.
    #[must_use]
    pub fn resolve(locator: &str, asset_root: &Path) -> Self {
        let trimmed = locator.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Self::Url(trimmed.to_string());
        }
        if let Some(path) = trimmed.strip_prefix("file://") {
            return Self::Path(PathBuf::from(path));
        }
        Self::Path(asset_root.join(trimmed.trim_start_matches('/')))
    }
}

/// Fetches assets over HTTP(S) or from disk.
///
/// Cloning is cheap; clones share the HTTP connection pool.
#[derive(Debug, Clone)]
pub struct LocatorFetcher {
    client: reqwest::Client,
    asset_root: Arc<PathBuf>,
}

impl LocatorFetcher {
    /// Builds a fetcher rooted at `asset_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized (TLS backend
    /// failure).
    pub fn new(asset_root: impl Into<PathBuf>, user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(user_agent)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self {
            client,
            asset_root: Arc::new(asset_root.into()),
        })
    }

    #[must_use]
    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }
}

impl AssetFetcher for LocatorFetcher {
    fn fetch(&self, locator: &str) -> BoxFuture<'static, Result<Vec<u8>, FetchError>> {
        let resolved = AssetLocator::resolve(locator, &self.asset_root);
        let client = self.client.clone();
        Box::pin(async move {
            match resolved {
                AssetLocator::Url(url) => fetch_url(&client, &url).await,
                AssetLocator::Path(path) => fetch_path(&path).await,
            }
        })
    }
}

async fn fetch_url(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound(url.to_string()));
    }
    if !status.is_success() {
        return Err(FetchError::Status {
            locator: url.to_string(),
            status: status.as_u16(),
        });
    }

    let mut bytes = Vec::with_capacity(
        response
            .content_length()
            .and_then(|len| usize::try_from(len).ok())
            .unwrap_or_default(),
    );
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| FetchError::Network(e.to_string()))?;
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

async fn fetch_path(path: &Path) -> Result<Vec<u8>, FetchError> {
    tokio::fs::read(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FetchError::NotFound(path.display().to_string()),
        _ => FetchError::Io(format!("{}: {e}", path.display())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn http_locators_stay_urls() {
        let root = Path::new("public");
        assert_eq!(
            AssetLocator::resolve("https://example.com/a.jpg", root),
            AssetLocator::Url("https://example.com/a.jpg".into())
        );
        assert_eq!(
            AssetLocator::resolve("http://example.com/a.jpg", root),
            AssetLocator::Url("http://example.com/a.jpg".into())
        );
    }

    #[test]
    fn root_relative_locators_resolve_against_asset_root() {
        let root = Path::new("public");
        assert_eq!(
            AssetLocator::resolve("/photos/DSC_0085.jpg", root),
            AssetLocator::Path(PathBuf::from("public/photos/DSC_0085.jpg"))
        );
        assert_eq!(
            AssetLocator::resolve("photos/a.jpg", root),
            AssetLocator::Path(PathBuf::from("public/photos/a.jpg"))
        );
    }

    #[test]
    fn file_scheme_bypasses_asset_root() {
        assert_eq!(
            AssetLocator::resolve("file:///tmp/a.jpg", Path::new("public")),
            AssetLocator::Path(PathBuf::from("/tmp/a.jpg"))
        );
    }

    #[tokio::test]
    async fn reads_files_under_asset_root() {
        let dir = tempdir().expect("failed to create temp dir");
        let photos = dir.path().join("photos");
        std::fs::create_dir_all(&photos).expect("failed to create photos dir");
        std::fs::write(photos.join("a.jpg"), [1u8, 2, 3]).expect("failed to write asset");

        let fetcher = LocatorFetcher::new(dir.path(), "test-agent").expect("client");
        let bytes = fetcher.fetch("/photos/a.jpg").await.expect("asset should load");
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempdir().expect("failed to create temp dir");
        let fetcher = LocatorFetcher::new(dir.path(), "test-agent").expect("client");
        let result = fetcher.fetch("/photos/missing.jpg").await;
        assert!(matches!(result, Err(FetchError::NotFound(_))));
    }
}
