// SPDX-License-Identifier: MPL-2.0
//! Asset retrieval port.
//!
//! An [`AssetFetcher`] turns a locator (URL or path) into raw bytes. The
//! gallery never looks inside the locator; interpreting it is entirely the
//! adapter's job.

use futures_util::future::BoxFuture;

// =============================================================================
// FetchError
// =============================================================================

/// Errors raised while retrieving an asset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The asset does not exist at the given locator.
    #[error("asset not found: {0}")]
    NotFound(String),

    /// The remote server answered with an error status.
    #[error("HTTP {status} for {locator}")]
    Status { locator: String, status: u16 },

    /// The transport failed before a response was received.
    #[error("network error: {0}")]
    Network(String),

    /// Local I/O failed.
    #[error("I/O error: {0}")]
    Io(String),
}

// =============================================================================
// AssetFetcher Trait
// =============================================================================

/// Produces the raw bytes behind a locator.
///
/// Implementations must be cheap to share across tasks: the gallery spawns one
/// fetch per photo on the async runtime.
pub trait AssetFetcher: Send + Sync {
    /// Fetches every byte of the asset at `locator`.
    fn fetch(&self, locator: &str) -> BoxFuture<'static, Result<Vec<u8>, FetchError>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct Fixed(Vec<u8>);

    impl AssetFetcher for Fixed {
        fn fetch(&self, _locator: &str) -> BoxFuture<'static, Result<Vec<u8>, FetchError>> {
            let bytes = self.0.clone();
            Box::pin(async move { Ok(bytes) })
        }
    }

    #[test]
    fn fetcher_is_object_safe() {
        fn _accepts_dyn(_fetcher: &dyn AssetFetcher) {}
        let fetcher: Arc<dyn AssetFetcher> = Arc::new(Fixed(vec![1, 2, 3]));
        _accepts_dyn(fetcher.as_ref());
    }

    #[tokio::test]
    async fn fetch_future_outlives_the_call() {
        let fetcher: Arc<dyn AssetFetcher> = Arc::new(Fixed(vec![9]));
        let future = fetcher.fetch("/photos/x.jpg");
        drop(fetcher);
        assert_eq!(future.await, Ok(vec![9]));
    }

    #[test]
    fn status_error_mentions_locator() {
        let err = FetchError::Status {
            locator: "https://example.com/a.jpg".into(),
            status: 404,
        };
        assert_eq!(err.to_string(), "HTTP 404 for https://example.com/a.jpg");
    }
}
