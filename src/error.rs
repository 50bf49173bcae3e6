// SPDX-License-Identifier: MPL-2.0
use crate::application::port::FetchError;

/// Crate-wide error type.
///
/// Every variant is `Clone` so errors can travel inside UI messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Fetch Error: {0}")]
    Fetch(#[from] FetchError),

    /// Bytes were retrieved but are not a decodable image.
    #[error("Decode Error: {0}")]
    Decode(String),
}

impl Error {
    /// Localization key describing this error category, shown on failed tiles.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Fetch(_) => "error-fetch",
            Error::Decode(_) => "error-decode",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
