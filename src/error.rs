// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the crate.
//!
//! Payloads are kept as strings so errors stay `Clone` and can travel inside
//! Iced messages.

use thiserror::Error;

/// Top-level error for startup and content handling.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("content error in {file}: {reason}")]
    Content { file: String, reason: String },

    #[error(transparent)]
    Asset(#[from] AssetFetchError),
}

/// Why an image tier could not be made available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetFailure {
    /// The asset source has no entry for the requested name.
    NotFound,
    /// The asset exists but reading it failed.
    Io(String),
    /// The bytes arrived but could not be decoded into pixels.
    Decode(String),
}

impl std::fmt::Display for AssetFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetFailure::NotFound => write!(f, "not found"),
            AssetFailure::Io(reason) => write!(f, "read failed: {reason}"),
            AssetFailure::Decode(reason) => write!(f, "decode failed: {reason}"),
        }
    }
}

/// Fetching or decoding a single tier of an image failed.
///
/// Never fatal: the image keeps showing the best tier it already has.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("asset {asset}: {cause}")]
pub struct AssetFetchError {
    pub asset: String,
    pub cause: AssetFailure,
}

impl AssetFetchError {
    pub fn new(asset: impl Into<String>, cause: AssetFailure) -> Self {
        Self {
            asset: asset.into(),
            cause,
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

pub type Result<T> = std::result::Result<T, Error>;
