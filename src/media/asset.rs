// SPDX-License-Identifier: MPL-2.0
//! Asset sources that resolve tier file names to encoded bytes.
//!
//! [`AssetSource`] is the seam between the loader and wherever image files
//! actually live. [`FsAssetSource`] reads the content directory;
//! [`MemoryAssetSource`] serves bytes registered up front and is used by
//! tests.

use crate::error::{AssetFailure, AssetFetchError};
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Encoded image bytes of one tier. Cheap to clone.
#[derive(Clone, PartialEq, Eq)]
pub struct AssetBytes(Arc<[u8]>);

impl AssetBytes {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for AssetBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into())
    }
}

impl fmt::Debug for AssetBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetBytes({} bytes)", self.0.len())
    }
}

/// Resolves an asset name such as `a1.medium.jpg` to its bytes.
///
/// Implementations are blocking; callers run them through [`fetch`].
pub trait AssetSource: Send + Sync + fmt::Debug {
    fn fetch(&self, name: &str) -> Result<AssetBytes, AssetFetchError>;
}

pub type SharedAssetSource = Arc<dyn AssetSource>;

/// Reads assets from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for FsAssetSource {
    fn fetch(&self, name: &str) -> Result<AssetBytes, AssetFetchError> {
        // Names come from content files; refuse anything that could escape the root.
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with("..") {
            return Err(AssetFetchError::new(name, AssetFailure::NotFound));
        }

        std::fs::read(self.root.join(name))
            .map(AssetBytes::from)
            .map_err(|err| {
                let cause = match err.kind() {
                    io::ErrorKind::NotFound => AssetFailure::NotFound,
                    _ => AssetFailure::Io(err.to_string()),
                };
                AssetFetchError::new(name, cause)
            })
    }
}

/// In-memory asset table.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    assets: HashMap<String, AssetBytes>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<AssetBytes>) {
        self.assets.insert(name.into(), bytes.into());
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, bytes: impl Into<AssetBytes>) -> Self {
        self.insert(name, bytes);
        self
    }
}

impl AssetSource for MemoryAssetSource {
    fn fetch(&self, name: &str) -> Result<AssetBytes, AssetFetchError> {
        self.assets
            .get(name)
            .cloned()
            .ok_or_else(|| AssetFetchError::new(name, AssetFailure::NotFound))
    }
}

/// Fetches `name` on the blocking pool.
pub async fn fetch(source: SharedAssetSource, name: String) -> Result<AssetBytes, AssetFetchError> {
    let task_name = name.clone();
    tokio::task::spawn_blocking(move || source.fetch(&task_name))
        .await
        .unwrap_or_else(|e| {
            Err(AssetFetchError::new(
                name,
                AssetFailure::Io(format!("fetch task failed: {e}")),
            ))
        })
}
