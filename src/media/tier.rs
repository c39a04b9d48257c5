// SPDX-License-Identifier: MPL-2.0
//! Resolution tiers of a published image.

use std::fmt;

/// Resolution tier, ordered from smallest to largest.
///
/// Tiers always load in this order for a given image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoadTier {
    /// Tiny, blurred placeholder (~128 px).
    Preview,
    /// Gallery-sized rendition (~640 px).
    Medium,
    /// Full-screen rendition (~1920 px).
    Large,
}

impl LoadTier {
    pub const ALL: [LoadTier; 3] = [LoadTier::Preview, LoadTier::Medium, LoadTier::Large];

    /// Tag used in asset file names.
    pub fn tag(self) -> &'static str {
        match self {
            LoadTier::Preview => "preview",
            LoadTier::Medium => "medium",
            LoadTier::Large => "large",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Asset name of this tier: `{file_id}.{tier}.{extension}`.
    pub fn asset_name(self, file_id: &str, extension: &str) -> String {
        format!("{file_id}.{}.{extension}", self.tag())
    }
}

impl fmt::Display for LoadTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
