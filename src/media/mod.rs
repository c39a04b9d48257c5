// SPDX-License-Identifier: MPL-2.0
//! Image tiers, asset sources and decoding.
//!
//! Every published photograph exists in three tiers (see [`LoadTier`]). This
//! module knows how tier files are named, where their bytes come from, and
//! how bytes become pixels. It holds no per-image state; that lives in
//! [`crate::ui::state::load_state`].

pub mod asset;
pub mod decode;
pub mod tier;

pub use asset::{
    AssetBytes, AssetSource, FsAssetSource, MemoryAssetSource, SharedAssetSource,
};
pub use decode::{CropRect, DecodedImage};
pub use tier::LoadTier;
