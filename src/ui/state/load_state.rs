// SPDX-License-Identifier: MPL-2.0
//! Per-instance progressive loading state.
//!
//! [`LoadState`] holds the fetched bytes of each tier; slots only ever go
//! from empty to filled. [`TieredLoader`] decides which tier to request next:
//! Preview, then Medium, then Large only when the rendered width exceeds the
//! Medium threshold. At most one request is outstanding per instance, so
//! tiers fill strictly in order.

use crate::error::AssetFetchError;
use crate::media::{AssetBytes, LoadTier};

/// Fetched bytes per tier.
#[derive(Debug, Clone, Default)]
pub struct LoadState {
    slots: [Option<AssetBytes>; 3],
}

impl LoadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tier: LoadTier) -> Option<&AssetBytes> {
        self.slots[tier.index()].as_ref()
    }

    pub fn is_filled(&self, tier: LoadTier) -> bool {
        self.slots[tier.index()].is_some()
    }

    /// Stores `bytes` for `tier`. An already filled slot is left untouched
    /// and `false` is returned.
    pub fn fill(&mut self, tier: LoadTier, bytes: AssetBytes) -> bool {
        let slot = &mut self.slots[tier.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(bytes);
        true
    }

    pub fn highest_filled(&self) -> Option<LoadTier> {
        LoadTier::ALL
            .into_iter()
            .rev()
            .find(|tier| self.is_filled(*tier))
    }

    pub fn filled_tiers(&self) -> impl Iterator<Item = LoadTier> + '_ {
        LoadTier::ALL.into_iter().filter(|tier| self.is_filled(*tier))
    }
}

/// Outcome of delivering a fetch result to the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The slot was filled; the loader may have a next tier to request.
    Filled,
    /// The fetch failed; nothing more is requested until [`TieredLoader::retry`].
    Failed,
    /// The result did not match the outstanding request and was dropped.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct TieredLoader {
    state: LoadState,
    in_flight: Option<LoadTier>,
    failed: Option<LoadTier>,
}

impl TieredLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn in_flight(&self) -> Option<LoadTier> {
        self.in_flight
    }

    pub fn failed(&self) -> Option<LoadTier> {
        self.failed
    }

    /// The tier this instance still needs, ignoring outstanding requests.
    pub fn wanted_tier(&self, rendered_width: f32, max_medium_size: f32) -> Option<LoadTier> {
        if !self.state.is_filled(LoadTier::Preview) {
            Some(LoadTier::Preview)
        } else if !self.state.is_filled(LoadTier::Medium) {
            Some(LoadTier::Medium)
        } else if rendered_width > max_medium_size && !self.state.is_filled(LoadTier::Large) {
            Some(LoadTier::Large)
        } else {
            None
        }
    }

    /// Runs one recomputation pass. Returns the tier to fetch now, marking
    /// it outstanding, or `None` when nothing should be requested.
    pub fn advance(
        &mut self,
        in_viewport: bool,
        rendered_width: f32,
        max_medium_size: f32,
    ) -> Option<LoadTier> {
        if !in_viewport || self.in_flight.is_some() || self.failed.is_some() {
            return None;
        }
        let tier = self.wanted_tier(rendered_width, max_medium_size)?;
        self.in_flight = Some(tier);
        tracing::debug!(%tier, "requesting tier");
        Some(tier)
    }

    /// Delivers the result of the fetch for `tier`.
    pub fn complete(
        &mut self,
        tier: LoadTier,
        result: Result<AssetBytes, AssetFetchError>,
    ) -> Completion {
        if self.in_flight != Some(tier) {
            tracing::debug!(%tier, "dropping result without matching request");
            return Completion::Ignored;
        }
        self.in_flight = None;

        match result {
            Ok(bytes) => {
                if self.state.fill(tier, bytes) {
                    Completion::Filled
                } else {
                    Completion::Ignored
                }
            }
            Err(err) => {
                tracing::warn!(%tier, error = %err, "failed to fetch image tier");
                self.failed = Some(tier);
                Completion::Failed
            }
        }
    }

    /// Allows a failed tier to be requested again on the next pass.
    pub fn retry(&mut self) {
        if let Some(tier) = self.failed.take() {
            tracing::debug!(%tier, "retrying failed tier");
        }
    }
}
