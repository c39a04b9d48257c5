// SPDX-License-Identifier: MPL-2.0
//! Linear fade-in driven by explicit timestamps.
//!
//! Fades never read the clock themselves; callers pass `now`, which keeps
//! them deterministic under test.

use crate::ui::design_tokens::opacity;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeIn {
    start: Instant,
    duration: Duration,
}

impl FadeIn {
    /// Fade that begins at `start` and reaches full opacity after `duration`.
    #[must_use]
    pub fn starting_at(start: Instant, duration: Duration) -> Self {
        Self { start, duration }
    }

    /// Fade that begins after `delay`.
    #[must_use]
    pub fn delayed(now: Instant, delay: Duration, duration: Duration) -> Self {
        Self::starting_at(now + delay, duration)
    }

    /// Opacity in `[0, 1]` at `now`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let Some(elapsed) = now.checked_duration_since(self.start) else {
            return opacity::TRANSPARENT;
        };
        if self.duration.is_zero() {
            return opacity::OPAQUE;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(opacity::OPAQUE)
    }

    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        now.checked_duration_since(self.start)
            .is_some_and(|elapsed| elapsed >= self.duration)
    }
}
