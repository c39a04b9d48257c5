// SPDX-License-Identifier: MPL-2.0
//! Slideshow carousel state machine.
//!
//! The carousel cycles through `len` slides. Auto-advance happens on poll
//! ticks, but only after the dwell time has elapsed and only when both the
//! current and the next slide have their Medium tier on screen, so the
//! slideshow never moves to a slide that would show just a blurry preview.
//! Manual navigation is immediate and wraps in both directions.

use crate::app::config::{AUTO_TRANSITION_MS, MANUAL_TRANSITION_MS};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Carousel {
    index: usize,
    previous: Option<usize>,
    len: usize,
    auto_advance: bool,
    manual: bool,
    last_change: Instant,
    pause: Duration,
    medium_ready: Vec<bool>,
}

impl Carousel {
    #[must_use]
    pub fn new(len: usize, auto_advance: bool, pause: Duration, now: Instant) -> Self {
        Self {
            index: 0,
            previous: None,
            len,
            auto_advance,
            manual: false,
            last_change: now,
            pause,
            medium_ready: vec![false; len],
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Slide shown before the last change, while the transition runs.
    pub fn previous_index(&self) -> Option<usize> {
        self.previous
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_manual(&self) -> bool {
        self.manual
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    /// Records that slide `slide` has its Medium tier displayed.
    pub fn mark_medium_ready(&mut self, slide: usize) {
        if let Some(ready) = self.medium_ready.get_mut(slide) {
            *ready = true;
        }
    }

    pub fn is_medium_ready(&self, slide: usize) -> bool {
        self.medium_ready.get(slide).copied().unwrap_or(false)
    }

    fn successor(&self) -> usize {
        (self.index + 1) % self.len
    }

    /// Poll tick. Returns true if the carousel advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.len == 0 || !self.auto_advance {
            return false;
        }
        let dwell = now.saturating_duration_since(self.last_change);
        let next = self.successor();
        if dwell <= self.pause || !self.is_medium_ready(self.index) || !self.is_medium_ready(next)
        {
            return false;
        }

        tracing::debug!(from = self.index, to = next, "slideshow auto-advance");
        self.go_to(next, now, false);
        true
    }

    /// Moves to the next slide, wrapping at the end.
    pub fn next(&mut self, now: Instant) -> bool {
        if self.len == 0 {
            return false;
        }
        self.go_to(self.successor(), now, true);
        true
    }

    /// Moves to the previous slide, wrapping at the start.
    pub fn previous(&mut self, now: Instant) -> bool {
        if self.len == 0 {
            return false;
        }
        let target = (self.index + self.len - 1) % self.len;
        self.go_to(target, now, true);
        true
    }

    fn go_to(&mut self, target: usize, now: Instant, manual: bool) {
        self.previous = (target != self.index).then_some(self.index);
        self.index = target;
        self.manual = manual;
        self.last_change = now;
    }

    /// Length of the transition into the current slide.
    pub fn transition_duration(&self) -> Duration {
        if self.manual {
            Duration::from_millis(MANUAL_TRANSITION_MS)
        } else {
            Duration::from_millis(AUTO_TRANSITION_MS)
        }
    }

    /// Progress of the current transition in `[0, 1]`.
    pub fn transition_progress(&self, now: Instant) -> f32 {
        if self.previous.is_none() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.last_change).as_secs_f32();
        (elapsed / self.transition_duration().as_secs_f32()).min(1.0)
    }

    pub fn is_transitioning(&self, now: Instant) -> bool {
        self.transition_progress(now) < 1.0
    }
}
