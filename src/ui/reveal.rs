// SPDX-License-Identifier: MPL-2.0
//! Fade-in of elements the first time they come near the viewport.
//!
//! Elements further right start later, so a row of tiles appears as a
//! left-to-right sweep.

use crate::app::config::{REVEAL_FADE_MS, REVEAL_MAX_DELAY_MS};
use crate::ui::state::{ExpansionPolicy, FadeIn, ViewportTracker};
use iced::{Rectangle, Size};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Reveal {
    tracker: ViewportTracker,
    fade: Option<FadeIn>,
    alpha: f32,
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new()
    }
}

impl Reveal {
    pub fn new() -> Self {
        Self {
            tracker: ViewportTracker::new(ExpansionPolicy::REVEAL),
            fade: None,
            alpha: 0.0,
        }
    }

    /// Starts the fade on first entry.
    pub fn viewport_changed(&mut self, bounds: Option<Rectangle>, window: Size, now: Instant) {
        if self.tracker.recompute(bounds, window) && self.fade.is_none() {
            let fraction = self.tracker.delay_fraction(window);
            let delay = stagger_delay(fraction);
            self.fade = Some(FadeIn::delayed(
                now,
                delay,
                Duration::from_millis(REVEAL_FADE_MS),
            ));
        }
    }

    /// Returns true while the fade is running.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.fade {
            Some(fade) => {
                self.alpha = fade.opacity(now);
                !fade.is_complete(now)
            }
            None => false,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.fade.is_some() && self.alpha < 1.0
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn is_revealed(&self) -> bool {
        self.fade.is_some()
    }
}

/// Whole-millisecond delay for a position in `0.0..=1.0` across the window.
fn stagger_delay(fraction: f32) -> Duration {
    let millis = (REVEAL_MAX_DELAY_MS as f32 * fraction.clamp(0.0, 1.0)).round();
    Duration::from_millis(millis as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::Point;

    const WINDOW: Size = Size {
        width: 1000.0,
        height: 600.0,
    };

    fn at(x: f32, y: f32) -> Option<Rectangle> {
        Some(Rectangle::new(Point::new(x, y), Size::new(200.0, 100.0)))
    }

    #[test]
    fn hidden_until_near_viewport() {
        let t0 = Instant::now();
        let mut reveal = Reveal::new();
        reveal.viewport_changed(at(0.0, 900.0), WINDOW, t0);
        assert!(!reveal.is_revealed());
        assert!(!reveal.tick(t0));
        assert_abs_diff_eq!(reveal.alpha(), 0.0);
    }

    #[test]
    fn left_edge_starts_immediately() {
        let t0 = Instant::now();
        let mut reveal = Reveal::new();
        // Centre x = 0 once shifted left by half the width.
        reveal.viewport_changed(at(-100.0, 0.0), WINDOW, t0);
        assert!(reveal.is_revealed());
        assert!(reveal.tick(t0 + Duration::from_millis(REVEAL_FADE_MS / 2)));
        assert!(reveal.alpha() > 0.0);
    }

    #[test]
    fn right_edge_is_delayed() {
        let t0 = Instant::now();
        let mut reveal = Reveal::new();
        // Centre x = 1000: full delay.
        reveal.viewport_changed(at(900.0, 0.0), WINDOW, t0);
        reveal.tick(t0 + Duration::from_millis(REVEAL_MAX_DELAY_MS - 10));
        assert_abs_diff_eq!(reveal.alpha(), 0.0);

        let done = t0 + Duration::from_millis(REVEAL_MAX_DELAY_MS + REVEAL_FADE_MS);
        assert!(!reveal.tick(done));
        assert_abs_diff_eq!(reveal.alpha(), 1.0);
    }

    #[test]
    fn stagger_delay_never_exceeds_maximum() {
        assert_eq!(stagger_delay(0.0), Duration::ZERO);
        assert_eq!(stagger_delay(1.0), Duration::from_millis(REVEAL_MAX_DELAY_MS));
        assert_eq!(stagger_delay(0.5), Duration::from_millis(REVEAL_MAX_DELAY_MS / 2));
        assert_eq!(stagger_delay(3.0), Duration::from_millis(REVEAL_MAX_DELAY_MS));
    }
}
