// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Loading**: Viewport margins and the Large-tier size threshold
//! - **Slideshow**: Poll interval, dwell time and transition lengths
//! - **Animation**: Tier cross-fade and reveal timings
//! - **Footer**: Copy indicator duration

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Extra margin (px) added around the viewport when deciding to start loading.
pub const DEFAULT_LOAD_MARGIN_PX: f32 = 100.0;

/// Minimum load margin (px).
pub const MIN_LOAD_MARGIN_PX: f32 = 0.0;

/// Maximum load margin (px).
pub const MAX_LOAD_MARGIN_PX: f32 = 2000.0;

/// Element extents of padding added on each side of the viewport for loading.
pub const LOAD_SIZE_FACTOR: f32 = 2.0;

/// Element extents of padding added on each side of the viewport for reveals.
pub const REVEAL_SIZE_FACTOR: f32 = 1.0;

/// Rendered width (px) above which the Large tier is requested.
pub const DEFAULT_MAX_MEDIUM_SIZE_PX: f32 = 300.0;

/// Minimum Large-tier threshold (px).
pub const MIN_MAX_MEDIUM_SIZE_PX: f32 = 1.0;

/// Maximum Large-tier threshold (px).
pub const MAX_MAX_MEDIUM_SIZE_PX: f32 = 4096.0;

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Interval between auto-advance checks (ms).
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Minimum poll interval (ms).
pub const MIN_POLL_INTERVAL_MS: u64 = 50;

/// Maximum poll interval (ms).
pub const MAX_POLL_INTERVAL_MS: u64 = 10_000;

/// Dwell time on a slide before auto-advancing (ms).
pub const DEFAULT_PAUSE_MS: u64 = 5000;

/// Minimum dwell time (ms).
pub const MIN_PAUSE_MS: u64 = 500;

/// Maximum dwell time (ms).
pub const MAX_PAUSE_MS: u64 = 120_000;

/// Transition length after a manual previous/next (ms).
pub const MANUAL_TRANSITION_MS: u64 = 200;

/// Transition length after an automatic advance (ms).
pub const AUTO_TRANSITION_MS: u64 = 1000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Cross-fade length of each image tier (ms).
pub const DEFAULT_FADE_MS: u64 = 1000;

/// Minimum fade length (ms). Zero shows tiers immediately.
pub const MIN_FADE_MS: u64 = 0;

/// Maximum fade length (ms).
pub const MAX_FADE_MS: u64 = 10_000;

/// Reveal fade length of gallery tiles (ms).
pub const REVEAL_FADE_MS: u64 = 600;

/// Longest horizontal reveal delay, reached at the right edge (ms).
pub const REVEAL_MAX_DELAY_MS: u64 = 200;

/// Frame interval of the animation tick while something is fading (ms).
pub const ANIMATION_FRAME_MS: u64 = 16;

// ==========================================================================
// Footer Defaults
// ==========================================================================

/// How long the "copied" indicator stays visible (ms).
pub const COPY_INDICATOR_MS: u64 = 3000;

/// Check interval for the copy indicator deadline (ms).
pub const INDICATOR_TICK_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Loading validation
    assert!(MIN_LOAD_MARGIN_PX >= 0.0);
    assert!(DEFAULT_LOAD_MARGIN_PX >= MIN_LOAD_MARGIN_PX);
    assert!(DEFAULT_LOAD_MARGIN_PX <= MAX_LOAD_MARGIN_PX);
    assert!(LOAD_SIZE_FACTOR >= REVEAL_SIZE_FACTOR);
    assert!(MIN_MAX_MEDIUM_SIZE_PX > 0.0);
    assert!(DEFAULT_MAX_MEDIUM_SIZE_PX >= MIN_MAX_MEDIUM_SIZE_PX);
    assert!(DEFAULT_MAX_MEDIUM_SIZE_PX <= MAX_MAX_MEDIUM_SIZE_PX);

    // Slideshow validation
    assert!(MIN_POLL_INTERVAL_MS > 0);
    assert!(DEFAULT_POLL_INTERVAL_MS >= MIN_POLL_INTERVAL_MS);
    assert!(DEFAULT_POLL_INTERVAL_MS <= MAX_POLL_INTERVAL_MS);
    assert!(DEFAULT_PAUSE_MS >= MIN_PAUSE_MS);
    assert!(DEFAULT_PAUSE_MS <= MAX_PAUSE_MS);
    assert!(MANUAL_TRANSITION_MS < AUTO_TRANSITION_MS);
    assert!(AUTO_TRANSITION_MS < DEFAULT_PAUSE_MS);

    // Animation validation
    assert!(DEFAULT_FADE_MS <= MAX_FADE_MS);
    assert!(ANIMATION_FRAME_MS > 0);
    assert!(REVEAL_MAX_DELAY_MS < REVEAL_FADE_MS);

    // Footer validation
    assert!(COPY_INDICATOR_MS > 0);
    assert!(INDICATOR_TICK_MS > 0 && INDICATOR_TICK_MS < COPY_INDICATOR_MS);
};
