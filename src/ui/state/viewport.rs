// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Two pieces live here:
//! - [`ScrollViewport`] tracks the page scrollable (visible bounds and scroll
//!   offset) and maps content-space rectangles into viewport space.
//! - [`ViewportTracker`] decides, per element, whether it has come inside
//!   (or near) the visible area. Membership is sticky.

use crate::app::config::{
    DEFAULT_LOAD_MARGIN_PX, LOAD_SIZE_FACTOR, REVEAL_SIZE_FACTOR,
};
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Rectangle, Size, Vector};

/// Visible area and scroll position of the page scrollable.
#[derive(Debug, Clone)]
pub struct ScrollViewport {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Previous scroll offset (for delta tracking)
    pub previous_offset: AbsoluteOffset,

    /// Size of the visible area
    pub size: Size,
}

impl Default for ScrollViewport {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            previous_offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            size: Size::ZERO,
        }
    }
}

impl ScrollViewport {
    /// Records a scroll notification. Returns true if the visible size changed.
    pub fn update(&mut self, bounds: Rectangle, offset: AbsoluteOffset) -> bool {
        self.previous_offset = self.offset;
        self.offset = offset;
        self.set_size(bounds.size())
    }

    /// Records a new visible size without a scroll. Returns true on change.
    pub fn set_size(&mut self, size: Size) -> bool {
        let changed = self.size != size;
        self.size = size;
        changed
    }

    /// Scrolling back to the top, as happens when a new page is mounted.
    pub fn reset_offset(&mut self) {
        self.previous_offset = self.offset;
        self.offset = AbsoluteOffset { x: 0.0, y: 0.0 };
    }

    /// Vertical scroll delta of the last update (positive when scrolling down).
    #[must_use]
    pub fn scroll_delta_y(&self) -> f32 {
        self.offset.y - self.previous_offset.y
    }

    /// Whether a size has been observed yet.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.size.width > 0.0 && self.size.height > 0.0
    }

    /// Maps a rectangle in page-content coordinates into viewport
    /// coordinates (the equivalent of a client bounding box).
    #[must_use]
    pub fn to_visible(&self, content_rect: Rectangle) -> Rectangle {
        content_rect - Vector::new(self.offset.x, self.offset.y)
    }
}

/// How far around the viewport an element still counts as "in view".
///
/// The viewport is padded on each side by `size_factor` element extents
/// plus `margin` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpansionPolicy {
    pub size_factor: f32,
    pub margin: f32,
}

impl ExpansionPolicy {
    /// Policy that triggers image loading well before an element is visible.
    pub const LAZY_LOAD: Self = Self {
        size_factor: LOAD_SIZE_FACTOR,
        margin: DEFAULT_LOAD_MARGIN_PX,
    };

    /// Tighter policy used for reveal animations.
    pub const REVEAL: Self = Self {
        size_factor: REVEAL_SIZE_FACTOR,
        margin: 0.0,
    };

    #[must_use]
    pub fn lazy_load_with_margin(margin: f32) -> Self {
        Self {
            margin: margin.max(0.0),
            ..Self::LAZY_LOAD
        }
    }

    /// Whether `element` (viewport coordinates) lies fully inside the padded
    /// viewport of size `window`.
    #[must_use]
    pub fn contains(&self, element: Rectangle, window: Size) -> bool {
        let pad_x = self.size_factor * element.width + self.margin;
        let pad_y = self.size_factor * element.height + self.margin;

        element.y >= -pad_y
            && element.x >= -pad_x
            && element.y + element.height <= window.height + pad_y
            && element.x + element.width <= window.width + pad_x
    }
}

/// Sticky "has ever been near the viewport" flag of one element.
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    policy: ExpansionPolicy,
    entered: bool,
    last_bounds: Option<Rectangle>,
}

impl ViewportTracker {
    #[must_use]
    pub fn new(policy: ExpansionPolicy) -> Self {
        Self {
            policy,
            entered: false,
            last_bounds: None,
        }
    }

    /// Re-evaluates membership for the element's current bounds.
    ///
    /// `None` bounds (element not laid out yet) leave the state untouched.
    /// Once true, the result stays true.
    pub fn recompute(&mut self, element: Option<Rectangle>, window: Size) -> bool {
        let Some(bounds) = element else {
            return self.entered;
        };
        self.last_bounds = Some(bounds);

        if !self.entered && self.policy.contains(bounds, window) {
            self.entered = true;
        }
        self.entered
    }

    #[must_use]
    pub fn in_viewport(&self) -> bool {
        self.entered
    }

    #[must_use]
    pub fn last_bounds(&self) -> Option<Rectangle> {
        self.last_bounds
    }

    #[must_use]
    pub fn policy(&self) -> ExpansionPolicy {
        self.policy
    }

    /// Horizontal position of the element centre as a fraction of the
    /// window width, clamped to `[0, 1]`. Used to stagger reveals.
    #[must_use]
    pub fn delay_fraction(&self, window: Size) -> f32 {
        match self.last_bounds {
            Some(bounds) if window.width > 0.0 => {
                (bounds.center_x() / window.width).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}
