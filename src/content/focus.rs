// SPDX-License-Identifier: MPL-2.0
//! Focus point newtype for cover-fit cropping.

/// Point of interest of an image, as fractions of its width and height.
///
/// Both coordinates are clamped to `[0.0, 1.0]`; non-finite input falls back
/// to the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusPoint {
    x: f32,
    y: f32,
}

impl FocusPoint {
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: clamp_unit(x),
            y: clamp_unit(y),
        }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    pub fn is_center(self) -> bool {
        self == Self::CENTER
    }
}

impl Default for FocusPoint {
    fn default() -> Self {
        Self::CENTER
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.5
    }
}
