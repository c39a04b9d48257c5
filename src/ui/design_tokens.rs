// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens.

## Organization

- **Palette**: Base colors
- **Opacity**: Fade end points
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Fixed component sizes, shared by the views and the layout math
- **Typography**: Font size scale

## Examples

```
use photofolio::ui::design_tokens::{palette, spacing};

let placeholder = palette::PLACEHOLDER;
let gap = spacing::XS; // 8px
```

## Modification

Sizes in [`sizing`] are also read by [`crate::ui::layout`]; a widget whose
height differs from its token breaks viewport tracking for everything below it.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Flat background shown until an image's preview arrives (#EEEEEE).
    pub const PLACEHOLDER: Color = Color::from_rgb(238.0 / 255.0, 238.0 / 255.0, 238.0 / 255.0);

    pub const ACCENT: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 48.0;

    /// Height reserved under a gallery tile for its caption.
    pub const CAPTION_HEIGHT: f32 = 28.0;

    /// Height of an album title row on the portfolio page.
    pub const ALBUM_HEADER_HEIGHT: f32 = 56.0;

    /// Galleries add a column for every this many pixels of width.
    pub const MIN_TILE_WIDTH: f32 = 280.0;

    pub const MAX_GALLERY_COLUMNS: usize = 4;

    /// Slideshow height as a fraction of its width.
    pub const SLIDESHOW_ASPECT: f32 = 0.6;

    /// Height of the slideshow controls row.
    pub const SLIDESHOW_CONTROLS_HEIGHT: f32 = 40.0;

    pub const BUTTON_HEIGHT: f32 = 32.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(sizing::MIN_TILE_WIDTH > 0.0);
    assert!(sizing::MAX_GALLERY_COLUMNS >= 1);
    assert!(sizing::SLIDESHOW_ASPECT > 0.0);
    assert!(sizing::CAPTION_HEIGHT > typography::CAPTION);

    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
