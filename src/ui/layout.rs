// SPDX-License-Identifier: MPL-2.0
//! Layout math shared by the views and viewport tracking.
//!
//! Galleries are laid out here rather than discovered from the renderer: the
//! views use exactly these sizes, so the rectangles below are also where the
//! tiles end up on screen. Positions are relative to the top-left corner of
//! the gallery.

use crate::content::FocusPoint;
use crate::media::CropRect;
use crate::ui::design_tokens::sizing;
use iced::{Point, Rectangle, Size};

/// What the layout needs to know about one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSpec {
    /// Height divided by width of the image.
    pub inverse_aspect: f32,
    pub has_caption: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub column: usize,
    /// Image frame, relative to the gallery origin.
    pub image: Rectangle,
    /// Full tile including the caption.
    pub tile: Rectangle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryLayout {
    pub column_width: f32,
    /// Tile indices per column, top to bottom.
    pub columns: Vec<Vec<usize>>,
    /// Placement of each tile, in input order.
    pub placements: Vec<TilePlacement>,
    pub height: f32,
}

/// Number of columns that fit in `width` given `gap` between columns.
pub fn column_count(width: f32, gap: f32) -> usize {
    if !width.is_finite() || width <= 0.0 {
        return 1;
    }
    let fit = ((width + gap) / (sizing::MIN_TILE_WIDTH + gap)).floor() as usize;
    fit.clamp(1, sizing::MAX_GALLERY_COLUMNS)
}

/// Masonry layout: each tile goes to the currently shortest column.
pub fn gallery(width: f32, gap: f32, tiles: &[TileSpec]) -> GalleryLayout {
    let count = column_count(width, gap);
    let column_width = ((width.max(0.0) - gap * (count as f32 - 1.0)) / count as f32).max(0.0);

    let mut heights = vec![0.0_f32; count];
    let mut columns = vec![Vec::new(); count];
    let mut placements = Vec::with_capacity(tiles.len());

    for (index, spec) in tiles.iter().enumerate() {
        // Leftmost column wins ties.
        let column = heights
            .iter()
            .enumerate()
            .fold(0, |best, (i, h)| if *h < heights[best] { i } else { best });

        let x = column as f32 * (column_width + gap);
        let y = if columns[column].is_empty() {
            0.0
        } else {
            heights[column] + gap
        };
        let image_height = column_width * spec.inverse_aspect.max(0.0);
        let caption = if spec.has_caption {
            sizing::CAPTION_HEIGHT
        } else {
            0.0
        };

        let image = Rectangle::new(Point::new(x, y), Size::new(column_width, image_height));
        let tile = Rectangle::new(
            Point::new(x, y),
            Size::new(column_width, image_height + caption),
        );

        heights[column] = y + tile.height;
        columns[column].push(index);
        placements.push(TilePlacement {
            column,
            image,
            tile,
        });
    }

    let height = heights.into_iter().fold(0.0, f32::max);
    GalleryLayout {
        column_width,
        columns,
        placements,
        height,
    }
}

/// Slideshow frame height for a given width, capped by the visible height.
pub fn slideshow_height(width: f32, max_height: f32) -> f32 {
    let natural = width.max(0.0) * sizing::SLIDESHOW_ASPECT;
    if max_height > 0.0 {
        natural.min(max_height)
    } else {
        natural
    }
}

/// Source rectangle that fills `frame` without distortion, positioned by
/// `focus` along the axis that has to be trimmed.
pub fn cover_crop(natural_width: u32, natural_height: u32, frame: Size, focus: FocusPoint) -> CropRect {
    let full = CropRect::full(natural_width, natural_height);
    if natural_width == 0 || natural_height == 0 || frame.width <= 0.0 || frame.height <= 0.0 {
        return full;
    }

    let (nw, nh) = (natural_width as f32, natural_height as f32);
    let frame_aspect = frame.width / frame.height;

    if frame_aspect > nw / nh {
        // Frame is wider: keep full width, trim top/bottom.
        let crop_h = (nw / frame_aspect).round().clamp(1.0, nh);
        let y = ((nh - crop_h) * focus.y()).round();
        CropRect {
            x: 0,
            y: y as u32,
            width: natural_width,
            height: crop_h as u32,
        }
    } else {
        let crop_w = (nh * frame_aspect).round().clamp(1.0, nw);
        let x = ((nw - crop_w) * focus.x()).round();
        CropRect {
            x: x as u32,
            y: 0,
            width: crop_w as u32,
            height: natural_height,
        }
    }
}
