// SPDX-License-Identifier: MPL-2.0
//! Masonry gallery of lazily loaded images.
//!
//! All tiles are mounted at once; each one loads on its own as it nears the
//! viewport and is revealed with a short fade the first time it does.

use crate::content::ImageAsset;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::layout::{self, GalleryLayout, TilePlacement, TileSpec};
use crate::ui::lazy_image::{self, Effect, LazyImage, LazyImageOptions};
use crate::ui::reveal::Reveal;
use crate::ui::state::{InstanceId, ListenerRegistry, ScrollViewport};
use iced::widget::{container, text, Column, Row};
use iced::{Color, Element, Length, Point, Rectangle, Vector};
use std::time::Instant;

/// Space between columns and between tiles of one column.
pub const GAP: f32 = spacing::XS;

#[derive(Debug)]
struct Tile {
    image: LazyImage,
    placement: Option<TilePlacement>,
    reveal: Reveal,
}

impl Tile {
    fn spec(&self) -> TileSpec {
        let asset = self.image.asset();
        TileSpec {
            inverse_aspect: asset.inverse_aspect_ratio(),
            has_caption: !asset.description.is_empty(),
        }
    }
}

#[derive(Debug)]
pub struct Gallery {
    tiles: Vec<Tile>,
    layout: Option<GalleryLayout>,
    origin: Point,
}

impl Gallery {
    pub fn new(registry: &ListenerRegistry, photos: &[ImageAsset], options: LazyImageOptions) -> Self {
        let tiles = photos
            .iter()
            .map(|asset| Tile {
                image: LazyImage::new(registry, asset.clone(), options),
                placement: None,
                reveal: Reveal::new(),
            })
            .collect();
        Self {
            tiles,
            layout: None,
            origin: Point::ORIGIN,
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.tiles.iter().map(|tile| tile.image.id())
    }

    /// Total height once laid out.
    pub fn height(&self) -> f32 {
        self.layout.as_ref().map_or(0.0, |layout| layout.height)
    }

    /// Lays the tiles out for `width`, with the gallery's top-left corner at
    /// `origin` in page-content coordinates.
    pub fn layout(&mut self, width: f32, origin: Point) -> Vec<(InstanceId, Effect)> {
        let specs: Vec<TileSpec> = self.tiles.iter().map(Tile::spec).collect();
        let layout = layout::gallery(width, GAP, &specs);
        self.origin = origin;

        let mut effects = Vec::new();
        for (tile, placement) in self.tiles.iter_mut().zip(&layout.placements) {
            tile.placement = Some(*placement);
            let id = tile.image.id();
            effects.extend(
                tile.image
                    .resize(placement.image.size())
                    .into_iter()
                    .map(|effect| (id, effect)),
            );
        }
        self.layout = Some(layout);
        effects
    }

    fn visible(&self, viewport: &ScrollViewport, rect: Rectangle) -> Option<Rectangle> {
        viewport
            .is_known()
            .then(|| viewport.to_visible(rect + Vector::new(self.origin.x, self.origin.y)))
    }

    /// Scroll or resize notification for every registered tile.
    pub fn viewport_changed(
        &mut self,
        viewport: &ScrollViewport,
        registry: &ListenerRegistry,
        now: Instant,
    ) -> Vec<(InstanceId, Effect)> {
        let mut effects = Vec::new();
        for index in 0..self.tiles.len() {
            let tile = &self.tiles[index];
            let id = tile.image.id();
            if !registry.is_registered(id) {
                continue;
            }
            let image_bounds = tile.placement.and_then(|p| self.visible(viewport, p.image));
            let tile_bounds = tile.placement.and_then(|p| self.visible(viewport, p.tile));

            let tile = &mut self.tiles[index];
            tile.reveal.viewport_changed(tile_bounds, viewport.size, now);
            effects.extend(
                tile.image
                    .viewport_changed(image_bounds, viewport.size)
                    .into_iter()
                    .map(|effect| (id, effect)),
            );
        }
        effects
    }

    /// Routes a completion to its tile. `None` if no tile has that id.
    pub fn update(
        &mut self,
        id: InstanceId,
        message: lazy_image::Message,
        now: Instant,
    ) -> Option<Vec<Effect>> {
        self.tiles
            .iter_mut()
            .find(|tile| tile.image.id() == id)
            .map(|tile| tile.image.update(message, now))
    }

    /// Advances tier fades and reveals. Returns true while animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut animating = false;
        for tile in &mut self.tiles {
            animating |= tile.image.tick(now);
            animating |= tile.reveal.tick(now);
        }
        animating
    }

    pub fn is_animating(&self) -> bool {
        self.tiles
            .iter()
            .any(|tile| tile.image.is_animating() || tile.reveal.is_animating())
    }

    pub fn view<'a, M: 'a>(&'a self) -> Element<'a, M> {
        let Some(layout) = &self.layout else {
            return Column::new().into();
        };

        let columns = layout.columns.iter().map(|indices| -> Element<'a, M> {
            indices
                .iter()
                .filter_map(|&index| self.tiles.get(index))
                .fold(
                    Column::new().spacing(GAP).width(Length::Fixed(layout.column_width)),
                    |column, tile| column.push(tile_view(tile, layout.column_width)),
                )
                .into()
        });

        Row::with_children(columns).spacing(GAP).into()
    }
}

fn tile_view<'a, M: 'a>(tile: &'a Tile, width: f32) -> Element<'a, M> {
    let alpha = tile.reveal.alpha();
    let mut content = Column::new()
        .width(Length::Fixed(width))
        .push(tile.image.view(alpha));

    let description = &tile.image.asset().description;
    if !description.is_empty() {
        let color = Color {
            a: alpha,
            ..palette::GRAY_700
        };
        content = content.push(
            container(text(description.as_str()).size(typography::CAPTION).color(color))
                .width(Length::Fixed(width))
                .height(Length::Fixed(sizing::CAPTION_HEIGHT))
                .padding([spacing::XXS, 0.0]),
        );
    }
    content.into()
}
