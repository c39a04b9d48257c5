// SPDX-License-Identifier: MPL-2.0
//! Stacked tier layers of one image.
//!
//! Each decoded tier becomes a layer that fades in from transparent. Layers
//! stay ordered by tier, so the highest decoded tier is drawn on top while
//! lower tiers remain underneath.

use crate::content::FocusPoint;
use crate::media::{CropRect, DecodedImage, LoadTier};
use crate::ui::layout::cover_crop;
use crate::ui::state::FadeIn;
use iced::widget::image;
use iced::Size;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Layer {
    pub tier: LoadTier,
    /// Handle actually drawn: the decoded image, or its crop around the focus
    /// point once that crop is ready.
    pub display: image::Handle,
    pub opacity: f32,
    decoded: DecodedImage,
    /// Crop wanted for the current frame, `None` when the full image is drawn.
    crop: Option<CropRect>,
    fade: FadeIn,
}

/// A crop the owner should compute off the UI thread, then hand back through
/// [`Surface::apply_crop`].
#[derive(Debug, Clone)]
pub struct CropRequest {
    pub tier: LoadTier,
    pub image: DecodedImage,
    pub rect: CropRect,
}

#[derive(Debug, Clone)]
pub struct Surface {
    layers: [Option<Layer>; 3],
    focus: FocusPoint,
    fade_duration: Duration,
    frame: Size,
}

impl Surface {
    pub fn new(focus: FocusPoint, fade_duration: Duration) -> Self {
        Self {
            layers: [None, None, None],
            focus,
            fade_duration,
            frame: Size::ZERO,
        }
    }

    /// Layers bottom to top.
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().flatten()
    }

    pub fn has_layer(&self, tier: LoadTier) -> bool {
        self.layers[tier.index()].is_some()
    }

    /// Topmost tier that is fully opaque.
    pub fn settled_tier(&self) -> Option<LoadTier> {
        self.layers()
            .filter(|layer| layer.opacity >= 1.0)
            .map(|layer| layer.tier)
            .last()
    }

    /// Adds the decoded `tier` and starts its fade. Returns `None` if the tier
    /// was already present, otherwise the crop the new layer still needs.
    pub fn insert(
        &mut self,
        tier: LoadTier,
        decoded: DecodedImage,
        now: Instant,
    ) -> Option<Option<CropRequest>> {
        if self.has_layer(tier) {
            return None;
        }
        let crop = self.wanted_crop(&decoded);
        let fade = FadeIn::starting_at(now, self.fade_duration);
        let request = crop.map(|rect| CropRequest {
            tier,
            image: decoded.clone(),
            rect,
        });
        self.layers[tier.index()] = Some(Layer {
            tier,
            // The renderer's centred cover fit stands in until the crop lands.
            display: decoded.handle.clone(),
            opacity: fade.opacity(now),
            decoded,
            crop,
            fade,
        });
        Some(request)
    }

    /// Updates the frame the layers are drawn into and returns the crops that
    /// changed. Nothing changes unless the frame aspect ratio does.
    pub fn set_frame(&mut self, frame: Size) -> Vec<CropRequest> {
        let aspect_changed = aspect(frame) != aspect(self.frame);
        self.frame = frame;
        if !aspect_changed || self.focus.is_center() {
            return Vec::new();
        }

        let mut requests = Vec::new();
        for index in 0..self.layers.len() {
            let Some(layer) = &self.layers[index] else {
                continue;
            };
            let wanted = self.wanted_crop(&layer.decoded);
            let Some(layer) = &mut self.layers[index] else {
                continue;
            };
            if wanted == layer.crop {
                continue;
            }
            layer.crop = wanted;
            match wanted {
                Some(rect) => requests.push(CropRequest {
                    tier: layer.tier,
                    image: layer.decoded.clone(),
                    rect,
                }),
                None => layer.display = layer.decoded.handle.clone(),
            }
        }
        requests
    }

    /// Installs a finished crop. Crops for a frame that has since changed are
    /// dropped; returns false for those.
    pub fn apply_crop(&mut self, tier: LoadTier, rect: CropRect, handle: image::Handle) -> bool {
        match &mut self.layers[tier.index()] {
            Some(layer) if layer.crop == Some(rect) => {
                layer.display = handle;
                true
            }
            _ => false,
        }
    }

    fn wanted_crop(&self, decoded: &DecodedImage) -> Option<CropRect> {
        if self.focus.is_center() || aspect(self.frame).is_none() {
            return None;
        }
        let rect = cover_crop(decoded.width, decoded.height, self.frame, self.focus);
        (rect != CropRect::full(decoded.width, decoded.height)).then_some(rect)
    }

    /// Advances fades. Returns true while any layer is still fading.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut animating = false;
        for layer in self.layers.iter_mut().flatten() {
            layer.opacity = layer.fade.opacity(now);
            animating |= !layer.fade.is_complete(now);
        }
        animating
    }

    pub fn is_animating(&self) -> bool {
        self.layers().any(|layer| layer.opacity < 1.0)
    }
}

fn aspect(size: Size) -> Option<u32> {
    // Compared at 1/1000 precision to ignore sub-pixel jitter.
    (size.width > 0.0 && size.height > 0.0).then(|| (size.width / size.height * 1000.0).round() as u32)
}
