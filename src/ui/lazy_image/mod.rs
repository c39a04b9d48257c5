// SPDX-License-Identifier: MPL-2.0
//! Progressively loaded image.
//!
//! A [`LazyImage`] is one mounted image instance. It owns its viewport
//! tracker, its tier loader and its layered surface, and reacts to three
//! kinds of input:
//!
//! - layout changes ([`LazyImage::resize`]) and scroll/resize notifications
//!   ([`LazyImage::viewport_changed`]),
//! - asynchronous completions ([`Message`]), delivered through [`LazyImage::update`],
//! - animation ticks ([`LazyImage::tick`]).
//!
//! Every input returns [`Effect`]s for the owner to run; the component never
//! spawns work itself, which keeps it testable without a runtime.

mod surface;

pub use surface::{CropRequest, Layer, Surface};

use crate::app::config::{DEFAULT_FADE_MS, DEFAULT_MAX_MEDIUM_SIZE_PX};
use crate::content::ImageAsset;
use crate::error::AssetFetchError;
use crate::media::{self, AssetBytes, CropRect, DecodedImage, LoadTier, SharedAssetSource};
use crate::ui::design_tokens::palette;
use crate::ui::state::{
    Completion, ExpansionPolicy, InstanceId, ListenerGuard, ListenerRegistry, TieredLoader,
    ViewportTracker,
};
use iced::widget::{container, image, Column, Stack};
use iced::{Background, Color, ContentFit, Element, Length, Rectangle, Size, Task, Theme};
use std::time::{Duration, Instant};

/// Fixed dimensions that override the size handed down by the layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TileStyle {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl TileStyle {
    fn apply(&self, size: Size) -> Size {
        Size::new(
            self.width.unwrap_or(size.width),
            self.height.unwrap_or(size.height),
        )
    }
}

/// Per-instance options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LazyImageOptions {
    /// Rendered width above which the Large tier is fetched.
    pub max_medium_size: f32,
    pub fade: Duration,
    pub policy: ExpansionPolicy,
    pub style: TileStyle,
}

impl Default for LazyImageOptions {
    fn default() -> Self {
        Self {
            max_medium_size: DEFAULT_MAX_MEDIUM_SIZE_PX,
            fade: Duration::from_millis(DEFAULT_FADE_MS),
            policy: ExpansionPolicy::LAZY_LOAD,
            style: TileStyle::default(),
        }
    }
}

/// Asynchronous completions addressed to one instance.
#[derive(Debug, Clone)]
pub enum Message {
    Fetched {
        tier: LoadTier,
        result: Result<AssetBytes, AssetFetchError>,
    },
    Decoded {
        tier: LoadTier,
        result: Result<DecodedImage, AssetFetchError>,
    },
    Cropped {
        tier: LoadTier,
        rect: CropRect,
        handle: image::Handle,
    },
}

/// Work requested by an instance.
#[derive(Debug, Clone)]
pub enum Effect {
    Fetch { tier: LoadTier, asset: String },
    Decode {
        tier: LoadTier,
        asset: String,
        bytes: AssetBytes,
    },
    /// Focus crop of a decoded layer for the current frame.
    Crop {
        tier: LoadTier,
        image: DecodedImage,
        rect: CropRect,
    },
    /// The Medium layer finished decoding and started to show.
    MediumShown,
}

impl Effect {
    /// Turns fetch/decode effects into tasks. `MediumShown` is a
    /// notification for the owner and yields `None`.
    pub fn into_task(self, source: &SharedAssetSource) -> Option<Task<Message>> {
        match self {
            Effect::Fetch { tier, asset } => Some(Task::perform(
                media::asset::fetch(source.clone(), asset),
                move |result| Message::Fetched { tier, result },
            )),
            Effect::Decode { tier, asset, bytes } => Some(Task::perform(
                media::decode::decode_async(asset, bytes),
                move |result| Message::Decoded { tier, result },
            )),
            Effect::Crop { tier, image, rect } => Some(Task::perform(
                media::decode::crop_async(image, rect),
                move |handle| Message::Cropped { tier, rect, handle },
            )),
            Effect::MediumShown => None,
        }
    }
}

impl From<CropRequest> for Effect {
    fn from(request: CropRequest) -> Self {
        Effect::Crop {
            tier: request.tier,
            image: request.image,
            rect: request.rect,
        }
    }
}

#[derive(Debug)]
pub struct LazyImage {
    listener: ListenerGuard,
    asset: ImageAsset,
    options: LazyImageOptions,
    tracker: ViewportTracker,
    loader: TieredLoader,
    surface: Surface,
    size: Size,
}

impl LazyImage {
    /// Mounts an instance and registers it for viewport notifications.
    pub fn new(registry: &ListenerRegistry, asset: ImageAsset, options: LazyImageOptions) -> Self {
        let listener = registry.register();
        tracing::debug!(instance = %listener.id(), file_id = %asset.file_id, "image mounted");
        let surface = Surface::new(asset.focus_or_center(), options.fade);
        Self {
            listener,
            tracker: ViewportTracker::new(options.policy),
            loader: TieredLoader::new(),
            surface,
            size: Size::ZERO,
            asset,
            options,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.listener.id()
    }

    pub fn asset(&self) -> &ImageAsset {
        &self.asset
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn in_viewport(&self) -> bool {
        self.tracker.in_viewport()
    }

    pub fn loader(&self) -> &TieredLoader {
        &self.loader
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// New rendered size. A real change re-arms a stalled tier.
    pub fn resize(&mut self, size: Size) -> Vec<Effect> {
        let size = self.options.style.apply(size);
        let mut effects = Vec::new();
        if size != self.size {
            self.size = size;
            effects.extend(self.surface.set_frame(size).into_iter().map(Effect::from));
            self.loader.retry();
        }
        effects.extend(self.recompute());
        effects
    }

    /// Changes the Large-tier threshold; also re-arms a stalled tier.
    pub fn set_max_medium_size(&mut self, max_medium_size: f32) -> Vec<Effect> {
        if max_medium_size != self.options.max_medium_size {
            self.options.max_medium_size = max_medium_size;
            self.loader.retry();
        }
        self.recompute()
    }

    /// Scroll or window-resize notification. `bounds` is in viewport
    /// coordinates, `None` when the element is not laid out.
    pub fn viewport_changed(&mut self, bounds: Option<Rectangle>, window: Size) -> Vec<Effect> {
        self.tracker.recompute(bounds, window);
        self.recompute()
    }

    fn recompute(&mut self) -> Vec<Effect> {
        self.loader
            .advance(
                self.tracker.in_viewport(),
                self.size.width,
                self.options.max_medium_size,
            )
            .map(|tier| Effect::Fetch {
                tier,
                asset: self.asset_name(tier),
            })
            .into_iter()
            .collect()
    }

    fn asset_name(&self, tier: LoadTier) -> String {
        tier.asset_name(&self.asset.file_id, &self.asset.extension)
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Vec<Effect> {
        match message {
            Message::Fetched { tier, result } => {
                let bytes = result.as_ref().ok().cloned();
                match self.loader.complete(tier, result) {
                    Completion::Filled => {
                        let mut effects = Vec::with_capacity(2);
                        if let Some(bytes) = bytes {
                            effects.push(Effect::Decode {
                                tier,
                                asset: self.asset_name(tier),
                                bytes,
                            });
                        }
                        // Filling one tier may unlock the next.
                        effects.extend(self.recompute());
                        effects
                    }
                    Completion::Failed | Completion::Ignored => Vec::new(),
                }
            }
            Message::Decoded { tier, result } => match result {
                Ok(decoded) => {
                    let Some(crop) = self.surface.insert(tier, decoded, now) else {
                        return Vec::new();
                    };
                    let mut effects: Vec<_> = crop.into_iter().map(Effect::from).collect();
                    if tier == LoadTier::Medium {
                        effects.push(Effect::MediumShown);
                    }
                    effects
                }
                Err(err) => {
                    tracing::warn!(instance = %self.id(), %tier, error = %err, "failed to decode image tier");
                    Vec::new()
                }
            },
            Message::Cropped { tier, rect, handle } => {
                if !self.surface.apply_crop(tier, rect, handle) {
                    tracing::trace!(instance = %self.id(), %tier, "dropping crop for an old frame");
                }
                Vec::new()
            }
        }
    }

    /// Advances fades. Returns true while still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.surface.tick(now)
    }

    pub fn is_animating(&self) -> bool {
        self.surface.is_animating()
    }

    /// Draws the stacked layers at the current size. `alpha` scales every
    /// layer, for reveals and slide cross-fades.
    pub fn view<'a, M: 'a>(&'a self, alpha: f32) -> Element<'a, M> {
        let width = Length::Fixed(self.size.width);
        let height = Length::Fixed(self.size.height);
        let mut stack = Stack::new().width(width).height(height);

        if !self.loader.state().is_filled(LoadTier::Preview) {
            let color = Color {
                a: palette::PLACEHOLDER.a * alpha,
                ..palette::PLACEHOLDER
            };
            stack = stack.push(
                container(Column::new())
                    .width(width)
                    .height(height)
                    .style(move |_theme: &Theme| container::Style {
                        background: Some(Background::Color(color)),
                        ..Default::default()
                    }),
            );
        }

        for layer in self.surface.layers() {
            stack = stack.push(
                image(layer.display.clone())
                    .width(width)
                    .height(height)
                    .content_fit(ContentFit::Cover)
                    .opacity(layer.opacity * alpha),
            );
        }

        stack.into()
    }
}
