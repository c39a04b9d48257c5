// SPDX-License-Identifier: MPL-2.0
//! Home page slideshow.
//!
//! Slides sit side by side on a horizontal track that is shifted so the
//! current slide fills the frame. Neighbouring slides are therefore close to
//! the viewport and preload under the usual policy. Auto-advance is driven
//! by [`Carousel`], which only moves on once the next slide shows its Medium
//! tier.

use crate::app::config::SlideshowConfig;
use crate::app::i18n::fluent::I18n;
use crate::content::ImageAsset;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::layout;
use crate::ui::lazy_image::{self, Effect, LazyImage, LazyImageOptions};
use crate::ui::state::{Carousel, InstanceId, ListenerRegistry, ScrollViewport};
use iced::alignment::Vertical;
use iced::widget::{button, container, text, Row, Stack};
use iced::{Element, Length, Point, Rectangle, Size};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
}

#[derive(Debug)]
pub struct Slideshow {
    slides: Vec<LazyImage>,
    carousel: Carousel,
    has_controls: bool,
    frame: Size,
    origin: Point,
    progress: f32,
}

impl Slideshow {
    pub fn new(
        registry: &ListenerRegistry,
        photos: &[ImageAsset],
        options: LazyImageOptions,
        config: &SlideshowConfig,
        now: Instant,
    ) -> Self {
        let slides = photos
            .iter()
            .map(|asset| LazyImage::new(registry, asset.clone(), options))
            .collect::<Vec<_>>();
        let carousel = Carousel::new(slides.len(), config.auto_scroll, config.pause(), now);
        Self {
            slides,
            carousel,
            has_controls: config.has_controls,
            frame: Size::ZERO,
            origin: Point::ORIGIN,
            progress: 1.0,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn slide_ids(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.slides.iter().map(LazyImage::id)
    }

    pub fn frame(&self) -> Size {
        self.frame
    }

    /// Total height including the controls row.
    pub fn height(&self) -> f32 {
        if self.has_controls {
            self.frame.height + sizing::SLIDESHOW_CONTROLS_HEIGHT
        } else {
            self.frame.height
        }
    }

    /// Sizes the frame for `width`, capped at `max_height`.
    pub fn layout(&mut self, width: f32, max_height: f32, origin: Point) -> Vec<(InstanceId, Effect)> {
        self.frame = Size::new(width, layout::slideshow_height(width, max_height));
        self.origin = origin;

        let mut effects = Vec::new();
        for slide in &mut self.slides {
            let id = slide.id();
            effects.extend(slide.resize(self.frame).into_iter().map(|e| (id, e)));
        }
        effects
    }

    /// Position of slide `index` on the shifted track, in page-content
    /// coordinates.
    fn slide_rect(&self, index: usize) -> Rectangle {
        let shift = (index as f32 - self.carousel.index() as f32) * self.frame.width;
        Rectangle::new(
            Point::new(self.origin.x + shift, self.origin.y),
            self.frame,
        )
    }

    pub fn viewport_changed(
        &mut self,
        viewport: &ScrollViewport,
        registry: &ListenerRegistry,
    ) -> Vec<(InstanceId, Effect)> {
        let laid_out = viewport.is_known() && self.frame.width > 0.0;
        let mut effects = Vec::new();
        for index in 0..self.slides.len() {
            let bounds = laid_out.then(|| viewport.to_visible(self.slide_rect(index)));
            let slide = &mut self.slides[index];
            let id = slide.id();
            if !registry.is_registered(id) {
                continue;
            }
            effects.extend(
                slide
                    .viewport_changed(bounds, viewport.size)
                    .into_iter()
                    .map(|e| (id, e)),
            );
        }
        effects
    }

    /// Routes a completion to its slide. A Medium layer coming up marks the
    /// slide as ready for auto-advance.
    pub fn update(
        &mut self,
        id: InstanceId,
        message: lazy_image::Message,
        now: Instant,
    ) -> Option<Vec<Effect>> {
        let position = self.slides.iter().position(|slide| slide.id() == id)?;
        let effects = self.slides[position].update(message, now);
        if effects.iter().any(|e| matches!(e, Effect::MediumShown)) {
            tracing::debug!(slide = position, "slide ready for auto-advance");
            self.carousel.mark_medium_ready(position);
        }
        Some(effects)
    }

    /// Manual navigation. Returns true if the current slide changed.
    pub fn handle(&mut self, message: Message, now: Instant) -> bool {
        let moved = match message {
            Message::Previous => self.carousel.previous(now),
            Message::Next => self.carousel.next(now),
        };
        self.progress = self.carousel.transition_progress(now);
        moved
    }

    /// Poll tick. Returns true if the slideshow advanced.
    pub fn poll(&mut self, now: Instant) -> bool {
        let advanced = self.carousel.tick(now);
        self.progress = self.carousel.transition_progress(now);
        advanced
    }

    /// Advances slide cross-fades and tier fades.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.progress = self.carousel.transition_progress(now);
        let mut animating = self.progress < 1.0;
        for slide in &mut self.slides {
            animating |= slide.tick(now);
        }
        animating
    }

    pub fn is_animating(&self) -> bool {
        self.progress < 1.0 || self.slides.iter().any(LazyImage::is_animating)
    }

    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let mut frame = Stack::new()
            .width(Length::Fixed(self.frame.width))
            .height(Length::Fixed(self.frame.height));

        if self.progress < 1.0 {
            if let Some(previous) = self
                .carousel
                .previous_index()
                .and_then(|index| self.slides.get(index))
            {
                frame = frame.push(previous.view(1.0));
            }
        }
        if let Some(current) = self.slides.get(self.carousel.index()) {
            frame = frame.push(current.view(self.progress));
        }

        if !self.has_controls || self.slides.is_empty() {
            return frame.into();
        }

        iced::widget::Column::new()
            .push(frame)
            .push(self.controls(i18n))
            .into()
    }

    fn controls<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let index = self.carousel.index();
        let description = self
            .slides
            .get(index)
            .map(|slide| slide.asset().description.as_str())
            .unwrap_or_default();
        let current = (index + 1).to_string();
        let total = self.slides.len().to_string();
        let counter = i18n.tr_with_args(
            "slideshow-counter",
            &[("current", current.as_str()), ("total", total.as_str())],
        );

        let previous = button(text(i18n.tr("slideshow-previous")).size(typography::BODY))
            .on_press(Message::Previous)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT));
        let next = button(text(i18n.tr("slideshow-next")).size(typography::BODY))
            .on_press(Message::Next)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT));

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(previous)
            .push(
                container(text(description).size(typography::BODY).color(palette::GRAY_700))
                    .width(Length::Fill),
            )
            .push(text(counter).size(typography::CAPTION).color(palette::GRAY_400))
            .push(next);

        container(row)
            .width(Length::Fixed(self.frame.width))
            .height(Length::Fixed(sizing::SLIDESHOW_CONTROLS_HEIGHT))
            .align_y(Vertical::Center)
            .into()
    }
}
