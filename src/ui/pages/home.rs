// SPDX-License-Identifier: MPL-2.0
//! Home page: optional slideshow above a gallery.

use super::{content_padding, content_width, Message, PageOptions, CONTENT_TOP, SECTION_SPACING};
use crate::app::i18n::fluent::I18n;
use crate::content::HomeContent;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::gallery::Gallery;
use crate::ui::lazy_image::{self, Effect};
use crate::ui::slideshow::{self, Slideshow};
use crate::ui::state::{InstanceId, ListenerRegistry, ScrollViewport};
use iced::widget::{text, Column};
use iced::{Element, Length, Point, Size};
use std::time::Instant;

#[derive(Debug)]
pub struct HomePage {
    slideshow: Option<Slideshow>,
    gallery: Gallery,
}

impl HomePage {
    pub fn new(
        registry: &ListenerRegistry,
        content: &HomeContent,
        options: &PageOptions,
        now: Instant,
    ) -> Self {
        let slideshow = (!content.slideshow.is_empty()).then(|| {
            Slideshow::new(
                registry,
                &content.slideshow,
                options.image,
                &options.slideshow,
                now,
            )
        });
        Self {
            slideshow,
            gallery: Gallery::new(registry, &content.photos, options.image),
        }
    }

    pub fn slideshow(&self) -> Option<&Slideshow> {
        self.slideshow.as_ref()
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn has_auto_slideshow(&self) -> bool {
        self.slideshow
            .as_ref()
            .is_some_and(|show| show.carousel().auto_advance() && show.carousel().len() > 1)
    }

    pub(super) fn layout(&mut self, viewport: Size) -> Vec<(InstanceId, Effect)> {
        let width = content_width(viewport.width);
        let mut y = CONTENT_TOP;
        let mut effects = Vec::new();

        if let Some(show) = &mut self.slideshow {
            // Keep the whole slideshow, controls included, on one screen.
            let max_height = viewport.height
                - sizing::NAVBAR_HEIGHT
                - 2.0 * spacing::MD
                - sizing::SLIDESHOW_CONTROLS_HEIGHT;
            effects.extend(show.layout(width, max_height.max(1.0), Point::new(spacing::MD, y)));
            y += show.height() + SECTION_SPACING;
        }

        effects.extend(self.gallery.layout(width, Point::new(spacing::MD, y)));
        effects
    }

    pub(super) fn viewport_changed(
        &mut self,
        viewport: &ScrollViewport,
        registry: &ListenerRegistry,
        now: Instant,
    ) -> Vec<(InstanceId, Effect)> {
        let mut effects = Vec::new();
        if let Some(show) = &mut self.slideshow {
            effects.extend(show.viewport_changed(viewport, registry));
        }
        effects.extend(self.gallery.viewport_changed(viewport, registry, now));
        effects
    }

    pub(super) fn route(
        &mut self,
        id: InstanceId,
        message: lazy_image::Message,
        now: Instant,
    ) -> Option<Vec<Effect>> {
        if let Some(show) = &mut self.slideshow {
            if show.slide_ids().any(|slide| slide == id) {
                return show.update(id, message, now);
            }
        }
        self.gallery.update(id, message, now)
    }

    pub(super) fn navigate(
        &mut self,
        message: slideshow::Message,
        viewport: &ScrollViewport,
        registry: &ListenerRegistry,
        now: Instant,
    ) -> Vec<(InstanceId, Effect)> {
        let Some(show) = &mut self.slideshow else {
            return Vec::new();
        };
        if show.handle(message, now) {
            // The track moved: slides near the new position may need loading.
            show.viewport_changed(viewport, registry)
        } else {
            Vec::new()
        }
    }

    pub(super) fn poll(
        &mut self,
        viewport: &ScrollViewport,
        registry: &ListenerRegistry,
        now: Instant,
    ) -> Vec<(InstanceId, Effect)> {
        match &mut self.slideshow {
            Some(show) => {
                if show.poll(now) {
                    show.viewport_changed(viewport, registry)
                } else {
                    Vec::new()
                }
            }
            None => Vec::new(),
        }
    }

    pub(super) fn tick(&mut self, now: Instant) -> bool {
        let slideshow = self.slideshow.as_mut().is_some_and(|show| show.tick(now));
        let gallery = self.gallery.tick(now);
        slideshow || gallery
    }

    pub(super) fn is_animating(&self) -> bool {
        self.slideshow.as_ref().is_some_and(Slideshow::is_animating) || self.gallery.is_animating()
    }

    pub(super) fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new()
            .spacing(SECTION_SPACING)
            .width(Length::Fill)
            .padding(content_padding());

        if let Some(show) = &self.slideshow {
            column = column.push(show.view(i18n).map(Message::Slideshow));
        }

        if self.gallery.is_empty() && self.slideshow.is_none() {
            column = column.push(
                text(i18n.tr("home-empty"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            );
        } else {
            column = column.push(self.gallery.view());
        }
        column.into()
    }
}

