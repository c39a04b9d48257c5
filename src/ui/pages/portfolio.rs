// SPDX-License-Identifier: MPL-2.0
//! Portfolio page: one titled gallery per album, in the order written.

use super::{content_padding, content_width, Message, PageOptions, CONTENT_TOP, SECTION_SPACING};
use crate::app::i18n::fluent::I18n;
use crate::content::PortfolioContent;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::gallery::Gallery;
use crate::ui::lazy_image::{self, Effect};
use crate::ui::state::{InstanceId, ListenerRegistry, ScrollViewport};
use iced::alignment::Vertical;
use iced::widget::{container, text, Column};
use iced::{Element, Length, Point, Size};
use std::time::Instant;

#[derive(Debug)]
struct AlbumSection {
    name: String,
    gallery: Gallery,
}

#[derive(Debug)]
pub struct PortfolioPage {
    albums: Vec<AlbumSection>,
}

impl PortfolioPage {
    pub fn new(registry: &ListenerRegistry, content: &PortfolioContent, options: &PageOptions) -> Self {
        let albums = content
            .albums
            .iter()
            .map(|album| AlbumSection {
                name: album.name.clone(),
                gallery: Gallery::new(registry, &album.photos, options.image),
            })
            .collect();
        Self { albums }
    }

    pub fn album_names(&self) -> impl Iterator<Item = &str> {
        self.albums.iter().map(|album| album.name.as_str())
    }

    pub fn gallery(&self, album: usize) -> Option<&Gallery> {
        self.albums.get(album).map(|section| &section.gallery)
    }

    pub(super) fn layout(&mut self, viewport: Size) -> Vec<(InstanceId, Effect)> {
        let width = content_width(viewport.width);
        let mut y = CONTENT_TOP;
        let mut effects = Vec::new();
        for section in &mut self.albums {
            y += sizing::ALBUM_HEADER_HEIGHT;
            effects.extend(section.gallery.layout(width, Point::new(spacing::MD, y)));
            y += section.gallery.height() + SECTION_SPACING;
        }
        effects
    }

    pub(super) fn viewport_changed(
        &mut self,
        viewport: &ScrollViewport,
        registry: &ListenerRegistry,
        now: Instant,
    ) -> Vec<(InstanceId, Effect)> {
        self.albums
            .iter_mut()
            .flat_map(|section| section.gallery.viewport_changed(viewport, registry, now))
            .collect()
    }

    pub(super) fn route(
        &mut self,
        id: InstanceId,
        message: lazy_image::Message,
        now: Instant,
    ) -> Option<Vec<Effect>> {
        let section = self
            .albums
            .iter_mut()
            .find(|section| section.gallery.ids().any(|tile| tile == id))?;
        section.gallery.update(id, message, now)
    }

    pub(super) fn tick(&mut self, now: Instant) -> bool {
        self.albums
            .iter_mut()
            .fold(false, |animating, section| section.gallery.tick(now) || animating)
    }

    pub(super) fn is_animating(&self) -> bool {
        self.albums.iter().any(|section| section.gallery.is_animating())
    }

    pub(super) fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        if self.albums.is_empty() {
            return container(
                text(i18n.tr("portfolio-empty"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
            .padding(content_padding())
            .into();
        }

        let sections = self.albums.iter().map(|section| -> Element<'a, Message> {
            let header = container(
                text(section.name.as_str())
                    .size(typography::TITLE_MD)
                    .color(palette::GRAY_900),
            )
            .height(Length::Fixed(sizing::ALBUM_HEADER_HEIGHT))
            .align_y(Vertical::Center);

            Column::new()
                .push(header)
                .push(section.gallery.view())
                .into()
        });

        Column::with_children(sections)
            .spacing(SECTION_SPACING)
            .width(Length::Fill)
            .padding(content_padding())
            .into()
    }
}
