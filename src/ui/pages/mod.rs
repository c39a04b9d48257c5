// SPDX-License-Identifier: MPL-2.0
//! Portfolio pages.
//!
//! A [`Page`] owns every image instance it shows. Mounting a page registers
//! its instances; dropping it deregisters them, so completions still in
//! flight for an old page find no recipient and are ignored.
//!
//! Pages are laid out from the top of the scrollable content, below the
//! space reserved for the floating navigation bar.

pub mod home;
pub mod portfolio;

pub use home::HomePage;
pub use portfolio::PortfolioPage;

use crate::app::config::{Config, SlideshowConfig};
use crate::app::i18n::fluent::I18n;
use crate::app::Screen;
use crate::content::Content;
use crate::media::SharedAssetSource;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::lazy_image::{self, Effect, LazyImageOptions};
use crate::ui::slideshow;
use crate::ui::state::{ExpansionPolicy, InstanceId, ListenerRegistry, ScrollViewport};
use iced::{Element, Padding, Task};
use std::time::Instant;

/// Top of the first section in page-content coordinates.
pub const CONTENT_TOP: f32 = sizing::NAVBAR_HEIGHT + spacing::MD;

/// Vertical space between sections.
pub const SECTION_SPACING: f32 = spacing::LG;

/// Width available to sections for a viewport `width`.
pub fn content_width(viewport_width: f32) -> f32 {
    (viewport_width - 2.0 * spacing::MD).max(0.0)
}

pub(crate) fn content_padding() -> Padding {
    Padding {
        top: CONTENT_TOP,
        right: spacing::MD,
        bottom: 0.0,
        left: spacing::MD,
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Fetch or decode completion addressed to one image instance.
    Image {
        id: InstanceId,
        message: lazy_image::Message,
    },
    Slideshow(slideshow::Message),
}

/// Settings applied to every instance a page mounts.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    pub image: LazyImageOptions,
    pub slideshow: SlideshowConfig,
}

impl PageOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            image: LazyImageOptions {
                max_medium_size: config.loading.max_medium_size(),
                fade: config.animation.fade(),
                policy: ExpansionPolicy::lazy_load_with_margin(config.loading.load_margin()),
                ..LazyImageOptions::default()
            },
            slideshow: config.slideshow.clone(),
        }
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Turns instance effects into tasks whose completions are addressed back
/// to the instance that asked.
pub fn into_task(effects: Vec<(InstanceId, Effect)>, source: &SharedAssetSource) -> Task<Message> {
    Task::batch(effects.into_iter().filter_map(|(id, effect)| {
        effect
            .into_task(source)
            .map(|task| task.map(move |message| Message::Image { id, message }))
    }))
}

pub(crate) fn tag(id: InstanceId, effects: Vec<Effect>) -> Vec<(InstanceId, Effect)> {
    effects.into_iter().map(|effect| (id, effect)).collect()
}

#[derive(Debug)]
pub enum Page {
    Home(HomePage),
    Portfolio(PortfolioPage),
}

impl Page {
    /// Mounts the page for `screen`.
    pub fn mount(
        screen: Screen,
        registry: &ListenerRegistry,
        content: &Content,
        options: &PageOptions,
        now: Instant,
    ) -> Self {
        tracing::debug!(?screen, "mounting page");
        match screen {
            Screen::Home => Page::Home(HomePage::new(registry, &content.home, options, now)),
            Screen::Portfolio => {
                Page::Portfolio(PortfolioPage::new(registry, &content.portfolio, options))
            }
        }
    }

    pub fn screen(&self) -> Screen {
        match self {
            Page::Home(_) => Screen::Home,
            Page::Portfolio(_) => Screen::Portfolio,
        }
    }

    /// Recomputes section geometry for the viewport size.
    pub fn layout(&mut self, viewport: &ScrollViewport) -> Vec<(InstanceId, Effect)> {
        if !viewport.is_known() {
            return Vec::new();
        }
        match self {
            Page::Home(page) => page.layout(viewport.size),
            Page::Portfolio(page) => page.layout(viewport.size),
        }
    }

    /// Scroll or resize notification.
    pub fn viewport_changed(
        &mut self,
        viewport: &ScrollViewport,
        registry: &ListenerRegistry,
        now: Instant,
    ) -> Vec<(InstanceId, Effect)> {
        match self {
            Page::Home(page) => page.viewport_changed(viewport, registry, now),
            Page::Portfolio(page) => page.viewport_changed(viewport, registry, now),
        }
    }

    pub fn update(
        &mut self,
        message: Message,
        viewport: &ScrollViewport,
        registry: &ListenerRegistry,
        now: Instant,
    ) -> Vec<(InstanceId, Effect)> {
        match message {
            Message::Image { id, message } => {
                let routed = match self {
                    Page::Home(page) => page.route(id, message, now),
                    Page::Portfolio(page) => page.route(id, message, now),
                };
                routed.map(|effects| tag(id, effects)).unwrap_or_else(|| {
                    tracing::debug!(instance = %id, "ignoring completion for unmounted image");
                    Vec::new()
                })
            }
            Message::Slideshow(message) => match self {
                Page::Home(page) => page.navigate(message, viewport, registry, now),
                Page::Portfolio(_) => Vec::new(),
            },
        }
    }

    /// Slideshow poll tick.
    pub fn poll(
        &mut self,
        viewport: &ScrollViewport,
        registry: &ListenerRegistry,
        now: Instant,
    ) -> Vec<(InstanceId, Effect)> {
        match self {
            Page::Home(page) => page.poll(viewport, registry, now),
            Page::Portfolio(_) => Vec::new(),
        }
    }

    pub fn has_slideshow(&self) -> bool {
        matches!(self, Page::Home(page) if page.has_auto_slideshow())
    }

    /// Advances animations. Returns true while anything is still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self {
            Page::Home(page) => page.tick(now),
            Page::Portfolio(page) => page.tick(now),
        }
    }

    pub fn is_animating(&self) -> bool {
        match self {
            Page::Home(page) => page.is_animating(),
            Page::Portfolio(page) => page.is_animating(),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        match self {
            Page::Home(page) => page.view(i18n),
            Page::Portfolio(page) => page.view(i18n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Album, HomeContent, ImageAsset, PortfolioContent};
    use crate::media::{LoadTier, MemoryAssetSource};
    use iced::widget::scrollable::AbsoluteOffset;
    use iced::{Point, Rectangle, Size};
    use std::sync::Arc;

    fn photo(id: &str) -> ImageAsset {
        ImageAsset {
            file_id: id.into(),
            extension: "jpg".into(),
            width: 1200,
            height: 800,
            description: String::new(),
            focus: None,
        }
    }

    fn content() -> Content {
        Content {
            home: HomeContent {
                slideshow: vec![photo("s0"), photo("s1")],
                photos: vec![photo("h0"), photo("h1")],
            },
            portfolio: PortfolioContent {
                albums: vec![Album {
                    name: "Coast".into(),
                    photos: vec![photo("c0")],
                }],
            },
            ..Content::default()
        }
    }

    fn viewport() -> ScrollViewport {
        let mut viewport = ScrollViewport::default();
        viewport.update(
            Rectangle::new(Point::ORIGIN, Size::new(1024.0, 768.0)),
            AbsoluteOffset { x: 0.0, y: 0.0 },
        );
        viewport
    }

    #[test]
    fn options_follow_config() {
        let mut config = Config::default();
        config.loading.max_medium_size_px = 640.0;
        config.loading.load_margin_px = 0.0;
        let options = PageOptions::from_config(&config);
        assert_eq!(options.image.max_medium_size, 640.0);
        assert_eq!(options.image.policy.margin, 0.0);
    }

    #[test]
    fn mounting_registers_and_dropping_deregisters() {
        let registry = ListenerRegistry::new();
        let page = Page::mount(
            Screen::Home,
            &registry,
            &content(),
            &PageOptions::default(),
            Instant::now(),
        );
        assert_eq!(registry.len(), 4);
        assert_eq!(page.screen(), Screen::Home);
        drop(page);
        assert!(registry.is_empty());
    }

    #[test]
    fn visible_images_request_previews() {
        let registry = ListenerRegistry::new();
        let now = Instant::now();
        let mut page = Page::mount(Screen::Portfolio, &registry, &content(), &PageOptions::default(), now);
        let viewport = viewport();
        page.layout(&viewport);
        let effects = page.viewport_changed(&viewport, &registry, now);
        assert!(effects
            .iter()
            .all(|(_, e)| matches!(e, Effect::Fetch { tier: LoadTier::Preview, .. })));
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn completion_after_page_switch_is_ignored() {
        let registry = ListenerRegistry::new();
        let now = Instant::now();
        let viewport = viewport();
        let mut home = Page::mount(Screen::Home, &registry, &content(), &PageOptions::default(), now);
        home.layout(&viewport);
        let (id, _) = home.viewport_changed(&viewport, &registry, now)[0].clone();

        drop(home);
        let mut portfolio = Page::mount(Screen::Portfolio, &registry, &content(), &PageOptions::default(), now);
        let late = Message::Image {
            id,
            message: lazy_image::Message::Fetched {
                tier: LoadTier::Preview,
                result: Ok(crate::media::AssetBytes::from(vec![1, 2, 3])),
            },
        };
        assert!(portfolio.update(late, &viewport, &registry, now).is_empty());
    }

    #[test]
    fn poll_advances_home_slideshow_once_medium_is_shown() {
        let registry = ListenerRegistry::new();
        let t0 = Instant::now();
        let options = PageOptions::default();
        let viewport = viewport();
        let mut page = Page::mount(Screen::Home, &registry, &content(), &options, t0);
        page.layout(&viewport);
        assert!(page.has_slideshow());

        let slides: Vec<_> = match &page {
            Page::Home(home) => home.slideshow().map(|show| show.slide_ids().collect()),
            Page::Portfolio(_) => None,
        }
        .unwrap_or_default();
        assert_eq!(slides.len(), 2);

        let after_pause = t0 + options.slideshow.pause() + std::time::Duration::from_millis(1);
        assert!(page.poll(&viewport, &registry, after_pause).is_empty());

        for id in &slides {
            let medium = Message::Image {
                id: *id,
                message: lazy_image::Message::Decoded {
                    tier: LoadTier::Medium,
                    result: Ok(crate::media::DecodedImage::from_rgba(1, 1, vec![0; 4])),
                },
            };
            page.update(medium, &viewport, &registry, t0);
        }
        page.poll(&viewport, &registry, after_pause);
        let index = match &page {
            Page::Home(home) => home.slideshow().map(|show| show.carousel().index()),
            Page::Portfolio(_) => None,
        };
        assert_eq!(index, Some(1));
    }

    #[test]
    fn notifications_become_no_tasks() {
        let source: SharedAssetSource = Arc::new(MemoryAssetSource::new());
        let id = ListenerRegistry::new().register().id();
        // Only the fetch becomes a task; MediumShown is consumed by the owner.
        let _task = into_task(
            vec![
                (id, Effect::MediumShown),
                (
                    id,
                    Effect::Fetch {
                        tier: LoadTier::Preview,
                        asset: "a.preview.jpg".into(),
                    },
                ),
            ],
            &source,
        );
    }
}
