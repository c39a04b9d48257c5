// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between pages, navigation and
//! the footer.
//!
//! The `App` struct owns the loaded content, the asset source and the listener
//! registry, and translates messages into fetch/decode tasks for the page that
//! is currently mounted.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::content::Content;
use crate::media::{FsAssetSource, SharedAssetSource};
use crate::ui::footer::Footer;
use crate::ui::navbar::NavbarState;
use crate::ui::pages::{Page, PageOptions};
use crate::ui::state::{ListenerRegistry, ScrollViewport};
use config::Config;
use i18n::fluent::I18n;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    page: Page,
    registry: ListenerRegistry,
    content: Content,
    source: SharedAssetSource,
    options: PageOptions,
    poll_interval: Duration,
    viewport: ScrollViewport,
    navbar: NavbarState,
    footer: Footer,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("listeners", &self.registry.len())
            .field("viewport", &self.viewport.size)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// `content` is loaded beforehand so that a broken content directory stops the
/// program before any window opens.
pub fn run(flags: Flags, content: Content) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an Fn boot closure; the startup data is consumed once.
    let boot_state = RefCell::new(Some((flags, content)));
    let boot = move || {
        let (flags, content) = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, content)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the CLI flags and loaded content.
    fn new(flags: Flags, content: Content) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(key) = &config_warning {
            tracing::warn!(key = %key, "using default settings");
        }

        let i18n = I18n::new(flags.lang.clone(), &config);
        let source: SharedAssetSource = Arc::new(FsAssetSource::new(paths::get_content_dir()));
        tracing::info!(
            locale = %i18n.current_locale(),
            content_dir = %paths::get_content_dir().display(),
            "starting photofolio"
        );

        let mut app = Self::with_parts(i18n, config, content, source);
        // The first window event may arrive after the first scroll event;
        // start from the size the window is opened with.
        app.viewport.set_size(default_window_size());
        let task = update::relayout(&mut app.context(), Instant::now());
        (app, task)
    }

    /// Assembles an app around an already-resolved configuration.
    pub(crate) fn with_parts(
        i18n: I18n,
        config: Config,
        content: Content,
        source: SharedAssetSource,
    ) -> Self {
        let registry = ListenerRegistry::new();
        let options = PageOptions::from_config(&config);
        let screen = Screen::default();
        let page = Page::mount(screen, &registry, &content, &options, Instant::now());

        Self {
            i18n,
            screen,
            page,
            registry,
            content,
            source,
            options,
            poll_interval: config.slideshow.poll_interval(),
            viewport: ScrollViewport::default(),
            navbar: NavbarState::default(),
            footer: Footer::default(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_poll_subscription(self.page.has_slideshow(), self.poll_interval),
            subscription::create_frame_subscription(self.page.is_animating()),
            subscription::create_tick_subscription(self.footer.is_showing()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        let mut ctx = self.context();

        match message {
            Message::Navbar(message) => update::handle_navbar_message(&mut ctx, message, now),
            Message::Page(message) => update::handle_page_message(&mut ctx, message, now),
            Message::Footer(message) => update::handle_footer_message(&mut ctx, message, now),
            Message::Scrolled { bounds, offset } => {
                update::handle_scrolled(&mut ctx, bounds, offset, now)
            }
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size, now),
            Message::Poll(now) => update::handle_poll(&mut ctx, now),
            Message::Frame(now) => {
                ctx.page.tick(now);
                Task::none()
            }
            Message::Tick(now) => {
                ctx.footer.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            page: &self.page,
            footer: &self.footer,
            contact: &self.content.contact,
            navbar_hidden: self.navbar.is_hidden(),
            menu_open: self.navbar.is_menu_open(),
            width: self.viewport.size.width,
        })
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            page: &mut self.page,
            registry: &self.registry,
            content: &self.content,
            source: &self.source,
            options: &self.options,
            viewport: &mut self.viewport,
            navbar: &mut self.navbar,
            footer: &mut self.footer,
        }
    }
}
