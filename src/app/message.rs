// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::footer;
use crate::ui::navbar;
use crate::ui::pages;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Rectangle, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(pages::Message),
    Footer(footer::Message),
    /// The page scrollable moved or changed size.
    Scrolled {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    /// The window was opened or resized.
    WindowResized(Size),
    /// Slideshow auto-advance check.
    Poll(Instant),
    /// Animation frame while fades or transitions are running.
    Frame(Instant),
    /// Periodic tick for the copy indicator.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional content directory override (JSON documents and tier images).
    /// Takes precedence over `PHOTOFOLIO_CONTENT_DIR` environment variable.
    pub content_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PHOTOFOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
