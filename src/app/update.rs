// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler that can move an image into view ends by turning the
//! resulting effects into fetch/decode tasks.

use super::{Message, Screen};
use crate::content::Content;
use crate::media::SharedAssetSource;
use crate::ui::footer::{self, Footer};
use crate::ui::lazy_image::Effect;
use crate::ui::navbar::{self, NavbarState, Event as NavbarEvent};
use crate::ui::pages::{self, Page, PageOptions};
use crate::ui::state::{InstanceId, ListenerRegistry, ScrollViewport};
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Rectangle, Size, Task};
use std::time::Instant;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub page: &'a mut Page,
    pub registry: &'a ListenerRegistry,
    pub content: &'a Content,
    pub source: &'a SharedAssetSource,
    pub options: &'a PageOptions,
    pub viewport: &'a mut ScrollViewport,
    pub navbar: &'a mut NavbarState,
    pub footer: &'a mut Footer,
}

fn dispatch(ctx: &UpdateContext<'_>, effects: Vec<(InstanceId, Effect)>) -> Task<Message> {
    if effects.is_empty() {
        return Task::none();
    }
    pages::into_task(effects, ctx.source).map(Message::Page)
}

/// Lays the page out for the current viewport, then rechecks every instance.
pub fn relayout(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let mut effects = ctx.page.layout(ctx.viewport);
    effects.extend(ctx.page.viewport_changed(ctx.viewport, ctx.registry, now));
    dispatch(ctx, effects)
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
    now: Instant,
) -> Task<Message> {
    match navbar::update(message, *ctx.screen) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ToggleMenu => {
            ctx.navbar.toggle_menu();
            Task::none()
        }
        NavbarEvent::SwitchScreen(target) => {
            tracing::debug!(from = ?*ctx.screen, to = ?target, "switching page");
            *ctx.screen = target;
            // The old page is dropped here, releasing its listener guards.
            *ctx.page = Page::mount(target, ctx.registry, ctx.content, ctx.options, now);
            ctx.viewport.reset_offset();
            ctx.navbar.reset();
            relayout(ctx, now)
        }
    }
}

pub fn handle_page_message(
    ctx: &mut UpdateContext<'_>,
    message: pages::Message,
    now: Instant,
) -> Task<Message> {
    let effects = ctx.page.update(message, ctx.viewport, ctx.registry, now);
    dispatch(ctx, effects)
}

pub fn handle_footer_message(
    ctx: &mut UpdateContext<'_>,
    message: footer::Message,
    now: Instant,
) -> Task<Message> {
    ctx.footer.update(message, &ctx.content.contact, now)
}

pub fn handle_scrolled(
    ctx: &mut UpdateContext<'_>,
    bounds: Rectangle,
    offset: AbsoluteOffset,
    now: Instant,
) -> Task<Message> {
    let resized = ctx.viewport.update(bounds, offset);
    if ctx.navbar.on_scroll(offset.y) {
        tracing::trace!(hidden = ctx.navbar.is_hidden(), "navbar visibility changed");
    }

    if resized {
        relayout(ctx, now)
    } else {
        let effects = ctx.page.viewport_changed(ctx.viewport, ctx.registry, now);
        dispatch(ctx, effects)
    }
}

pub fn handle_window_resized(
    ctx: &mut UpdateContext<'_>,
    size: Size,
    now: Instant,
) -> Task<Message> {
    // The scrollable reports its own bounds on the next scroll event; until
    // then the window size is the best estimate.
    if ctx.viewport.set_size(size) {
        relayout(ctx, now)
    } else {
        Task::none()
    }
}

pub fn handle_poll(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let effects = ctx.page.poll(ctx.viewport, ctx.registry, now);
    dispatch(ctx, effects)
}
