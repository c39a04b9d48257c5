// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events are always listened to so the viewport size stays current on
//! every page. The slideshow is only polled on the page that has one, and the
//! frame/indicator ticks only run while there is something to animate or hide.

use super::Message;
use crate::app::config::{ANIMATION_FRAME_MS, INDICATOR_TICK_MS};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Window open/resize events, feeding viewport recomputation.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Slideshow auto-advance checks.
pub fn create_poll_subscription(enabled: bool, interval: Duration) -> Subscription<Message> {
    if enabled {
        time::every(interval).map(Message::Poll)
    } else {
        Subscription::none()
    }
}

/// Animation frames while fades, reveals or slide transitions run.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(ANIMATION_FRAME_MS)).map(Message::Frame)
    } else {
        Subscription::none()
    }
}

/// Periodic tick that hides the copy indicator on time.
pub fn create_tick_subscription(indicator_shown: bool) -> Subscription<Message> {
    if indicator_shown {
        time::every(Duration::from_millis(INDICATOR_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
