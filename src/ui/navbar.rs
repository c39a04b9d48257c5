// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar floats over the top of the page with one entry per page. It
//! slides out of the way while the visitor scrolls down and comes back as
//! soon as they scroll up. On narrow windows the entries fold into a menu.

use crate::app::i18n::fluent::I18n;
use crate::app::Screen;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Text},
    Background, Border, Element, Length, Theme,
};

/// Above the fold the bar is always shown.
pub const ALWAYS_SHOWN_BELOW_PX: f32 = 100.0;

/// Downward scroll needed in one step to hide the bar.
pub const HIDE_DELTA_PX: f32 = 5.0;

/// Upward scroll needed in one step to show it again.
pub const SHOW_DELTA_PX: f32 = 2.0;

/// Windows narrower than this get the folded menu.
pub const COLLAPSE_BELOW_PX: f32 = 500.0;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    /// Current window width.
    pub width: f32,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenHome,
    OpenPortfolio,
    ToggleMenu,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SwitchScreen(Screen),
    ToggleMenu,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, current: Screen) -> Event {
    let target = match message {
        Message::OpenHome => Screen::Home,
        Message::OpenPortfolio => Screen::Portfolio,
        Message::ToggleMenu => return Event::ToggleMenu,
    };
    if target == current {
        Event::None
    } else {
        Event::SwitchScreen(target)
    }
}

pub fn is_collapsed(width: f32) -> bool {
    width > 0.0 && width < COLLAPSE_BELOW_PX
}

/// Scroll-driven visibility of the bar and the folded menu.
#[derive(Debug, Clone)]
pub struct NavbarState {
    hidden: bool,
    last_offset: f32,
    menu_open: bool,
}

impl Default for NavbarState {
    fn default() -> Self {
        Self {
            hidden: false,
            last_offset: 0.0,
            menu_open: false,
        }
    }
}

impl NavbarState {
    /// Feeds the new vertical scroll offset. Returns true if visibility
    /// changed.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        let was_hidden = self.hidden;
        let delta = offset - self.last_offset;

        if offset < ALWAYS_SHOWN_BELOW_PX {
            self.hidden = false;
        } else if delta > HIDE_DELTA_PX {
            self.hidden = true;
        } else if -delta > SHOW_DELTA_PX {
            self.hidden = false;
        }

        self.last_offset = offset;
        if self.hidden {
            self.menu_open = false;
        }
        was_hidden != self.hidden
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Forgets the scroll position and closes the menu, as after switching
    /// pages.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let home = build_link(
        ctx.i18n.tr("nav-home"),
        Message::OpenHome,
        ctx.screen == Screen::Home,
    );
    let portfolio = build_link(
        ctx.i18n.tr("nav-portfolio"),
        Message::OpenPortfolio,
        ctx.screen == Screen::Portfolio,
    );
    let collapsed = is_collapsed(ctx.width);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .push(
            Text::new(ctx.i18n.tr("window-title"))
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        );

    let mut bar = Column::new().width(Length::Fill);
    if collapsed {
        row = row.push(build_link(
            ctx.i18n.tr("nav-menu"),
            Message::ToggleMenu,
            ctx.menu_open,
        ));
        bar = bar.push(row);
        if ctx.menu_open {
            bar = bar.push(
                Column::new()
                    .spacing(spacing::XXS)
                    .padding([spacing::XS, spacing::MD])
                    .push(home)
                    .push(portfolio),
            );
        }
    } else {
        bar = bar.push(row.push(home).push(portfolio));
    }

    Container::new(bar)
        .width(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::WHITE)),
            text_color: Some(palette::GRAY_900),
            border: Border {
                width: 1.0,
                color: palette::GRAY_100,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn build_link<'a>(label: String, message: Message, active: bool) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(move |theme: &Theme, status| link_style(theme, status, active))
        .into()
}

/// Style function for page links.
fn link_style(_theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let text_color = match status {
        _ if active => palette::BLACK,
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_700,
        button::Status::Active | button::Status::Disabled => palette::GRAY_400,
    };
    button::Style {
        background: None,
        text_color,
        border: Border {
            width: if active { 1.0 } else { 0.0 },
            color: palette::GRAY_900,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            screen: Screen::Portfolio,
            width: 1200.0,
            menu_open: false,
        });
        let _folded = view(ViewContext {
            i18n: &i18n,
            screen: Screen::Home,
            width: 400.0,
            menu_open: true,
        });
    }

    #[test]
    fn narrow_windows_fold_the_links() {
        assert!(is_collapsed(COLLAPSE_BELOW_PX - 1.0));
        assert!(!is_collapsed(COLLAPSE_BELOW_PX));
        // Unknown size keeps the full bar.
        assert!(!is_collapsed(0.0));
        assert_eq!(update(Message::ToggleMenu, Screen::Home), Event::ToggleMenu);
    }

    #[test]
    fn menu_closes_when_bar_hides_or_resets() {
        let mut bar = NavbarState::default();
        bar.toggle_menu();
        assert!(bar.is_menu_open());
        bar.on_scroll(300.0);
        assert!(!bar.is_menu_open());

        bar.toggle_menu();
        bar.reset();
        assert!(!bar.is_menu_open());
    }

    #[test]
    fn switching_to_current_page_is_ignored() {
        assert_eq!(update(Message::OpenHome, Screen::Home), Event::None);
        assert_eq!(
            update(Message::OpenPortfolio, Screen::Home),
            Event::SwitchScreen(Screen::Portfolio)
        );
    }

    #[test]
    fn always_shown_near_top() {
        let mut bar = NavbarState::default();
        assert!(!bar.on_scroll(90.0));
        assert!(!bar.is_hidden());
    }

    #[test]
    fn hides_on_scroll_down_and_shows_on_scroll_up() {
        let mut bar = NavbarState::default();
        bar.on_scroll(200.0);
        assert!(bar.is_hidden());

        // Small jitter keeps the current state.
        assert!(!bar.on_scroll(204.0));
        assert!(!bar.on_scroll(202.0));
        assert!(bar.is_hidden());

        assert!(bar.on_scroll(199.0));
        assert!(!bar.is_hidden());
    }

    #[test]
    fn returning_above_threshold_shows_bar() {
        let mut bar = NavbarState::default();
        bar.on_scroll(500.0);
        assert!(bar.is_hidden());
        bar.on_scroll(499.0);
        assert!(bar.is_hidden());
        assert!(bar.on_scroll(50.0));
    }
}
