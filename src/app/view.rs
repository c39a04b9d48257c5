// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page and footer scroll together; the navigation bar floats above
//! them and is left out while hidden. The page scrollable sits in a keyed
//! column keyed by screen, so switching pages starts the new page at the top.

use super::{Message, Screen};
use crate::app::i18n::fluent::I18n;
use crate::content::ContactDetails;
use crate::ui::design_tokens::palette;
use crate::ui::footer::Footer;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::pages::Page;
use iced::widget::{container, keyed_column, scrollable, Column, Stack};
use iced::{Background, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub page: &'a Page,
    pub footer: &'a Footer,
    pub contact: &'a ContactDetails,
    pub navbar_hidden: bool,
    pub menu_open: bool,
    /// Window width, for folding the navbar.
    pub width: f32,
}

/// Renders the current page with its footer and the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .width(Length::Fill)
        .push(ctx.page.view(ctx.i18n).map(Message::Page))
        .push(ctx.footer.view(ctx.i18n, ctx.contact).map(Message::Footer));

    let page = scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport| Message::Scrolled {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        });

    let keyed = keyed_column(std::iter::once((ctx.screen, Element::from(page))))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(keyed);

    if !ctx.navbar_hidden {
        layers = layers.push(
            navbar::view(NavbarViewContext {
                i18n: ctx.i18n,
                screen: ctx.screen,
                width: ctx.width,
                menu_open: ctx.menu_open,
            })
            .map(Message::Navbar),
        );
    }

    container(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::WHITE)),
            ..Default::default()
        })
        .into()
}
