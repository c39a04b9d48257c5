// SPDX-License-Identifier: MPL-2.0
//! Contact footer shown at the bottom of every page.
//!
//! Clicking the e-mail address copies it to the clipboard and shows a
//! "Copied ..." indicator for a few seconds.

use crate::app::config::COPY_INDICATOR_MS;
use crate::app::i18n::fluent::I18n;
use crate::content::ContactDetails;
use crate::ui::design_tokens::{palette, spacing, typography};
use chrono::Datelike;
use iced::alignment::Horizontal;
use iced::widget::{button, container, text, Column};
use iced::{Element, Length, Task};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    CopyEmail,
}

#[derive(Debug, Clone)]
pub struct Footer {
    copied: Option<String>,
    hide_at: Option<Instant>,
    year: i32,
}

impl Default for Footer {
    fn default() -> Self {
        Self::new(chrono::Local::now().year())
    }
}

impl Footer {
    pub fn new(year: i32) -> Self {
        Self {
            copied: None,
            hide_at: None,
            year,
        }
    }

    pub fn update<M: Send + 'static>(
        &mut self,
        message: Message,
        contact: &ContactDetails,
        now: Instant,
    ) -> Task<M> {
        match message {
            Message::CopyEmail => {
                if contact.email.is_empty() {
                    return Task::none();
                }
                tracing::debug!("copying e-mail address to clipboard");
                self.copied = Some(contact.email.clone());
                // A second click restarts the countdown.
                self.hide_at = Some(now + Duration::from_millis(COPY_INDICATOR_MS));
                iced::clipboard::write(contact.email.clone())
            }
        }
    }

    /// Hides the indicator once its time is up. Returns true while shown.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.hide_at.is_some_and(|deadline| now >= deadline) {
            self.hide_at = None;
        }
        self.is_showing()
    }

    pub fn is_showing(&self) -> bool {
        self.hide_at.is_some()
    }

    pub fn copied(&self) -> Option<&str> {
        self.copied.as_deref()
    }

    pub fn view<'a>(&'a self, i18n: &I18n, contact: &'a ContactDetails) -> Element<'a, Message> {
        let mut column = Column::new()
            .spacing(spacing::XS)
            .padding(spacing::LG)
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        if self.is_showing() {
            if let Some(copied) = &self.copied {
                column = column.push(
                    text(i18n.tr_with_args("footer-copied", &[("email", copied.as_str())]))
                        .size(typography::CAPTION)
                        .color(palette::ACCENT),
                );
            }
        }

        if !contact.email.is_empty() {
            column = column.push(
                button(text(contact.email.as_str()).size(typography::BODY))
                    .on_press(Message::CopyEmail)
                    .style(button::text),
            );
        }

        if let Some(url) = contact.instagram_url() {
            let handle = contact.instagram.trim().trim_start_matches('@');
            column = column.push(
                Column::new()
                    .align_x(Horizontal::Center)
                    .push(
                        text(i18n.tr_with_args("footer-instagram", &[("handle", handle)]))
                            .size(typography::BODY)
                            .color(palette::GRAY_700),
                    )
                    .push(text(url).size(typography::CAPTION).color(palette::ACCENT)),
            );
        }

        let years = contact.copyright_years(self.year);
        column = column.push(
            text(i18n.tr_with_args(
                "footer-copyright",
                &[("years", years.as_str()), ("owner", contact.owner.as_str())],
            ))
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
        );

        container(column).width(Length::Fill).into()
    }
}
