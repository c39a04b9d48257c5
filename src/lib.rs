// SPDX-License-Identifier: MPL-2.0
//! `photofolio` is a photography portfolio viewer built with the Iced GUI framework.
//!
//! Images load progressively (preview, medium, large) as they come near the
//! viewport and cross-fade between tiers, with the crop centred on each
//! photograph's focus point.

#![doc(html_root_url = "https://docs.rs/photofolio/0.1.0")]

pub mod app;
pub mod content;
pub mod error;
pub mod logging;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
