// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Pages
//!
//! - [`pages`] - Home (slideshow and gallery) and Portfolio (one gallery per album)
//!
//! # Components
//!
//! - [`lazy_image`] - Progressive Preview / Medium / Large image with cross-fading layers
//! - [`gallery`] - Masonry grid of lazy images with staggered reveals
//! - [`slideshow`] - Carousel of lazy images gated on Medium availability
//! - [`navbar`] - Auto-hiding navigation bar
//! - [`footer`] - Contact footer with copy-to-clipboard
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Renderer-free state machines (viewport, loading, fades, carousel)
//! - [`layout`] - Gallery and slideshow geometry
//! - [`reveal`] - First-sight fade-in
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod footer;
pub mod gallery;
pub mod layout;
pub mod lazy_image;
pub mod navbar;
pub mod pages;
pub mod reveal;
pub mod slideshow;
pub mod state;
