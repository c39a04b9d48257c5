// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure state machines behind the widgets: viewport membership, listener
//! registration, tiered loading, fades and the slideshow carousel. None of
//! them touch the renderer, so they are tested without a window.

pub mod carousel;
pub mod fade;
pub mod listeners;
pub mod load_state;
pub mod viewport;

// Re-export commonly used types for convenience
pub use carousel::Carousel;
pub use fade::FadeIn;
pub use listeners::{InstanceId, ListenerGuard, ListenerRegistry};
pub use load_state::{Completion, LoadState, TieredLoader};
pub use viewport::{ExpansionPolicy, ScrollViewport, ViewportTracker};
