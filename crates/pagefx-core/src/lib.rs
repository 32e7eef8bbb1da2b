#![forbid(unsafe_code)]

//! `pagefx-core` is the platform-independent half of the page interaction
//! controller.
//!
//! Three behaviors, none of which share state:
//! - **Scroll-to-top**: show a control once the page has scrolled past a
//!   threshold, and scroll back to the origin when it is clicked.
//! - **Slideshows**: any number of independent slideshow instances, each
//!   cycling a 1-based position with wraparound.
//! - **Smooth-scroll anchors**: intercept `#fragment` links and scroll the
//!   target into view instead of jumping.
//!
//! The host (the `pagefx-web` crate in a browser, [`recording::RecordingView`]
//! in tests) resolves elements up front, hands them over as
//! [`PageBindings`], and forwards events to [`PageController`]. All side
//! effects go through the [`View`] trait.

pub mod anchors;
pub mod config;
pub mod controller;
pub mod recording;
pub mod scroll_top;
pub mod slideshow;
pub mod view;

pub use anchors::{AnchorBinder, AnchorBinding, AnchorClick, parse_fragment};
pub use config::{ConfigError, PageConfig};
pub use controller::{PageBindings, PageController, SlideshowBinding};
pub use scroll_top::{DEFAULT_SCROLL_THRESHOLD, ScrollOffsets, ScrollTopToggle};
pub use slideshow::{SlideshowInstance, SlideshowRegistry};
pub use view::{View, Visibility};
