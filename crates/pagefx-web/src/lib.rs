#![forbid(unsafe_code)]

//! WASM front end for the page interaction controller.
//!
//! This crate resolves the page markup into [`pagefx_core::PageBindings`],
//! implements [`pagefx_core::View`] over the live DOM, and registers the
//! scroll/click listeners that forward browser events to the controller.
//!
//! JS surface (wasm32 only):
//! - `installPageInteractions(configJson?)` returns a `PageInteractions`
//!   handle and publishes `window.plusSlides(n, slideshowNo)` for inline
//!   prev/next buttons.
//! - With the `autostart` feature the default configuration is installed as
//!   soon as the module is instantiated.
//!
//! Everything that does not need JS types lives in [`host`] so it can be
//! tested natively.

pub mod host;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{PageInteractions, install_page_interactions};
