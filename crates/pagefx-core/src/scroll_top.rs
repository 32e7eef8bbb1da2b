#![forbid(unsafe_code)]

//! Scroll-to-top control visibility.
//!
//! The control is shown once the page has scrolled strictly past a fixed
//! threshold and hidden otherwise. There is no hysteresis and no debouncing:
//! every scroll notification is decided on its own.

use crate::view::{View, Visibility};

/// Offset (CSS pixels) the page must scroll past before the control shows.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 20.0;

/// Vertical scroll offsets reported by the host for one scroll notification.
///
/// Standards-mode documents scroll the root element; quirks-mode documents
/// scroll `<body>`. Whichever one is actually moving wins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffsets {
    /// `document.body.scrollTop`.
    pub body: f64,
    /// `document.documentElement.scrollTop`.
    pub document_element: f64,
}

impl ScrollOffsets {
    /// Offsets for a document where only the root element scrolls.
    #[must_use]
    pub const fn vertical(offset: f64) -> Self {
        Self {
            body: 0.0,
            document_element: offset,
        }
    }

    /// The larger of the two offsets. NaN counts as `0`.
    #[must_use]
    pub fn effective(&self) -> f64 {
        let body = if self.body.is_nan() { 0.0 } else { self.body };
        let root = if self.document_element.is_nan() {
            0.0
        } else {
            self.document_element
        };
        body.max(root)
    }
}

/// The scroll-to-top control and its threshold.
#[derive(Debug, Clone)]
pub struct ScrollTopToggle<E> {
    button: E,
    threshold: f64,
}

impl<E> ScrollTopToggle<E> {
    #[must_use]
    pub fn new(button: E, threshold: f64) -> Self {
        Self { button, threshold }
    }

    #[must_use]
    pub fn button(&self) -> &E {
        &self.button
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Decide the control's visibility for the given offsets.
    #[must_use]
    pub fn visibility_for(&self, offsets: ScrollOffsets) -> Visibility {
        Visibility::from_shown(offsets.effective() > self.threshold)
    }

    /// Apply the visibility decision for `offsets` to the control.
    pub fn on_scroll<V>(&self, view: &mut V, offsets: ScrollOffsets) -> Visibility
    where
        V: View<Element = E>,
    {
        let visibility = self.visibility_for(offsets);
        view.set_visible(&self.button, visibility.is_shown());
        visibility
    }

    /// Request a smooth scroll back to the top of the page.
    pub fn on_click<V>(&self, view: &mut V)
    where
        V: View<Element = E>,
    {
        view.scroll_to_origin();
    }
}
