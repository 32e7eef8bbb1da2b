#![forbid(unsafe_code)]

//! The page interaction controller.
//!
//! [`PageController`] owns the view, the optional scroll-to-top control, the
//! slideshow registry and the anchor bindings. The host resolves elements
//! before construction ([`PageBindings`]) and afterwards only forwards events;
//! the controller never looks anything up on its own.

use tracing::debug;

use crate::anchors::{AnchorBinder, AnchorBinding, AnchorClick};
use crate::scroll_top::{DEFAULT_SCROLL_THRESHOLD, ScrollOffsets, ScrollTopToggle};
use crate::slideshow::{SlideshowInstance, SlideshowRegistry};
use crate::view::{View, Visibility};

/// Slides collected for one slideshow identifier.
#[derive(Debug, Clone)]
pub struct SlideshowBinding<E> {
    pub name: String,
    pub slides: Vec<E>,
}

impl<E> SlideshowBinding<E> {
    #[must_use]
    pub fn new(name: impl Into<String>, slides: Vec<E>) -> Self {
        Self {
            name: name.into(),
            slides,
        }
    }
}

/// Everything the host resolved from the document at startup.
#[derive(Debug, Clone)]
pub struct PageBindings<E> {
    /// The scroll-to-top control, if the page has one.
    pub scroll_button: Option<E>,
    pub scroll_threshold: f64,
    /// Slideshows in instance-index order.
    pub slideshows: Vec<SlideshowBinding<E>>,
    pub anchors: Vec<AnchorBinding<E>>,
}

impl<E> Default for PageBindings<E> {
    fn default() -> Self {
        Self {
            scroll_button: None,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            slideshows: Vec::new(),
            anchors: Vec::new(),
        }
    }
}

/// Drives the three page behaviors through a [`View`].
pub struct PageController<V: View> {
    view: V,
    scroll_top: Option<ScrollTopToggle<V::Element>>,
    slideshows: SlideshowRegistry<V::Element>,
    anchors: AnchorBinder<V::Element>,
}

impl<V: View> PageController<V> {
    /// Take ownership of the bindings and render every slideshow on its
    /// first slide.
    pub fn new(mut view: V, bindings: PageBindings<V::Element>) -> Self {
        let PageBindings {
            scroll_button,
            scroll_threshold,
            slideshows: slideshow_bindings,
            anchors,
        } = bindings;

        let scroll_top = scroll_button.map(|button| ScrollTopToggle::new(button, scroll_threshold));

        let mut slideshows = SlideshowRegistry::new();
        for binding in slideshow_bindings {
            slideshows.register(SlideshowInstance::new(binding.name, binding.slides));
        }
        slideshows.render_all(&mut view);

        let anchors = AnchorBinder::new(anchors);

        debug!(
            scroll_button = scroll_top.is_some(),
            slideshows = slideshows.len(),
            anchors = anchors.len(),
            resolved_anchors = anchors.resolved_count(),
            "page controller initialized"
        );

        Self {
            view,
            scroll_top,
            slideshows,
            anchors,
        }
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn into_view(self) -> V {
        self.view
    }

    /// Whether a scroll-to-top control was bound.
    #[must_use]
    pub fn has_scroll_button(&self) -> bool {
        self.scroll_top.is_some()
    }

    #[must_use]
    pub fn slideshows(&self) -> &SlideshowRegistry<V::Element> {
        &self.slideshows
    }

    #[must_use]
    pub fn anchors(&self) -> &AnchorBinder<V::Element> {
        &self.anchors
    }

    /// Scroll notification: show or hide the control.
    ///
    /// Returns `None` when the page has no control.
    pub fn on_scroll(&mut self, offsets: ScrollOffsets) -> Option<Visibility> {
        let toggle = self.scroll_top.as_ref()?;
        Some(toggle.on_scroll(&mut self.view, offsets))
    }

    /// Control clicked: scroll back to the top. Returns whether a request was
    /// issued.
    pub fn on_scroll_top_click(&mut self) -> bool {
        let Some(toggle) = self.scroll_top.as_ref() else {
            return false;
        };
        toggle.on_click(&mut self.view);
        true
    }

    /// External advance entry point (`plusSlides(delta, instance)`).
    pub fn advance_slides(&mut self, delta: i64, instance: usize) -> Option<usize> {
        self.slideshows.advance(&mut self.view, delta, instance)
    }

    /// Current 1-based position of slideshow `instance`.
    #[must_use]
    pub fn slide_position(&self, instance: usize) -> Option<usize> {
        self.slideshows.position(instance)
    }

    /// Anchor binding `index` clicked.
    pub fn on_anchor_click(&mut self, index: usize) -> AnchorClick {
        self.anchors.on_click(&mut self.view, index)
    }
}
