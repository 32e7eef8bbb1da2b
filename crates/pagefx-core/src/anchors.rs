#![forbid(unsafe_code)]

//! Smooth-scroll anchor interception.
//!
//! Triggers are links carrying a marker (`a.smooth-scroll` in the DOM host)
//! whose `href` is a fragment reference such as `#section1`. Targets are
//! resolved once by the host; a click always suppresses the default jump and
//! scrolls the target into view when there is one.

use tracing::debug;

use crate::view::View;

/// Extract the element id from a fragment reference.
///
/// `"#section1"` yields `Some("section1")`. Anything that is not a single
/// non-empty `#id` token yields `None`.
#[must_use]
pub fn parse_fragment(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() || id.chars().any(char::is_whitespace) {
        return None;
    }
    Some(id)
}

/// One trigger and the element it scrolls to, if that element exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorBinding<E> {
    pub trigger: E,
    pub target: Option<E>,
}

impl<E> AnchorBinding<E> {
    #[must_use]
    pub fn new(trigger: E, target: Option<E>) -> Self {
        Self { trigger, target }
    }

    /// Build a binding by looking the trigger's `href` up with `resolve`.
    pub fn resolve<F>(trigger: E, href: &str, resolve: F) -> Self
    where
        F: FnOnce(&str) -> Option<E>,
    {
        let target = parse_fragment(href).and_then(resolve);
        Self { trigger, target }
    }
}

/// Result of handling one anchor click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorClick {
    /// The host must cancel the browser's default navigation.
    pub suppress_default: bool,
    /// A scroll-into-view request was issued.
    pub scrolled: bool,
}

impl AnchorClick {
    const IGNORED: Self = Self {
        suppress_default: false,
        scrolled: false,
    };
}

/// All anchor bindings on the page, in document order.
#[derive(Debug, Clone)]
pub struct AnchorBinder<E> {
    bindings: Vec<AnchorBinding<E>>,
}

impl<E> Default for AnchorBinder<E> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }
}

impl<E> AnchorBinder<E> {
    #[must_use]
    pub fn new(bindings: Vec<AnchorBinding<E>>) -> Self {
        Self { bindings }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AnchorBinding<E>> {
        self.bindings.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnchorBinding<E>> {
        self.bindings.iter()
    }

    /// Number of bindings whose target resolved.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.bindings.iter().filter(|b| b.target.is_some()).count()
    }

    /// Handle a click on binding `index`.
    ///
    /// An unknown index is not one of ours, so the default action is left
    /// alone.
    pub fn on_click<V>(&self, view: &mut V, index: usize) -> AnchorClick
    where
        V: View<Element = E>,
    {
        let Some(binding) = self.bindings.get(index) else {
            return AnchorClick::IGNORED;
        };
        let Some(target) = binding.target.as_ref() else {
            return AnchorClick {
                suppress_default: true,
                scrolled: false,
            };
        };
        view.scroll_into_view(target);
        debug!(anchor = index, "smooth scroll to anchor target");
        AnchorClick {
            suppress_default: true,
            scrolled: true,
        }
    }
}
