#![forbid(unsafe_code)]

//! The rendering seam between controller logic and the host document.

/// Display state of a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    #[must_use]
    pub const fn from_shown(shown: bool) -> Self {
        if shown { Self::Shown } else { Self::Hidden }
    }

    #[must_use]
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// Side-effect surface the controller drives.
///
/// Implementations perform the request and return immediately; scroll
/// animations are fire-and-forget and nothing observes their completion.
pub trait View {
    /// Host handle for one element (a DOM node, a test id, ...).
    type Element: Clone;

    /// Show or hide `element`.
    fn set_visible(&mut self, element: &Self::Element, visible: bool);

    /// Smoothly scroll the viewport to vertical offset 0.
    fn scroll_to_origin(&mut self);

    /// Smoothly scroll `element` into view.
    fn scroll_into_view(&mut self, element: &Self::Element);
}

impl<V: View + ?Sized> View for &mut V {
    type Element = V::Element;

    fn set_visible(&mut self, element: &Self::Element, visible: bool) {
        (**self).set_visible(element, visible);
    }

    fn scroll_to_origin(&mut self) {
        (**self).scroll_to_origin();
    }

    fn scroll_into_view(&mut self, element: &Self::Element) {
        (**self).scroll_into_view(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_from_shown() {
        assert_eq!(Visibility::from_shown(true), Visibility::Shown);
        assert_eq!(Visibility::from_shown(false), Visibility::Hidden);
        assert!(Visibility::Shown.is_shown());
        assert!(!Visibility::Hidden.is_shown());
    }
}
