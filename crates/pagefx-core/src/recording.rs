#![forbid(unsafe_code)]

//! A [`View`] that records every request instead of touching a document.
//!
//! Used by native tests and by hosts that want to replay or assert on the
//! controller's output without a DOM.

use crate::view::{View, Visibility};

/// One request issued by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall<E> {
    SetVisible { element: E, visible: bool },
    ScrollToOrigin,
    ScrollIntoView { element: E },
}

/// Captured view requests plus the resulting per-element visibility.
#[derive(Debug, Clone)]
pub struct RecordingView<E> {
    calls: Vec<ViewCall<E>>,
    visibility: Vec<(E, Visibility)>,
}

impl<E> Default for RecordingView<E> {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            visibility: Vec::new(),
        }
    }
}

impl<E: Clone + PartialEq> RecordingView<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request in issue order.
    #[must_use]
    pub fn calls(&self) -> &[ViewCall<E>] {
        &self.calls
    }

    /// Drop recorded calls. Visibility state is kept.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Last visibility applied to `element`, if any.
    #[must_use]
    pub fn visibility_of(&self, element: &E) -> Option<Visibility> {
        self.visibility
            .iter()
            .find(|(known, _)| known == element)
            .map(|(_, visibility)| *visibility)
    }

    /// Elements among `elements` currently shown.
    #[must_use]
    pub fn shown_among<'a>(&self, elements: &'a [E]) -> Vec<&'a E> {
        elements
            .iter()
            .filter(|element| self.visibility_of(element) == Some(Visibility::Shown))
            .collect()
    }

    /// Number of scroll-into-view requests that targeted `element`.
    #[must_use]
    pub fn scroll_into_view_count(&self, element: &E) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, ViewCall::ScrollIntoView { element: e } if e == element))
            .count()
    }

    /// Number of scroll requests of either kind.
    #[must_use]
    pub fn total_scroll_requests(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| !matches!(call, ViewCall::SetVisible { .. }))
            .count()
    }
}

impl<E: Clone + PartialEq> View for RecordingView<E> {
    type Element = E;

    fn set_visible(&mut self, element: &E, visible: bool) {
        let state = Visibility::from_shown(visible);
        match self.visibility.iter_mut().find(|(known, _)| known == element) {
            Some((_, slot)) => *slot = state,
            None => self.visibility.push((element.clone(), state)),
        }
        self.calls.push(ViewCall::SetVisible {
            element: element.clone(),
            visible,
        });
    }

    fn scroll_to_origin(&mut self) {
        self.calls.push(ViewCall::ScrollToOrigin);
    }

    fn scroll_into_view(&mut self, element: &E) {
        self.calls.push(ViewCall::ScrollIntoView {
            element: element.clone(),
        });
    }
}
