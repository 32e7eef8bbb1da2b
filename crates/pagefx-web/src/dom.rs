#![forbid(unsafe_code)]

//! DOM implementation of [`View`] and startup binding resolution.
//!
//! Only compiled on `wasm32` targets.

use js_sys::Reflect;
use pagefx_core::{AnchorBinding, PageBindings, PageConfig, ScrollOffsets, SlideshowBinding, View};
use wasm_bindgen::JsCast;
use web_sys::{
    CssStyleDeclaration, Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
    Window,
};

use crate::host::display_value;

/// [`View`] over the live document. Visibility is the inline `display` style.
///
/// Elements are plain [`Element`]s so that SVG/MathML anchor targets scroll
/// like HTML ones.
pub(crate) struct DomView {
    window: Window,
}

impl DomView {
    pub(crate) fn new(window: Window) -> Self {
        Self { window }
    }
}

/// Inline style of `element`; HTML, SVG and MathML elements all carry one.
fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    Reflect::get(element, &"style".into())
        .ok()?
        .dyn_into::<CssStyleDeclaration>()
        .ok()
}

impl View for DomView {
    type Element = Element;

    fn set_visible(&mut self, element: &Element, visible: bool) {
        if let Some(style) = inline_style(element) {
            let _ = style.set_property("display", display_value(visible));
        }
    }

    fn scroll_to_origin(&mut self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&mut self, element: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Current vertical offsets of `<body>` and the root element.
pub(crate) fn read_offsets(document: &Document) -> ScrollOffsets {
    let body = document
        .body()
        .map_or(0.0, |body| f64::from(body.scroll_top()));
    let document_element = document
        .document_element()
        .map_or(0.0, |root| f64::from(root.scroll_top()));
    ScrollOffsets {
        body,
        document_element,
    }
}

fn slides_by_class(document: &Document, class: &str) -> Vec<Element> {
    let collection = document.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|idx| collection.item(idx))
        .collect()
}

/// Anchor triggers with their resolved targets, in document order.
///
/// An invalid selector yields no anchors.
fn anchors_by_selector(document: &Document, selector: &str) -> Vec<AnchorBinding<Element>> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|trigger| {
            let href = trigger.get_attribute("href").unwrap_or_default();
            AnchorBinding::resolve(trigger, &href, |id| document.get_element_by_id(id))
        })
        .collect()
}

/// Resolve every element the controller needs from `document`.
pub(crate) fn resolve_bindings(document: &Document, config: &PageConfig) -> PageBindings<Element> {
    PageBindings {
        scroll_button: document.get_element_by_id(&config.scroll_button_id),
        scroll_threshold: config.scroll_threshold,
        slideshows: config
            .slideshow_classes
            .iter()
            .map(|class| SlideshowBinding::new(class.as_str(), slides_by_class(document, class)))
            .collect(),
        anchors: anchors_by_selector(document, &config.anchor_selector),
    }
}
