#![cfg(target_arch = "wasm32")]
#![forbid(unsafe_code)]

use js_sys::{Function, Reflect};
use pagefx_web::install_page_interactions;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element, Event, EventInit, HtmlElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().expect("browser window")
}

fn document() -> Document {
    window().document().expect("browser document")
}

fn mount(markup: &str) -> HtmlElement {
    let document = document();
    let root = document
        .create_element("div")
        .expect("create root")
        .dyn_into::<HtmlElement>()
        .expect("div is an HtmlElement");
    root.set_inner_html(markup);
    document
        .body()
        .expect("document body")
        .append_child(&root)
        .expect("mount root");
    root
}

fn element(id: &str) -> Element {
    document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("element #{id} should be mounted"))
}

fn display_of(id: &str) -> String {
    element(id)
        .dyn_into::<HtmlElement>()
        .ok()
        .and_then(|element| element.style().get_property_value("display").ok())
        .unwrap_or_default()
}

/// Dispatch a cancelable, bubbling `click` and report whether it was cancelled.
fn click_prevented(target: &Element) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("click", &init).expect("click event");
    target.dispatch_event(&event).expect("dispatch click");
    event.default_prevented()
}

fn dispatch_window_scroll() {
    let event = Event::new("scroll").expect("scroll event");
    window().dispatch_event(&event).expect("dispatch scroll");
}

#[wasm_bindgen_test]
fn slideshows_render_and_advance_independently() {
    let root = mount(
        r#"
        <div class="hero" id="hero-1"></div>
        <div class="hero" id="hero-2"></div>
        <div class="hero" id="hero-3"></div>
        <div class="gallery" id="gallery-1"></div>
        <div class="gallery" id="gallery-2"></div>
        "#,
    );
    let mut interactions = install_page_interactions(Some(
        r#"{"slideshow_classes":["hero","gallery"],"advance_hook":"advanceHeroTest"}"#.to_owned(),
    ))
    .expect("install");

    assert_eq!(interactions.slideshow_count(), 2);
    assert_eq!(display_of("hero-1"), "block");
    assert_eq!(display_of("hero-2"), "none");
    assert_eq!(display_of("gallery-1"), "block");

    assert_eq!(interactions.plus_slides(-1.0, 0.0), Some(3));
    assert_eq!(display_of("hero-3"), "block");
    assert_eq!(display_of("hero-1"), "none");
    assert_eq!(interactions.slide_position(1), Some(1));
    assert_eq!(interactions.plus_slides(1.0, 9.0), None);

    interactions.destroy();
    root.remove();
}

#[wasm_bindgen_test]
fn window_hook_advances_like_inline_buttons() {
    let root = mount(
        r#"
        <div class="strip" id="strip-1"></div>
        <div class="strip" id="strip-2"></div>
        <div class="other" id="other-1"></div>
        <div class="other" id="other-2"></div>
        "#,
    );
    let mut interactions = install_page_interactions(Some(
        r#"{"slideshow_classes":["strip","other"],"advance_hook":"advanceStripTest"}"#.to_owned(),
    ))
    .expect("install");

    let hook = Reflect::get(&window(), &JsValue::from_str("advanceStripTest"))
        .expect("read hook")
        .dyn_into::<Function>()
        .expect("hook is a function");
    hook.call2(&JsValue::NULL, &JsValue::from(1), &JsValue::from(0))
        .expect("call hook");

    assert_eq!(display_of("strip-1"), "none");
    assert_eq!(display_of("strip-2"), "block");
    assert_eq!(display_of("other-1"), "block");
    assert_eq!(interactions.slide_position(0), Some(2));
    assert_eq!(interactions.slide_position(1), Some(1));

    interactions.destroy();
    let after = Reflect::get(&window(), &JsValue::from_str("advanceStripTest")).expect("read");
    assert!(after.is_undefined());
    root.remove();
}

#[wasm_bindgen_test]
fn anchor_clicks_suppress_navigation_with_and_without_target() {
    let root = mount(
        r##"
        <a class="jump-test" id="jump-found" href="#jump-target">found</a>
        <a class="jump-test" id="jump-dangling" href="#does-not-exist">dangling</a>
        <a id="jump-unbound" href="#jump-target">unbound</a>
        <section id="jump-target">target</section>
        "##,
    );
    let mut interactions = install_page_interactions(Some(
        r#"{"anchor_selector":"a.jump-test","slideshow_classes":[],"advance_hook":"advanceJumpTest"}"#
            .to_owned(),
    ))
    .expect("install");

    assert_eq!(interactions.anchor_count(), 2);
    assert_eq!(interactions.resolved_anchor_count(), 1);
    assert!(click_prevented(&element("jump-found")));
    assert!(click_prevented(&element("jump-dangling")));

    interactions.destroy();
    assert!(!click_prevented(&element("jump-found")));
    assert!(!click_prevented(&element("jump-unbound")));
    root.remove();
}

#[wasm_bindgen_test]
fn svg_anchor_target_resolves() {
    let root = mount(
        r##"
        <a class="chart-link" id="chart-link" href="#chart-svg">chart</a>
        <svg id="chart-svg" width="10" height="10"></svg>
        "##,
    );
    let mut interactions = install_page_interactions(Some(
        r#"{"anchor_selector":"a.chart-link","slideshow_classes":[],"advance_hook":"advanceChartTest"}"#
            .to_owned(),
    ))
    .expect("install");

    assert_eq!(interactions.resolved_anchor_count(), 1);
    assert!(click_prevented(&element("chart-link")));

    interactions.destroy();
    root.remove();
}

#[wasm_bindgen_test]
fn scroll_listener_toggles_button() {
    let root = mount(
        r#"
        <button id="top-test-btn">top</button>
        <div style="height: 5000px"></div>
        "#,
    );
    let mut interactions = install_page_interactions(Some(
        r#"{"scroll_button_id":"top-test-btn","slideshow_classes":[],"advance_hook":"advanceTopTest"}"#
            .to_owned(),
    ))
    .expect("install");
    assert!(interactions.has_scroll_button());

    let scroller = document().document_element().expect("root element");
    scroller.set_scroll_top(200);
    dispatch_window_scroll();
    assert_eq!(display_of("top-test-btn"), "block");

    scroller.set_scroll_top(0);
    dispatch_window_scroll();
    assert_eq!(display_of("top-test-btn"), "none");

    // The click handler only issues a smooth scroll; it must not cancel the click.
    assert!(!click_prevented(&element("top-test-btn")));

    interactions.destroy();
    root.remove();
}

#[wasm_bindgen_test]
fn missing_button_is_tolerated() {
    let mut interactions = install_page_interactions(Some(
        r#"{"scroll_button_id":"noSuchButton","slideshow_classes":[],"advance_hook":"advanceNoneTest"}"#
            .to_owned(),
    ))
    .expect("install");

    assert!(!interactions.has_scroll_button());
    dispatch_window_scroll();
    assert!(document().get_element_by_id("noSuchButton").is_none());

    interactions.destroy();
}

#[wasm_bindgen_test]
fn malformed_config_is_an_error() {
    assert!(install_page_interactions(Some("{".to_owned())).is_err());
}
