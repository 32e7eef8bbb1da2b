#![forbid(unsafe_code)]

//! `wasm-bindgen` exports for the page interactions.
//!
//! The controller is shared between listener closures through
//! `Rc<RefCell<_>>`. UI events are delivered serially, so a borrow is never
//! contended; if it ever were, the event is skipped instead of panicking.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use js_sys::Reflect;
use pagefx_core::PageController;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, Window};

use crate::dom::{DomView, read_offsets, resolve_bindings};
use crate::host::{self, InstallError, delta_from_js, instance_from_js, to_js_u32};

type SharedController = Rc<RefCell<PageController<DomView>>>;

/// Route Rust panics to `console.error` with their source location.
fn install_panic_hook() {
    static INSTALLED: Once = Once::new();
    INSTALLED.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let location = info
                .location()
                .map(|loc| format!(" ({}:{})", loc.file(), loc.line()))
                .unwrap_or_default();
            let message = format!("pagefx panicked{location}: {info}");
            web_sys::console::error_1(&JsValue::from_str(&message));
        }));
    });
}

fn js_error(err: InstallError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn js_detail(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn with_controller<R>(
    shared: &SharedController,
    f: impl FnOnce(&mut PageController<DomView>) -> R,
) -> Option<R> {
    let mut controller = shared.try_borrow_mut().ok()?;
    Some(f(&mut controller))
}

/// One registered DOM listener, detached again on drop.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, InstallError> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| InstallError::Listener {
                event,
                detail: js_detail(&err),
            })?;
        Ok(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let callback = self.callback.as_ref().unchecked_ref();
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, callback);
    }
}

/// Global advance function (`window.plusSlides`), removed again on drop.
struct AdvanceHook {
    window: Window,
    name: String,
    callback: Closure<dyn FnMut(f64, f64)>,
}

impl AdvanceHook {
    fn publish(
        window: Window,
        name: String,
        callback: Closure<dyn FnMut(f64, f64)>,
    ) -> Result<Self, InstallError> {
        Reflect::set(&window, &JsValue::from_str(&name), callback.as_ref()).map_err(|err| {
            InstallError::Hook {
                hook: name.clone(),
                detail: js_detail(&err),
            }
        })?;
        debug!(hook = %name, "advance hook published on window");
        Ok(Self {
            window,
            name,
            callback,
        })
    }
}

impl Drop for AdvanceHook {
    fn drop(&mut self) {
        let key = JsValue::from_str(&self.name);
        // Only remove the hook if nobody replaced it since.
        let ours = Reflect::get(&self.window, &key)
            .is_ok_and(|current| current == *self.callback.as_ref());
        if ours {
            let _ = Reflect::delete_property(&self.window, &key);
        }
    }
}

/// Installed page interactions.
///
/// Dropping the handle (or calling `destroy`) detaches every listener and
/// removes the global advance hook.
#[wasm_bindgen]
pub struct PageInteractions {
    controller: SharedController,
    listeners: Vec<Listener>,
    hook: Option<AdvanceHook>,
}

/// Resolve the document markup, render the slideshows, and bind listeners.
///
/// `configJson` may override any field of the markup contract; omit it for
/// the stock `#myBtn` / `mySlides1` / `mySlides2` / `a.smooth-scroll` page.
#[wasm_bindgen(js_name = installPageInteractions)]
pub fn install_page_interactions(
    config_json: Option<String>,
) -> Result<PageInteractions, JsValue> {
    install_panic_hook();
    install(config_json.as_deref()).map_err(js_error)
}

fn install(config_json: Option<&str>) -> Result<PageInteractions, InstallError> {
    let config = host::config_from_js(config_json)?;
    let window = web_sys::window().ok_or(InstallError::NoWindow)?;
    let document = window.document().ok_or(InstallError::NoDocument)?;

    let bindings = resolve_bindings(&document, &config);
    let scroll_button = bindings.scroll_button.clone();
    let anchor_triggers: Vec<EventTarget> = bindings
        .anchors
        .iter()
        .map(|binding| binding.trigger.clone().into())
        .collect();

    let controller: SharedController = Rc::new(RefCell::new(PageController::new(
        DomView::new(window.clone()),
        bindings,
    )));

    let mut listeners = Vec::with_capacity(anchor_triggers.len() + 2);

    let on_scroll = {
        let shared = Rc::clone(&controller);
        Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let offsets = read_offsets(&document);
            with_controller(&shared, |controller| controller.on_scroll(offsets));
        })
    };
    listeners.push(Listener::attach(window.clone().into(), "scroll", on_scroll)?);

    if let Some(button) = scroll_button {
        let shared = Rc::clone(&controller);
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            with_controller(&shared, PageController::on_scroll_top_click);
        });
        listeners.push(Listener::attach(button.into(), "click", on_click)?);
    }

    for (index, trigger) in anchor_triggers.into_iter().enumerate() {
        let shared = Rc::clone(&controller);
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let click = with_controller(&shared, |controller| controller.on_anchor_click(index));
            if click.is_none_or(|click| click.suppress_default) {
                event.prevent_default();
            }
        });
        listeners.push(Listener::attach(trigger, "click", on_click)?);
    }

    let advance = {
        let shared = Rc::clone(&controller);
        Closure::<dyn FnMut(f64, f64)>::new(move |n: f64, slideshow_no: f64| {
            let (Some(delta), Some(instance)) = (delta_from_js(n), instance_from_js(slideshow_no))
            else {
                return;
            };
            with_controller(&shared, |controller| controller.advance_slides(delta, instance));
        })
    };
    let hook = AdvanceHook::publish(window, config.advance_hook.clone(), advance)?;

    Ok(PageInteractions {
        controller,
        listeners,
        hook: Some(hook),
    })
}

#[wasm_bindgen]
impl PageInteractions {
    /// Move slideshow `slideshow_no` by `n` slides.
    ///
    /// Returns the new 1-based position, or `undefined` if nothing moved.
    #[wasm_bindgen(js_name = plusSlides)]
    pub fn plus_slides(&self, n: f64, slideshow_no: f64) -> Option<u32> {
        let delta = delta_from_js(n)?;
        let instance = instance_from_js(slideshow_no)?;
        let position = with_controller(&self.controller, |controller| {
            controller.advance_slides(delta, instance)
        })??;
        Some(to_js_u32(position))
    }

    /// Current 1-based position of slideshow `slideshow_no`.
    #[wasm_bindgen(js_name = slidePosition)]
    pub fn slide_position(&self, slideshow_no: u32) -> Option<u32> {
        let instance = usize::try_from(slideshow_no).ok()?;
        let controller = self.controller.try_borrow().ok()?;
        controller.slide_position(instance).map(to_js_u32)
    }

    /// Number of slides in slideshow `slideshow_no`.
    #[wasm_bindgen(js_name = slideCount)]
    pub fn slide_count(&self, slideshow_no: u32) -> Option<u32> {
        let instance = usize::try_from(slideshow_no).ok()?;
        let controller = self.controller.try_borrow().ok()?;
        let count = controller.slideshows().get(instance)?.count();
        Some(to_js_u32(count))
    }

    #[wasm_bindgen(js_name = slideshowCount)]
    pub fn slideshow_count(&self) -> u32 {
        self.controller
            .try_borrow()
            .map_or(0, |controller| to_js_u32(controller.slideshows().len()))
    }

    #[wasm_bindgen(js_name = anchorCount)]
    pub fn anchor_count(&self) -> u32 {
        self.controller
            .try_borrow()
            .map_or(0, |controller| to_js_u32(controller.anchors().len()))
    }

    /// Number of anchors whose `#id` target exists in the document.
    #[wasm_bindgen(js_name = resolvedAnchorCount)]
    pub fn resolved_anchor_count(&self) -> u32 {
        self.controller
            .try_borrow()
            .map_or(0, |controller| to_js_u32(controller.anchors().resolved_count()))
    }

    #[wasm_bindgen(js_name = hasScrollButton)]
    pub fn has_scroll_button(&self) -> bool {
        self.controller
            .try_borrow()
            .is_ok_and(|controller| controller.has_scroll_button())
    }

    /// Detach every listener and remove the global advance hook.
    pub fn destroy(&mut self) {
        self.listeners.clear();
        self.hook = None;
    }
}

impl PageInteractions {
    /// Keep the interactions installed for the lifetime of the page.
    #[cfg_attr(not(feature = "autostart"), allow(dead_code))]
    fn keep_alive(self) {
        std::mem::forget(self);
    }
}

#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    install_page_interactions(None)?.keep_alive();
    Ok(())
}
