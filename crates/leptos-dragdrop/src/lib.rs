//! Leptos DragDrop Utilities
//!
//! Free positioning of absolutely placed elements with mouse events.
//! Every coordinate handed out is relative to a container element's
//! top-left corner, so callers never deal with viewport offsets.

use wasm_bindgen::JsCast;

/// Pointer location in container coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPos {
    pub x: f64,
    pub y: f64,
}

impl PointerPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rendered size of an element
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementSize {
    pub width: f64,
    pub height: f64,
}

/// Measure the rendered size of an element
pub fn measure(el: &web_sys::Element) -> ElementSize {
    let rect = el.get_bounding_client_rect();
    ElementSize {
        width: rect.width(),
        height: rect.height(),
    }
}

/// Pointer position of a mouse event relative to `container`
pub fn pointer_within(ev: &web_sys::MouseEvent, container: &web_sys::Element) -> PointerPos {
    let rect = container.get_bounding_client_rect();
    PointerPos::new(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    )
}

/// True when the event started on a form control that should keep its own
/// mouse behaviour (text selection, clicking)
pub fn starts_on_control(ev: &web_sys::MouseEvent) -> bool {
    match ev.target() {
        Some(target) => {
            target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        }
        None => false,
    }
}

/// Create mousedown handler for draggable elements
///
/// Only primary-button presses outside form controls start a grab. The
/// default action is suppressed so the browser does not begin a text
/// selection while the element follows the pointer.
pub fn make_on_grab<F>(on_grab: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn(&web_sys::MouseEvent) + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || starts_on_control(&ev) {
            return;
        }
        ev.prevent_default();
        on_grab(&ev);
    }
}
