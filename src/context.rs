//! Page Context
//!
//! Non-reactive handles shared via the Leptos Context API: the comment
//! store client, the canvas element and the page content.

use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;

use crate::config::MemorialConfig;
use crate::geometry::{CanvasBounds, Point};
use crate::store::CommentStore;

#[derive(Clone, Copy)]
pub struct PageContext {
    /// Store client; local storage because futures and clients are `!Send`
    comment_store: StoredValue<Rc<dyn CommentStore>, LocalStorage>,
    /// The canvas notes are positioned in
    pub canvas: NodeRef<Div>,
    memorial: StoredValue<MemorialConfig>,
}

impl PageContext {
    pub fn new(comment_store: Rc<dyn CommentStore>, canvas: NodeRef<Div>, memorial: MemorialConfig) -> Self {
        Self {
            comment_store: StoredValue::new_local(comment_store),
            canvas,
            memorial: StoredValue::new(memorial),
        }
    }

    pub fn comment_store(&self) -> Rc<dyn CommentStore> {
        self.comment_store.get_value()
    }

    pub fn memorial(&self) -> MemorialConfig {
        self.memorial.get_value()
    }

    /// Current canvas size, or None before the canvas is mounted
    pub fn canvas_bounds(&self) -> Option<CanvasBounds> {
        self.canvas.get_untracked().map(|el| {
            let size = leptos_dragdrop::measure(&el);
            CanvasBounds::new(size.width, size.height)
        })
    }

    /// Pointer position of a mouse event in canvas coordinates
    pub fn pointer_in_canvas(&self, ev: &web_sys::MouseEvent) -> Option<Point> {
        self.canvas.get_untracked().map(|el| {
            let pos = leptos_dragdrop::pointer_within(ev, &el);
            Point::new(pos.x, pos.y)
        })
    }

    /// Blocking notice for failures the user has to know about
    pub fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Get the page context
pub fn use_page_context() -> PageContext {
    use_context::<PageContext>().expect("PageContext should be provided")
}
