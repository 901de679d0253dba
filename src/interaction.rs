//! Pointer Interaction
//!
//! Turns pointer input on the canvas into board operations: dragging a
//! note, and the hidden triple-click that removes the "add comment"
//! button for the rest of the session. Time is passed in as milliseconds
//! so the controller stays independent of the browser clock.

use crate::geometry::Point;
use crate::models::CommentId;

/// Clicks further apart than this do not count toward the same burst
pub const CLICK_WINDOW_MS: f64 = 500.0;
/// Clicks within one window that hide the add button
pub const CLICKS_TO_HIDE: usize = 3;

/// An active drag
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub id: CommentId,
    /// Pointer position relative to the note's top-left corner at grab time
    pub offset: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionController {
    drag: Option<DragSession>,
    clicks: Vec<f64>,
    add_enabled: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self {
            drag: None,
            clicks: Vec::new(),
            add_enabled: true,
        }
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the note being dragged
    pub fn dragging(&self) -> Option<&CommentId> {
        self.drag.as_ref().map(|d| &d.id)
    }

    pub fn add_enabled(&self) -> bool {
        self.add_enabled
    }

    /// Pointer pressed on a note. `pointer` and `corner` are both in canvas
    /// coordinates.
    pub fn pointer_down(&mut self, id: CommentId, pointer: Point, corner: Point) {
        self.drag = Some(DragSession {
            id,
            offset: Point::new(pointer.x - corner.x, pointer.y - corner.y),
        });
    }

    /// Pointer moved over the canvas. Returns the note to move and its
    /// unclamped new top-left corner while a drag is active.
    pub fn pointer_move(&self, pointer: Point) -> Option<(CommentId, Point)> {
        self.drag.as_ref().map(|drag| {
            (
                drag.id.clone(),
                Point::new(pointer.x - drag.offset.x, pointer.y - drag.offset.y),
            )
        })
    }

    /// Pointer released or left the canvas
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Click on an empty part of the canvas at `now_ms`.
    ///
    /// Returns true when this click hid the add button.
    pub fn canvas_click(&mut self, now_ms: f64) -> bool {
        if !self.add_enabled {
            return false;
        }
        self.clicks.push(now_ms);
        self.clicks.retain(|t| now_ms - t <= CLICK_WINDOW_MS);
        if self.clicks.len() >= CLICKS_TO_HIDE {
            self.add_enabled = false;
            self.clicks.clear();
            log::info!("add comment button hidden for this session");
            return true;
        }
        false
    }
}
