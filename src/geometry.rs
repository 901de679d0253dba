//! Board Geometry
//!
//! Keeps comment notes off the memorial photo. All functions are pure and
//! work on an explicit `CanvasBounds` value measured from the rendered
//! canvas, so nothing here touches the DOM.

/// Rendered width of the photo frame
pub const PHOTO_WIDTH: f64 = 448.0;
/// Rendered height of the photo frame
pub const PHOTO_HEIGHT: f64 = 512.0;
/// Extra space below the photo reserved for the name caption
pub const CAPTION_PADDING: f64 = 60.0;

/// Fixed footprint of a comment note
pub const COMMENT_WIDTH: f64 = 420.0;
pub const COMMENT_HEIGHT: f64 = 100.0;

/// Distance of fallback positions from the canvas edge
const EDGE_MARGIN: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Footprint of a comment note
    pub fn comment() -> Self {
        Self::new(COMMENT_WIDTH, COMMENT_HEIGHT)
    }
}

/// Measured size of the canvas the notes are positioned in
pub type CanvasBounds = Size;

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn at(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Separating-axis test. Rectangles that merely touch count as
    /// overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.x + self.width < other.x
            || self.x > other.x + other.width
            || self.y + self.height < other.y
            || self.y > other.y + other.height)
    }
}

/// The photo and its caption, centered in the canvas
pub fn protected_region(bounds: CanvasBounds) -> Rect {
    Rect::new(
        (bounds.width - PHOTO_WIDTH) / 2.0,
        (bounds.height - PHOTO_HEIGHT) / 2.0,
        PHOTO_WIDTH,
        PHOTO_HEIGHT + CAPTION_PADDING,
    )
}

/// Whether a rectangle placed at `origin` would cover the protected region
pub fn overlaps(origin: Point, size: Size, bounds: CanvasBounds) -> bool {
    Rect::at(origin, size).overlaps(&protected_region(bounds))
}

/// Fallback spots in preference order: the four corners, then the middle
/// of the left and right edges.
fn candidate_positions(size: Size, bounds: CanvasBounds) -> [Point; 6] {
    let left = EDGE_MARGIN;
    let right = bounds.width - size.width - EDGE_MARGIN;
    let top = EDGE_MARGIN;
    let bottom = bounds.height - size.height - EDGE_MARGIN;
    let middle = bounds.height / 2.0 - size.height / 2.0;
    [
        Point::new(left, top),
        Point::new(right, top),
        Point::new(left, bottom),
        Point::new(right, bottom),
        Point::new(left, middle),
        Point::new(right, middle),
    ]
}

/// Keep `preferred` if it is clear of the photo, otherwise take the first
/// clear fallback spot. When the canvas is too small for any spot to be
/// clear the preferred position is returned and the overlap accepted.
pub fn find_safe_position(preferred: Point, size: Size, bounds: CanvasBounds) -> Point {
    if !overlaps(preferred, size, bounds) {
        return preferred;
    }
    candidate_positions(size, bounds)
        .into_iter()
        .find(|pos| !overlaps(*pos, size, bounds))
        .unwrap_or(preferred)
}

/// Clamp a note's top-left corner so the note stays inside the canvas.
///
/// If the canvas is smaller than the note the corner is pinned to 0.
pub fn clamp_to_canvas(pos: Point, size: Size, bounds: CanvasBounds) -> Point {
    Point::new(
        pos.x.min(bounds.width - size.width).max(0.0),
        pos.y.min(bounds.height - size.height).max(0.0),
    )
}
