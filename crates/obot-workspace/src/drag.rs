//! Drag-over tracking for drop targets.
//!
//! Leave events also fire when the pointer moves onto a child of the
//! target, so the dragging flag only clears once the pointer is actually
//! outside the target's rectangle.

/// Pointer position in the same coordinate space as the tracked rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Bounding rectangle of the drop target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Containment is inclusive of the edges.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}

/// Dragging flag for one drop target.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    dragging: bool,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// A drag moved over the target.
    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    /// A leave event fired with the pointer at `point`.
    pub fn drag_leave(&mut self, point: Point, rect: Rect) {
        if !rect.contains(point) {
            self.dragging = false;
        }
    }

    /// Force the flag, or flip it when no value is given.
    pub fn toggle(&mut self, value: Option<bool>) {
        self.dragging = value.unwrap_or(!self.dragging);
    }
}
