//! State helpers for the user-facing workspace UI: built-in capability
//! tools, drag-over tracking for drop targets, and overflow detection for
//! truncated text.

pub mod drag;
pub mod overflow;
pub mod tools;

pub use drag::{DragState, Point, Rect};
pub use overflow::{has_overflow, ElementMetrics};
pub use tools::CapabilityTool;
