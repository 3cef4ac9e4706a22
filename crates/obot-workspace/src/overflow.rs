//! Overflow detection for truncated text with hover tooltips.

/// Scroll and client extents of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementMetrics {
    pub scroll_width: u32,
    pub scroll_height: u32,
    pub client_width: u32,
    pub client_height: u32,
}

/// An element overflows when its content extends past its box on either
/// axis.
pub fn has_overflow(metrics: ElementMetrics) -> bool {
    metrics.scroll_height > metrics.client_height || metrics.scroll_width > metrics.client_width
}

/// Where the tooltip opens relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// Tooltip behavior for overflowing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowTooltip {
    pub placement: Placement,
    pub offset_px: u8,
}

impl Default for OverflowTooltip {
    fn default() -> Self {
        Self {
            placement: Placement::Top,
            offset_px: 4,
        }
    }
}

impl OverflowTooltip {
    /// Hovering opens the tooltip only when the text is actually cut off.
    pub fn opens_on_hover(&self, metrics: ElementMetrics) -> bool {
        has_overflow(metrics)
    }
}
