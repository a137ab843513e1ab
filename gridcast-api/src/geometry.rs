//! Per-frame dimensions and rendering box geometry.

use serde::{Deserialize, Serialize};

/// Size of one character cell, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharSize {
    pub width: f64,
    pub height: f64,
}

impl CharSize {
    /// Both sides must be finite and strictly positive to snap against.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for CharSize {
    fn default() -> Self {
        Self {
            width: 8.0,
            height: 16.0,
        }
    }
}

/// Document scroll offsets, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DomScroll {
    pub x_scroll: f64,
    pub y_scroll: f64,
}

/// Target frame size, in cells.
///
/// `height` counts pixel-rows of colour, two per text row, so the number of
/// addressable text rows is `height / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    /// Number of text rows the frame carries.
    pub fn text_rows(&self) -> u32 {
        self.height / 2
    }

    /// Number of glyph slots in a serialized frame.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.text_rows() as usize
    }
}

impl Default for FrameSize {
    fn default() -> Self {
        Self {
            width: 80,
            height: 48,
        }
    }
}

/// Everything the rasterizer needs to know about the destination.
///
/// Supplied fresh for every frame build and never mutated during one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(rename = "char")]
    pub char_size: CharSize,
    pub dom: DomScroll,
    pub frame: FrameSize,
}

/// Where a contiguous span of a text run is drawn, in viewport pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderBox {
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

impl RenderBox {
    pub fn new(top: f64, left: f64, width: f64) -> Self {
        Self { top, left, width }
    }
}
