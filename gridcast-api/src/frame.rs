//! The serialized frame sent to the terminal side.

use serde::{Deserialize, Serialize};

use crate::{FrameSize, Rgb};

/// Identifies the destination a frame is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameId(pub u64);

/// Wire command the terminal side expects in front of a text frame.
pub const FRAME_TEXT_COMMAND: &str = "/frame_text,";

/// A fully flattened text frame.
///
/// `text` holds one entry per cell in row-major order and `colours` holds
/// three components per cell. Both are always sized from `width` and
/// `height / 2`, however sparse the source grid was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub id: FrameId,
    pub width: u32,
    pub height: u32,
    pub text: Vec<String>,
    pub colours: Vec<u8>,
}

impl Frame {
    /// Create an empty frame with room for every cell of `size`.
    pub fn with_capacity(id: FrameId, size: FrameSize) -> Self {
        let cells = size.cell_count();
        Self {
            id,
            width: size.width,
            height: size.height,
            text: Vec::with_capacity(cells),
            colours: Vec::with_capacity(cells * 3),
        }
    }

    /// Append an occupied cell.
    pub fn push_glyph(&mut self, glyph: char, colour: Rgb) {
        self.text.push(glyph.to_string());
        self.colours.extend_from_slice(&colour.components());
    }

    /// Append an empty cell.
    pub fn push_empty(&mut self) {
        self.text.push(String::new());
        self.colours.extend_from_slice(&Rgb::BLACK.components());
    }

    /// Number of cells carrying a glyph.
    pub fn glyph_count(&self) -> usize {
        self.text.iter().filter(|glyph| !glyph.is_empty()).count()
    }

    /// Whether the frame has any text at all. Empty frames are not sent.
    pub fn is_worth_sending(&self) -> bool {
        self.text.iter().any(|glyph| !glyph.is_empty())
    }

    /// Serialize to JSON behind a wire command prefix.
    pub fn to_wire(&self, prefix: &str) -> serde_json::Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(format!("{prefix}{json}"))
    }
}
