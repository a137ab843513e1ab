//! Grid cell representation.

use gridcast_api::{ElementId, Rgb};
use serde::{Deserialize, Serialize};

/// Position of a cell in the character grid.
///
/// Signed so that geometry above or left of the document origin still has
/// an address; such cells are never read back into a frame.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridPos {
    pub row: i64,
    pub col: i64,
}

impl GridPos {
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

/// Pixel position a glyph was drawn at, document-relative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DomPos {
    pub x: f64,
    pub y: f64,
}

/// A single cell in the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// The character in this cell.
    pub glyph: char,
    /// Foreground colour.
    pub fg: Rgb,
    /// Where the cell lives in the grid.
    pub pos: GridPos,
    /// Where the glyph was drawn in the document.
    pub dom: DomPos,
    /// Element the glyph came from.
    pub owner: ElementId,
}

impl Cell {
    pub fn new(glyph: char, fg: Rgb, pos: GridPos, dom: DomPos, owner: ElementId) -> Self {
        Self {
            glyph,
            fg,
            pos,
            dom,
            owner,
        }
    }
}
