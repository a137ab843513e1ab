//! Sparse character grid - cells keyed by (row, col).

use gridcast_api::ElementId;
use indexmap::IndexMap;

use crate::cell::{Cell, GridPos};

/// A sparse grid of cells.
///
/// There is no declared size: any position can be written, and the frame
/// extent is only applied when reading back. At most one cell exists per
/// position and the last write wins.
#[derive(Debug, Clone, Default)]
pub struct SparseGrid {
    /// Cells in the order they were (last) written.
    cells: IndexMap<GridPos, Cell>,
}

impl SparseGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a cell at its position, replacing whatever was there.
    ///
    /// Returns the replaced cell, if any. A replaced position moves to the
    /// end of the iteration order, which shifts every later entry: an
    /// overwrite costs O(n) in the number of stored cells. Runs rarely
    /// overlap, so this stays off the hot path.
    pub fn insert(&mut self, cell: Cell) -> Option<Cell> {
        let pos = cell.pos;
        let (index, previous) = self.cells.insert_full(pos, cell);
        if let Some(old) = &previous {
            tracing::trace!(
                row = pos.row,
                col = pos.col,
                old = %old.glyph,
                "overwriting grid cell"
            );
            let last = self.cells.len() - 1;
            self.cells.move_index(index, last);
        }
        previous
    }

    /// Get the cell at a position.
    pub fn get(&self, row: i64, col: i64) -> Option<&Cell> {
        self.cells.get(&GridPos::new(row, col))
    }

    /// Number of occupied positions.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Remove every cell. Called at the start of each frame build.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate over cells in write order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// Cells that came from a given element.
    pub fn cells_owned_by(&self, owner: ElementId) -> impl Iterator<Item = &Cell> {
        self.cells.values().filter(move |cell| cell.owner == owner)
    }

    /// Render a `cols` x `rows` extent from the origin as plain text (for debugging).
    pub fn to_text(&self, cols: u32, rows: u32) -> String {
        let mut result = String::with_capacity((cols as usize + 1) * rows as usize);
        for row in 0..rows as i64 {
            for col in 0..cols as i64 {
                result.push(self.get(row, col).map_or(' ', |cell| cell.glyph));
            }
            result.push('\n');
        }
        result
    }
}
