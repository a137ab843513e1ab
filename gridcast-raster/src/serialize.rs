//! Grid to frame flattening.

use gridcast_api::{Frame, FrameId, FrameSize};
use gridcast_term::SparseGrid;

/// Flatten `grid` into a frame of exactly `size`.
///
/// Rows `0..height / 2` and columns `0..width` are read in row-major order.
/// Missing cells become an empty glyph with a black colour; cells outside
/// that extent are ignored.
pub fn serialize(grid: &SparseGrid, id: FrameId, size: FrameSize) -> Frame {
    let mut frame = Frame::with_capacity(id, size);
    for row in 0..i64::from(size.text_rows()) {
        for col in 0..i64::from(size.width) {
            match grid.get(row, col) {
                Some(cell) => frame.push_glyph(cell.glyph, cell.fg),
                None => frame.push_empty(),
            }
        }
    }
    frame
}
