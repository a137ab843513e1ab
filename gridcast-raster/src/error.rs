//! Rasterizer error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RasterError {
    /// A box is wider than the text left to place in it.
    #[error(
        "run {run} ran out of text in box {box_index}: consumed {consumed} of {len} characters"
    )]
    TextExhausted {
        run: usize,
        box_index: usize,
        consumed: usize,
        len: usize,
    },

    #[error("invalid character cell size: {width}x{height}")]
    InvalidCellSize { width: f64, height: f64 },
}
