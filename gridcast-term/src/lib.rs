//! Gridcast Term - Character grid state.
//!
//! Holds the cells produced by rasterizing text runs, keyed by grid
//! position, until a frame is serialized from them.

mod cell;
mod grid;

pub use cell::{Cell, DomPos, GridPos};
pub use grid::SparseGrid;
