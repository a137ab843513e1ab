//! Pixel-to-grid snapping.
//!
//! Boxes arrive in viewport pixels. They are shifted by the scroll offsets
//! into document space and then floor-divided by the cell size. Flooring
//! means a cell never starts past the glyph it stands for.

use gridcast_api::{CharSize, Dimensions, DomScroll, RenderBox};
use gridcast_term::DomPos;

use crate::RasterError;

/// A rendering box projected into grid space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBox {
    pub col_start: i64,
    pub row: i64,
    /// Number of cells the box spans.
    pub width: usize,
}

/// Snaps rendering boxes for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapper {
    char_size: CharSize,
    scroll: DomScroll,
}

impl Snapper {
    pub fn new(char_size: CharSize, scroll: DomScroll) -> Result<Self, RasterError> {
        if !char_size.is_valid() {
            return Err(RasterError::InvalidCellSize {
                width: char_size.width,
                height: char_size.height,
            });
        }
        Ok(Self { char_size, scroll })
    }

    pub fn from_dimensions(dims: &Dimensions) -> Result<Self, RasterError> {
        Self::new(dims.char_size, dims.dom)
    }

    pub fn char_size(&self) -> CharSize {
        self.char_size
    }

    /// Document-relative pixel position of a box's top-left corner.
    pub fn absolute(&self, render_box: &RenderBox) -> DomPos {
        DomPos {
            x: render_box.left + self.scroll.x_scroll,
            y: render_box.top + self.scroll.y_scroll,
        }
    }

    pub fn snap(&self, render_box: &RenderBox) -> GridBox {
        let origin = self.absolute(render_box);
        GridBox {
            col_start: (origin.x / self.char_size.width).floor() as i64,
            row: (origin.y / self.char_size.height).floor() as i64,
            // Float-to-int casts saturate, so negative or NaN widths become 0.
            width: (render_box.width / self.char_size.width).floor() as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn snapper(x_scroll: f64, y_scroll: f64) -> Snapper {
        Snapper::new(CharSize { width: 8.0, height: 16.0 }, DomScroll { x_scroll, y_scroll }).unwrap()
    }

    #[test]
    fn test_snap_origin_box() {
        let grid_box = snapper(0.0, 0.0).snap(&RenderBox::new(0.0, 0.0, 88.0));
        assert_eq!(grid_box, GridBox { col_start: 0, row: 0, width: 11 });
    }

    #[test]
    fn test_snap_floors_everything() {
        let grid_box = snapper(0.0, 0.0).snap(&RenderBox::new(31.9, 15.99, 23.5));
        assert_eq!(grid_box, GridBox { col_start: 1, row: 1, width: 2 });
    }

    #[test]
    fn test_snap_adds_scroll() {
        let snapper = snapper(16.0, 160.0);
        let render_box = RenderBox::new(8.0, 4.0, 16.0);

        assert_eq!(snapper.absolute(&render_box), DomPos { x: 20.0, y: 168.0 });
        assert_eq!(snapper.snap(&render_box), GridBox { col_start: 2, row: 10, width: 2 });
    }

    #[test]
    fn test_snap_negative_position_floors_away_from_zero() {
        let grid_box = snapper(0.0, 0.0).snap(&RenderBox::new(-1.0, -1.0, 8.0));
        assert_eq!(grid_box.row, -1);
        assert_eq!(grid_box.col_start, -1);
    }

    #[test]
    fn test_negative_width_is_empty() {
        assert_eq!(snapper(0.0, 0.0).snap(&RenderBox::new(0.0, 0.0, -40.0)).width, 0);
    }

    #[test]
    fn test_rejects_zero_cell() {
        let err = Snapper::new(CharSize { width: 0.0, height: 16.0 }, DomScroll::default());
        assert_eq!(
            err.unwrap_err(),
            RasterError::InvalidCellSize { width: 0.0, height: 16.0 }
        );
    }

    proptest! {
        #[test]
        fn snapped_rows_are_monotonic(
            top1 in 0.0f64..10_000.0,
            delta in 0.0f64..10_000.0,
            y_scroll in 0.0f64..5_000.0,
            height in 1.0f64..64.0,
        ) {
            let snapper = Snapper::new(
                CharSize { width: 8.0, height },
                DomScroll { x_scroll: 0.0, y_scroll },
            ).unwrap();
            let row1 = snapper.snap(&RenderBox::new(top1, 0.0, 0.0)).row;
            let row2 = snapper.snap(&RenderBox::new(top1 + delta, 0.0, 0.0)).row;
            prop_assert!(row1 <= row2);
        }

        #[test]
        fn snapped_width_never_overshoots(width in 0.0f64..4_000.0, cell in 1.0f64..32.0) {
            let snapper = Snapper::new(CharSize { width: cell, height: 16.0 }, DomScroll::default()).unwrap();
            let cells = snapper.snap(&RenderBox::new(0.0, 0.0, width)).width;
            prop_assert!(cells as f64 * cell <= width + 1e-6);
        }
    }
}
