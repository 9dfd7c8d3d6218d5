//! Drawing interface consumed by front-ends.
//!
//! The core never knows about pixels or terminal cells. It reports grid
//! coordinates and a color for every occupied cell and leaves the rest to the
//! surface. Coordinates may fall outside the surface (a piece can poke above
//! row 0), so implementations clip.

use crate::types::Color;

/// Something that can paint one grid cell.
pub trait DrawSurface {
    fn fill_cell(&mut self, col: i32, row: i32, color: Color);
}

impl<F: FnMut(i32, i32, Color)> DrawSurface for F {
    fn fill_cell(&mut self, col: i32, row: i32, color: Color) {
        self(col, row, color)
    }
}

/// Collects every fill in call order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CellRecorder {
    pub cells: Vec<(i32, i32, Color)>,
}

impl DrawSurface for CellRecorder {
    fn fill_cell(&mut self, col: i32, row: i32, color: Color) {
        self.cells.push((col, row, color));
    }
}
