//! Matrix module - fixed-capacity boolean cell grid
//!
//! A matrix describes a shape's occupied cells relative to its top-left corner.
//! Storage is a row-major `ArrayVec`, so copying or rotating a piece never touches the heap.

use arrayvec::ArrayVec;

use crate::types::MAX_SHAPE_EXTENT;

/// Maximum number of cells in any matrix (6x6 bounding box).
pub const MAX_MATRIX_CELLS: usize = (MAX_SHAPE_EXTENT as usize) * (MAX_SHAPE_EXTENT as usize);

/// Rectangular grid of occupied/empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    width: u8,
    height: u8,
    /// Row-major order (row * width + col)
    cells: ArrayVec<bool, MAX_MATRIX_CELLS>,
}

impl Matrix {
    /// Build a matrix from rows of 0/1 values (non-zero = occupied).
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged, empty, or larger than 6x6 in either direction.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        assert!(!rows.is_empty(), "matrix needs at least one row");
        let width = rows[0].as_ref().len();
        assert!(width > 0, "matrix needs at least one column");
        assert!(
            width <= MAX_SHAPE_EXTENT as usize && rows.len() <= MAX_SHAPE_EXTENT as usize,
            "matrix larger than {0}x{0}",
            MAX_SHAPE_EXTENT
        );

        let mut cells = ArrayVec::new();
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), width, "ragged matrix rows");
            cells.extend(row.iter().map(|&v| v != 0));
        }

        Self {
            width: width as u8,
            height: rows.len() as u8,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Whether the cell at (col, row) is occupied. Out of range reads as empty.
    pub fn get(&self, col: usize, row: usize) -> bool {
        if col >= self.width() || row >= self.height() {
            return false;
        }
        self.cells[row * self.width() + col]
    }

    /// Relative (col, row) of every occupied cell, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width();
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(i, _)| ((i % width) as i32, (i / width) as i32))
    }

    pub fn count_occupied(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Quarter turn: transpose, then reverse the order of the rows.
    ///
    /// With row 0 drawn at the top this turns the shape clockwise. The result is
    /// `height x width`; no offset is applied to keep it inside any bounds.
    pub fn rotated(&self) -> Self {
        let (w, h) = (self.width(), self.height());
        let mut cells = ArrayVec::new();
        // New row r is old column r read from the bottom row upwards.
        for r in 0..w {
            for c in 0..h {
                cells.push(self.cells[(h - 1 - c) * w + r]);
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Rows as 0/1 vectors, handy for assertions.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width())
            .map(|row| row.iter().map(|&v| v as u8).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_keeps_dimensions() {
        let m = Matrix::from_rows(&[[0u8, 1, 0], [1, 1, 1]]);
        assert_eq!(m.width(), 3);
        assert_eq!(m.height(), 2);
        assert!(m.get(1, 0));
        assert!(!m.get(0, 0));
        assert!(!m.get(3, 0));
        assert_eq!(m.count_occupied(), 4);
    }

    #[test]
    fn rotate_t_clockwise() {
        // .#.      #.
        // ###  ->  ##
        //          #.
        let m = Matrix::from_rows(&[[0u8, 1, 0], [1, 1, 1]]);
        assert_eq!(m.rotated().to_rows(), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);
    }

    #[test]
    fn rotate_bar_becomes_column() {
        let m = Matrix::from_rows(&[[1u8, 1, 1, 1, 1, 1]]);
        let r = m.rotated();
        assert_eq!(r.width(), 1);
        assert_eq!(r.height(), 6);
        assert_eq!(r.count_occupied(), 6);
    }

    #[test]
    fn four_rotations_return_to_start() {
        let m = Matrix::from_rows(&[[1u8, 1, 1], [1, 0, 1]]);
        let back = m.rotated().rotated().rotated().rotated();
        assert_eq!(back, m);
    }

    #[test]
    fn occupied_yields_relative_coordinates() {
        let m = Matrix::from_rows(&[[0u8, 0, 0], [0, 0, 1]]);
        let cells: Vec<_> = m.occupied().collect();
        assert_eq!(cells, vec![(2, 1)]);
    }

    #[test]
    #[should_panic(expected = "ragged")]
    fn ragged_rows_panic() {
        let rows: [&[u8]; 2] = [&[1, 1], &[1]];
        let _ = Matrix::from_rows(&rows);
    }
}
