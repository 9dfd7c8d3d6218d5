//! Board module - manages the occupancy grid
//!
//! The board is a `cols x rows` grid of occupied/empty cells, fixed at creation.
//! Uses a flat row-major vector for cache locality.
//! Coordinates: (col, row) where col grows to the right and row 0 is the top.

use log::debug;

/// The game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: u16,
    rows: u16,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<bool>,
}

impl Board {
    /// Create a new empty board
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![false; cols as usize * rows as usize],
        }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if !self.in_bounds(col, row) {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < self.cols as i32 && row >= 0 && row < self.rows as i32
    }

    /// Check if position is occupied. Out of bounds reads as empty.
    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        self.index(col, row).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// Mark a cell occupied.
    /// Returns false if out of bounds
    pub fn set(&mut self, col: i32, row: i32) -> bool {
        match self.index(col, row) {
            Some(i) => {
                self.cells[i] = true;
                true
            }
            None => false,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows as usize {
            return false;
        }
        self.row_slice(row).iter().all(|&cell| cell)
    }

    /// Indices of every full row, top to bottom.
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.rows as usize)
            .filter(|&row| self.is_row_full(row))
            .collect()
    }

    /// Remove each named row in the given order, shifting everything above it down
    /// and inserting an empty row at the top.
    ///
    /// Indices refer to the board as it is when that row is removed, so an ascending
    /// list from [`Board::full_rows`] can be passed straight through. Out-of-range
    /// indices are skipped. Returns the number of rows removed.
    pub fn clear_rows(&mut self, rows: &[usize]) -> usize {
        let mut removed = 0;
        for &row in rows {
            if row >= self.rows as usize {
                debug!("ignoring clear of row {} on a {}-row board", row, self.rows);
                continue;
            }
            self.remove_row(row);
            removed += 1;
        }
        removed
    }

    fn remove_row(&mut self, row: usize) {
        let width = self.cols as usize;

        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src = (r - 1) * width;
            self.cells.copy_within(src..src + width, r * width);
        }

        self.cells[..width].fill(false);
    }

    /// Clear the entire board
    pub fn reset(&mut self) {
        self.cells.fill(false);
    }

    /// (col, row) of every occupied cell, row by row.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(i, _)| ((i % width) as i32, (i / width) as i32))
    }

    pub fn count_occupied(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    fn row_slice(&self, row: usize) -> &[bool] {
        let start = row * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    /// Build a board from text rows: `#` is occupied, anything else empty.
    ///
    /// All rows must be the same length; handy in tests and benches.
    pub fn from_strings(rows: &[&str]) -> Self {
        let cols = rows.first().map(|r| r.chars().count()).unwrap_or(0) as u16;
        let mut board = Self::new(cols, rows.len() as u16);
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch == '#' {
                    board.set(c as i32, r as i32);
                }
            }
        }
        board
    }

    /// Render as text rows (`#` occupied, `.` empty).
    pub fn to_strings(&self) -> Vec<String> {
        (0..self.rows as usize)
            .map(|row| {
                self.row_slice(row)
                    .iter()
                    .map(|&c| if c { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}
