//! Piece module - the falling piece and its collision rules
//!
//! A piece is a working copy of a catalog matrix plus the grid position of the
//! matrix's top-left corner. Every move or rotation is computed as a candidate,
//! tested with [`Piece::collides`], and only committed when the test passes.
//! There are no wall kicks: a blocked rotation is simply discarded.

use crate::board::Board;
use crate::catalog;
use crate::matrix::Matrix;
use crate::types::{Color, PieceKind};

/// Result of a downward step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDown {
    /// The piece moved one row down.
    Moved,
    /// The piece could not move and has been merged into the board.
    Locked,
}

/// Active falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    matrix: Matrix,
    col: i32,
    row: i32,
}

impl Piece {
    /// Create a piece at the top of the board, horizontally centered.
    ///
    /// The spawn position is not checked; see [`Piece::is_blocked`].
    pub fn spawn(kind: PieceKind, board: &Board) -> Self {
        let matrix = catalog::shape_of(kind);
        let col = (board.cols() as i32 - matrix.width() as i32).div_euclid(2);
        Self {
            kind,
            matrix,
            col,
            row: 0,
        }
    }

    /// Place a piece with an explicit matrix and position.
    pub fn with_matrix(kind: PieceKind, matrix: Matrix, col: i32, row: i32) -> Self {
        Self {
            kind,
            matrix,
            col,
            row,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        catalog::color_of(self.kind)
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    /// (col, row) of the matrix's top-left corner.
    pub fn position(&self) -> (i32, i32) {
        (self.col, self.row)
    }

    /// Absolute (col, row) of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.matrix
            .occupied()
            .map(move |(dc, dr)| (self.col + dc, self.row + dr))
    }

    /// Whether `matrix` placed with its top-left at (col, row) is blocked.
    ///
    /// Blocked when any occupied cell is left or right of the board, at or below
    /// the bottom row, or on an occupied board cell. Cells above row 0 never block.
    pub fn collides(board: &Board, matrix: &Matrix, col: i32, row: i32) -> bool {
        matrix.occupied().any(|(dc, dr)| {
            let c = col + dc;
            let r = row + dr;
            if c < 0 || c >= board.cols() as i32 || r >= board.rows() as i32 {
                return true;
            }
            r >= 0 && board.is_occupied(c, r)
        })
    }

    /// Whether the piece overlaps something where it stands (the game-over check).
    pub fn is_blocked(&self, board: &Board) -> bool {
        Self::collides(board, &self.matrix, self.col, self.row)
    }

    pub fn move_left(&mut self, board: &Board) -> bool {
        self.shift(board, -1)
    }

    pub fn move_right(&mut self, board: &Board) -> bool {
        self.shift(board, 1)
    }

    fn shift(&mut self, board: &Board, dc: i32) -> bool {
        let col = self.col + dc;
        if Self::collides(board, &self.matrix, col, self.row) {
            return false;
        }
        self.col = col;
        true
    }

    /// Step one row down, or lock into the board if the row below is blocked.
    pub fn move_down(&mut self, board: &mut Board) -> MoveDown {
        let row = self.row + 1;
        if Self::collides(board, &self.matrix, self.col, row) {
            self.lock(board);
            return MoveDown::Locked;
        }
        self.row = row;
        MoveDown::Moved
    }

    /// Turn the matrix a quarter turn in place. Returns false (and keeps the old
    /// matrix) if the turned shape would collide at the current position.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let rotated = self.matrix.rotated();
        if Self::collides(board, &rotated, self.col, self.row) {
            return false;
        }
        self.matrix = rotated;
        true
    }

    /// Mark every in-bounds occupied cell on the board. Cells above row 0 are dropped.
    pub fn lock(&self, board: &mut Board) {
        for (c, r) in self.cells() {
            if board.in_bounds(c, r) {
                board.set(c, r);
            }
        }
    }
}
