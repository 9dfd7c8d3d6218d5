//! Shape catalog - one immutable table of piece shapes and colors
//!
//! The table is a `static`, so every lookup references the same canonical entry.
//! Pieces never hold on to the canonical rows: [`shape_of`] hands out a fresh [`Matrix`].

use crate::matrix::Matrix;
use crate::types::{Color, PieceKind};

/// Canonical catalog entry.
#[derive(Debug, PartialEq, Eq)]
pub struct ShapeDefinition {
    pub kind: PieceKind,
    /// Spawn orientation, top row first; 1 = occupied.
    pub rows: &'static [&'static [u8]],
    pub color: Color,
}

impl ShapeDefinition {
    /// Fresh working copy of the spawn orientation.
    pub fn matrix(&self) -> Matrix {
        Matrix::from_rows(self.rows)
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }
}

/// Indexed by [`PieceKind::index`].
static CATALOG: [ShapeDefinition; 11] = [
    ShapeDefinition {
        kind: PieceKind::I,
        rows: &[&[1, 1, 1, 1]],
        color: Color::from_hex(0x5BC0EB),
    },
    ShapeDefinition {
        kind: PieceKind::O,
        rows: &[&[1, 1], &[1, 1]],
        color: Color::from_hex(0xFDE74C),
    },
    ShapeDefinition {
        kind: PieceKind::T,
        rows: &[&[0, 1, 0], &[1, 1, 1]],
        color: Color::from_hex(0x9D4EDD),
    },
    ShapeDefinition {
        kind: PieceKind::S,
        rows: &[&[0, 1, 1], &[1, 1, 0]],
        color: Color::from_hex(0x00D26A),
    },
    ShapeDefinition {
        kind: PieceKind::Z,
        rows: &[&[1, 1, 0], &[0, 1, 1]],
        color: Color::from_hex(0xFF5964),
    },
    ShapeDefinition {
        kind: PieceKind::J,
        rows: &[&[1, 0, 0], &[1, 1, 1]],
        color: Color::from_hex(0x4F86F7),
    },
    ShapeDefinition {
        kind: PieceKind::L,
        rows: &[&[0, 0, 1], &[1, 1, 1]],
        color: Color::from_hex(0xFFA630),
    },
    ShapeDefinition {
        kind: PieceKind::B,
        rows: &[&[0, 0, 0], &[0, 0, 1]],
        color: Color::from_hex(0xCBAACB),
    },
    ShapeDefinition {
        kind: PieceKind::C,
        rows: &[&[1, 1, 1], &[1, 0, 1]],
        color: Color::from_hex(0xFFB400),
    },
    ShapeDefinition {
        kind: PieceKind::F,
        rows: &[&[1, 1, 1], &[1, 1, 1]],
        color: Color::from_hex(0x37474F),
    },
    ShapeDefinition {
        kind: PieceKind::LI,
        rows: &[&[1, 1, 1, 1, 1, 1]],
        color: Color::from_hex(0x673AB7),
    },
];

/// Shared catalog entry for a kind.
pub fn definition(kind: PieceKind) -> &'static ShapeDefinition {
    &CATALOG[kind.index()]
}

/// Fresh copy of a kind's spawn matrix.
pub fn shape_of(kind: PieceKind) -> Matrix {
    definition(kind).matrix()
}

pub fn color_of(kind: PieceKind) -> Color {
    definition(kind).color
}
