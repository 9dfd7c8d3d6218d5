//! Core types module - shared data structures and constants
//!
//! Pure data with no external dependencies, usable from the core game logic, the
//! terminal front-end and tests alike.
//!
//! # Board Dimensions
//!
//! - **Columns**: 15 (indexed 0-14)
//! - **Rows**: 30 (indexed 0-29, row 0 is the top)
//!
//! Both can be overridden per session; these are the defaults.
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{PieceKind, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! assert_eq!(PieceKind::ALL.len(), 11);
//! assert_eq!(PieceKind::LI.as_str(), "LI");
//!
//! assert_eq!(DEFAULT_COLS, 15);
//! assert_eq!(DEFAULT_ROWS, 30);
//! ```

/// Default board width in cells.
pub const DEFAULT_COLS: u16 = 15;

/// Default board height in cells.
pub const DEFAULT_ROWS: u16 = 30;

/// Default gravity period in milliseconds.
pub const DEFAULT_TICK_MS: u32 = 500;

/// Points awarded per row cleared (flat, no multi-row bonus).
pub const ROW_CLEAR_POINTS: u32 = 100;

/// Largest extent (width or height) of any shape in the catalog, in any orientation.
pub const MAX_SHAPE_EXTENT: u16 = 6;

/// Largest board width or height accepted from configuration.
pub const MAX_BOARD_EXTENT: u16 = 200;

/// Piece kinds: the seven tetrominoes plus four extra shapes.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
    /// Single block sitting bottom-right in a 3x2 box.
    B,
    /// Cup shape.
    C,
    /// Full 3x2 slab.
    F,
    /// Six-long bar.
    LI,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 11] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::B,
        PieceKind::C,
        PieceKind::F,
        PieceKind::LI,
    ];

    /// Upper-case tag, as shown in the side panel.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::B => "B",
            PieceKind::C => "C",
            PieceKind::F => "F",
            PieceKind::LI => "LI",
        }
    }

    /// Position of this kind in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Discrete commands delivered by the front-end.
///
/// None of them carries a payload; the gravity tick is delivered separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Rotate piece 90° (transpose then reverse rows, no kicks)
    Rotate,
    /// Freeze or unfreeze the session
    TogglePause,
    /// Clear the board and score and start over
    Reset,
}

/// 24-bit display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    ///
    /// ```
    /// use tui_blockfall_types::Color;
    ///
    /// assert_eq!(Color::from_hex(0x5BC0EB), Color::new(0x5B, 0xC0, 0xEB));
    /// ```
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Packed `0xRRGGBB` value.
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Fill color for locked board cells (the board keeps occupancy only).
pub const LOCKED_CELL_COLOR: Color = Color::from_hex(0xE86262);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_kind_index_matches_all_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn piece_kind_tags_are_distinct() {
        let mut tags: Vec<_> = PieceKind::ALL.iter().map(|k| k.as_str()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), PieceKind::ALL.len());
    }

    #[test]
    fn color_hex_round_trip() {
        assert_eq!(LOCKED_CELL_COLOR.to_hex(), 0xE86262);
        assert_eq!(Color::from_hex(0x37474F), Color::new(0x37, 0x47, 0x4F));
    }
}
