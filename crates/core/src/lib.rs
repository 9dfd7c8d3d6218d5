//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules: the shape catalog, the falling piece with its
//! collision test, the occupancy board, and the loop that ties them together.
//! It has **no dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: inject a [`PieceSource`] and the same inputs replay the same game
//! - **Testable**: every rule is a plain method on plain data
//! - **Portable**: any front-end that can paint a grid cell can host it
//!
//! # Module Structure
//!
//! - [`catalog`]: the eleven shapes and their colors, one static table
//! - [`matrix`]: fixed-capacity boolean matrices with quarter-turn rotation
//! - [`piece`]: spawn, move, rotate, collision test and lock
//! - [`board`]: occupancy grid, full-row detection and clearing
//! - [`game_state`]: session state and the spawn/fall/lock/clear loop
//! - [`rng`]: next-piece sources (seeded uniform, fixed sequence)
//! - [`draw`]: the cell-painting interface front-ends implement
//!
//! # Rules
//!
//! - Pieces spawn at row 0, centered: `col = floor((cols - width) / 2)`
//! - Left/right/rotate are committed only if the result does not collide; no wall kicks
//! - A piece that cannot move down locks immediately (no lock delay)
//! - Every full row is cleared; each is worth 100 points, with no multi-row bonus
//! - A piece that collides where it spawns ends the game until reset
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{GameLoop, Phase, SequenceSource, StepOutcome};
//! use tui_blockfall_types::{GameAction, PieceKind};
//!
//! let mut game = GameLoop::new(15, 30, SequenceSource::new(vec![PieceKind::I]));
//! assert_eq!(game.state().piece().position(), (5, 0));
//!
//! game.apply(GameAction::MoveLeft);
//! assert_eq!(game.state().piece().position(), (4, 0));
//!
//! // Gravity until the bar lands on the floor.
//! while !matches!(game.tick(), StepOutcome::Locked(_)) {}
//! assert_eq!(game.state().phase(), Phase::Falling);
//! assert_eq!(game.state().board().count_occupied(), 4);
//! ```

pub mod board;
pub mod catalog;
pub mod draw;
pub mod game_state;
pub mod matrix;
pub mod piece;
pub mod rng;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{color_of, shape_of, ShapeDefinition};
pub use draw::{CellRecorder, DrawSurface};
pub use game_state::{GameLoop, GameState, LockReport, Phase, StepOutcome};
pub use matrix::Matrix;
pub use piece::{MoveDown, Piece};
pub use rng::{PieceSource, SequenceSource, SimpleRng};
