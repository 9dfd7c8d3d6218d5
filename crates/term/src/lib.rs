//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view paints into a framebuffer of
//! styled character cells and the renderer flushes that framebuffer to the terminal.
//!
//! Goals:
//! - Keep `core` free of any notion of terminals or pixels
//! - Precise control over aspect ratio (2 chars wide per board cell by default)
//! - Only re-emit changed cells after the first frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
