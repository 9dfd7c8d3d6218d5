//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the game's discrete commands. There is no
//! auto-repeat logic of its own: held keys repeat at the terminal's rate.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit};
