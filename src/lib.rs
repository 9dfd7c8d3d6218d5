//! Falling-block puzzle (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tui_blockfall::{core, input, term, types}` and adds the binary's
//! configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;

pub use config::GameConfig;
