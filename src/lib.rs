//! TUI Breakout (workspace facade crate).
//!
//! The game is split into dedicated crates under `crates/`; this package
//! re-exports them as `tui_breakout::{core,input,term,types}` and holds the
//! runner's configuration, logging and trace helpers.

pub mod config;
pub mod logging;
pub mod trace;

pub use tui_breakout_core as core;
pub use tui_breakout_input as input;
pub use tui_breakout_term as term;
pub use tui_breakout_types as types;
