//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any rendering code. It maps
//! `crossterm` mouse and key events into [`InputEvent`]s and accumulates them
//! between fixed ticks into a [`crate::types::TickInput`].

pub mod handler;
pub mod map;

pub use tui_breakout_types as types;

pub use handler::InputHandler;
pub use map::{map_event, should_quit, InputEvent};
