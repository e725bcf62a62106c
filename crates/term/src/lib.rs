//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a simple framebuffer that is flushed to the
//! terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Scale the fixed-size canvas uniformly into whatever terminal is available
//! - Use half-block pixels so the playfield keeps its proportions

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_breakout_core as core;
pub use tui_breakout_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use game_view::{AnchorY, GameView, Projection, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
