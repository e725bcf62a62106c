//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical games
//! - **Testable**: Every rule is exercised by unit tests
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`geometry`]: Axis-aligned rectangles and the inclusive overlap test
//! - [`bricks`]: Brick grid layout, color tiers and O(1) removal
//! - [`ball`]: Ball motion and wall response (no bounce off the bottom)
//! - [`paddle`]: Pointer-driven paddle that ignores out-of-range positions
//! - [`collision`]: Tagged overlap queries and paddle/brick resolution
//! - [`rng`]: Seeded horizontal velocity draws
//! - [`session`]: The phase state machine that owns all entities
//! - [`snapshot`]: Copyable summary of a session
//!
//! # Game Rules
//!
//! - **Serve**: The ball starts at the canvas center moving down, with a random
//!   whole-number horizontal speed between 2 and 6 in either direction
//! - **Walls**: Sides and top reflect; the bottom does not
//! - **Paddle**: Reflects the ball vertically; takes precedence over bricks
//! - **Bricks**: Every brick touched in a tick is destroyed; the ball reflects once
//! - **Lives**: 3; a ball that falls fully past the bottom costs one
//! - **End**: No bricks left wins, no lives left loses; space restarts
//!
//! # Example
//!
//! ```
//! use tui_breakout_core::Session;
//! use tui_breakout_types::{Phase, TickInput};
//!
//! let mut session = Session::new(12345);
//! assert_eq!(session.phase(), Phase::AwaitingStart);
//!
//! // A click starts the round.
//! session.tick(&TickInput::confirm());
//! assert_eq!(session.phase(), Phase::Playing);
//!
//! // The pointer steers the paddle.
//! session.tick(&TickInput::pointer(100.0));
//! assert_eq!(session.paddle().center_x(), 100.0);
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep: call [`Session::tick`] once every
//! [`types::TICK_MS`] milliseconds. Velocities are in canvas units per tick.

pub mod ball;
pub mod bricks;
pub mod collision;
pub mod geometry;
pub mod paddle;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_breakout_types as types;

// Re-export commonly used types for convenience
pub use ball::{Ball, Motion};
pub use bricks::{Brick, BrickGrid, BrickId};
pub use collision::{resolve, Collision, EntityTag};
pub use geometry::Rect;
pub use paddle::Paddle;
pub use rng::BallRng;
pub use session::{Session, SessionConfig, TickEvents};
pub use snapshot::SessionSnapshot;
