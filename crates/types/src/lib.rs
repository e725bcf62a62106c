//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Canvas Geometry
//!
//! All positions are expressed in canvas units (the original game used pixels):
//!
//! - **Canvas**: 420 wide, 600 tall, origin top-left, y grows downward
//! - **Bricks**: 10 rows x 10 columns, 8 tall, separated by 4, first row at y = 70
//! - **Ball**: radius 10, spawned at the canvas center
//! - **Paddle**: 60 x 10, its bottom edge 30 above the canvas bottom
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `VELOCITY_Y` | 8.0 | Vertical ball speed, units per tick |
//! | `VELOCITY_X_MIN` | 2.0 | Lower bound of the horizontal speed draw |
//! | `VELOCITY_X_MAX` | 6.0 | Upper bound of the horizontal speed draw |
//!
//! # Examples
//!
//! ```
//! use tui_breakout_types::{BrickTier, GameAction, Phase, CANVAS_WIDTH, BRICK_COLUMNS};
//!
//! assert_eq!(CANVAS_WIDTH, 420.0);
//! assert_eq!(BRICK_COLUMNS, 10);
//!
//! // Creation index 45 falls in the third color tier.
//! assert_eq!(BrickTier::from_creation_index(45), BrickTier::Yellow);
//!
//! assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
//! assert!(Phase::Won.is_terminal());
//! ```

/// Canvas width in canvas units.
pub const CANVAS_WIDTH: f32 = 420.0;

/// Canvas height in canvas units.
pub const CANVAS_HEIGHT: f32 = 600.0;

/// Number of bricks in each row.
pub const BRICK_COLUMNS: u32 = 10;

/// Number of brick rows.
pub const BRICK_ROWS: u32 = 10;

/// Separation between neighboring bricks.
pub const BRICK_SEP: f32 = 4.0;

/// Height of each brick.
pub const BRICK_HEIGHT: f32 = 8.0;

/// Offset of the top brick row from the top of the canvas.
pub const BRICK_Y_OFFSET: f32 = 70.0;

/// Consecutive bricks (in creation order) sharing one color tier.
pub const BRICKS_PER_TIER: usize = 20;

/// Ball radius.
pub const BALL_RADIUS: f32 = 10.0;

/// Initial vertical ball velocity (downward), units per tick.
pub const VELOCITY_Y: f32 = 8.0;

/// Minimum horizontal speed of a freshly spawned ball.
pub const VELOCITY_X_MIN: f32 = 2.0;

/// Maximum horizontal speed of a freshly spawned ball.
pub const VELOCITY_X_MAX: f32 = 6.0;

/// Paddle width.
pub const PADDLE_WIDTH: f32 = 60.0;

/// Paddle height.
pub const PADDLE_HEIGHT: f32 = 10.0;

/// Gap between the paddle's bottom edge and the canvas bottom.
pub const PADDLE_Y_OFFSET: f32 = 30.0;

/// Lives at the start of every session.
pub const INITIAL_LIVES: u8 = 3;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Identifier of the bounce sound effect.
///
/// Reserved for an audio hook; nothing in the game plays it.
pub const BOUNCE_SOUND: &str = "bounce.au";

/// Coarse session phase.
///
/// ```text
/// AwaitingStart --confirm--> Playing --ball exits bottom--> RoundLost
///       ^                       |                               |
///       |                       +--grid empty--> Won            |
///       +-------------------- lives left -----------------------+
///                                               lives == 0 --> GameOver
/// Won / GameOver --restart--> AwaitingStart
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Start prompt shown, waiting for a confirm gesture
    AwaitingStart,
    /// Ball in motion
    Playing,
    /// Ball left the canvas; the life is settled on the next tick
    RoundLost,
    /// Lives exhausted, waiting for restart
    GameOver,
    /// Bricks exhausted, waiting for restart
    Won,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::AwaitingStart => "awaiting_start",
            Phase::Playing => "playing",
            Phase::RoundLost => "round_lost",
            Phase::GameOver => "game_over",
            Phase::Won => "won",
        }
    }

    /// True for the phases that only a restart leaves.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::GameOver | Phase::Won)
    }

    /// True while the picture changes every tick.
    pub fn is_animated(&self) -> bool {
        matches!(self, Phase::Playing | Phase::RoundLost)
    }
}

/// Brick color tiers, top rows first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrickTier {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
}

impl BrickTier {
    /// Palette in tier order.
    pub const ALL: [BrickTier; 5] = [
        BrickTier::Red,
        BrickTier::Orange,
        BrickTier::Yellow,
        BrickTier::Green,
        BrickTier::Cyan,
    ];

    /// Tier for the brick created at `index` (row-major).
    ///
    /// Grids larger than the default keep the last tier instead of running
    /// off the palette.
    ///
    /// ```
    /// use tui_breakout_types::BrickTier;
    ///
    /// assert_eq!(BrickTier::from_creation_index(0), BrickTier::Red);
    /// assert_eq!(BrickTier::from_creation_index(19), BrickTier::Red);
    /// assert_eq!(BrickTier::from_creation_index(20), BrickTier::Orange);
    /// assert_eq!(BrickTier::from_creation_index(99), BrickTier::Cyan);
    /// assert_eq!(BrickTier::from_creation_index(500), BrickTier::Cyan);
    /// ```
    pub fn from_creation_index(index: usize) -> Self {
        let tier = (index / BRICKS_PER_TIER).min(Self::ALL.len() - 1);
        Self::ALL[tier]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BrickTier::Red => "red",
            BrickTier::Orange => "orange",
            BrickTier::Yellow => "yellow",
            BrickTier::Green => "green",
            BrickTier::Cyan => "cyan",
        }
    }
}

/// Discrete player actions
///
/// Pointer motion is continuous and travels separately in [`TickInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Leave the start prompt (click or Enter)
    Confirm,
    /// Start a new session from the win/game-over screen (space)
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// ```
    /// use tui_breakout_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("Confirm"), Some(GameAction::Confirm));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "confirm" => Some(GameAction::Confirm),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Confirm => "confirm",
            GameAction::Restart => "restart",
        }
    }
}

/// Everything the session consumes in one fixed tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Pointer x in canvas units, if the pointer position is known
    pub pointer_x: Option<f32>,
    /// A confirm gesture arrived since the previous tick
    pub confirm: bool,
    /// The restart key was pressed since the previous tick
    pub restart: bool,
}

impl TickInput {
    pub fn pointer(x: f32) -> Self {
        Self {
            pointer_x: Some(x),
            ..Self::default()
        }
    }

    pub fn confirm() -> Self {
        Self {
            confirm: true,
            ..Self::default()
        }
    }

    pub fn restart() -> Self {
        Self {
            restart: true,
            ..Self::default()
        }
    }
}

/// Notable things that happened during a tick.
///
/// Emitted by the session for logging and presentation; the core never acts
/// on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Left the start prompt
    Started,
    /// Reflected off a side or the top of the canvas
    WallBounce,
    /// Reflected off the paddle
    PaddleBounce,
    /// One or more bricks destroyed in a single tick
    BricksDestroyed { count: u32, remaining: u32 },
    /// Ball fully left through the bottom
    BallLost,
    /// A life was deducted and lives remain
    LifeLost { lives: u8 },
    /// The last life was deducted
    GameOver,
    /// The last brick was destroyed
    Won,
    /// A fresh session replaced the finished one
    Restarted,
}

impl GameEvent {
    /// True for events a sound hook would accompany with [`BOUNCE_SOUND`].
    pub fn is_bounce(&self) -> bool {
        matches!(
            self,
            GameEvent::WallBounce | GameEvent::PaddleBounce | GameEvent::BricksDestroyed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_layout_defaults() {
        assert_eq!(CANVAS_WIDTH, 420.0);
        assert_eq!(CANVAS_HEIGHT, 600.0);
        assert_eq!(BRICK_ROWS * BRICK_COLUMNS, 100);
        assert_eq!(BRICK_SEP, 4.0);
        assert_eq!(BRICK_HEIGHT, 8.0);
        assert_eq!(BRICK_Y_OFFSET, 70.0);
        assert_eq!(INITIAL_LIVES, 3);
        assert_eq!(TICK_MS, 16);
    }

    #[test]
    fn default_grid_uses_every_tier_equally() {
        let mut counts = [0usize; 5];
        for i in 0..(BRICK_ROWS * BRICK_COLUMNS) as usize {
            let tier = BrickTier::from_creation_index(i);
            let slot = BrickTier::ALL.iter().position(|t| *t == tier).unwrap();
            counts[slot] += 1;
        }
        assert_eq!(counts, [20; 5]);
    }

    #[test]
    fn terminal_and_animated_phases() {
        assert!(!Phase::AwaitingStart.is_terminal());
        assert!(!Phase::Playing.is_terminal());
        assert!(Phase::GameOver.is_terminal());
        assert!(Phase::Won.is_terminal());

        assert!(Phase::Playing.is_animated());
        assert!(Phase::RoundLost.is_animated());
        assert!(!Phase::AwaitingStart.is_animated());
        assert!(!Phase::GameOver.is_animated());
    }

    #[test]
    fn action_names_round_trip() {
        for action in [GameAction::Confirm, GameAction::Restart] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn bounce_events() {
        assert!(GameEvent::WallBounce.is_bounce());
        assert!(GameEvent::PaddleBounce.is_bounce());
        assert!(GameEvent::BricksDestroyed { count: 1, remaining: 0 }.is_bounce());
        assert!(!GameEvent::BallLost.is_bounce());
        assert!(!GameEvent::Won.is_bounce());
    }
}
