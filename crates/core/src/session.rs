//! Session module - the game state machine
//!
//! A [`Session`] owns every entity (brick grid, ball, paddle) and advances
//! them one fixed tick at a time from a [`TickInput`]. It performs no I/O:
//! waiting for a click or the restart key is just a phase that ignores ticks
//! until the matching input arrives.

use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

use crate::ball::{Ball, Motion};
use crate::bricks::BrickGrid;
use crate::collision;
use crate::paddle::Paddle;
use crate::rng::BallRng;
use crate::snapshot::SessionSnapshot;
use crate::types::{
    GameEvent, Phase, TickInput, BRICK_COLUMNS, BRICK_ROWS, CANVAS_HEIGHT, CANVAS_WIDTH,
    INITIAL_LIVES,
};

/// Events produced by a single tick.
pub type TickEvents = ArrayVec<GameEvent, 8>;

/// Startup parameters; fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub rows: u32,
    pub columns: u32,
    pub lives: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            rows: BRICK_ROWS,
            columns: BRICK_COLUMNS,
            lives: INITIAL_LIVES,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    rng: BallRng,
    grid: BrickGrid,
    ball: Ball,
    paddle: Paddle,
    lives: u8,
    phase: Phase,
    /// Monotonic session id (increments on restart)
    episode: u32,
    /// Ticks processed since the last restart
    ticks: u64,
}

impl Session {
    /// Create a session with the default canvas and grid
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, SessionConfig::default())
    }

    pub fn with_config(seed: u64, config: SessionConfig) -> Self {
        Self::build(config, BallRng::new(seed), 0)
    }

    fn build(config: SessionConfig, mut rng: BallRng, episode: u32) -> Self {
        let center_x = config.canvas_width / 2.0;
        let center_y = config.canvas_height / 2.0;
        Self {
            grid: BrickGrid::initialize(config.rows, config.columns, config.canvas_width),
            ball: Ball::spawn(center_x, center_y, &mut rng),
            paddle: Paddle::new(center_x, config.canvas_height),
            lives: config.lives,
            phase: Phase::AwaitingStart,
            config,
            rng,
            episode,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn canvas_width(&self) -> f32 {
        self.config.canvas_width
    }

    pub fn canvas_height(&self) -> f32 {
        self.config.canvas_height
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn bricks(&self) -> &BrickGrid {
        &self.grid
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one fixed tick.
    pub fn tick(&mut self, input: &TickInput) -> TickEvents {
        let mut events = TickEvents::new();
        self.ticks = self.ticks.wrapping_add(1);

        match self.phase {
            Phase::AwaitingStart => {
                if input.confirm {
                    self.enter(Phase::Playing);
                    events.push(GameEvent::Started);
                }
            }
            Phase::Playing => self.play(input, &mut events),
            Phase::RoundLost => self.settle_round(&mut events),
            Phase::GameOver | Phase::Won => {
                if input.restart {
                    self.restart();
                    events.push(GameEvent::Restarted);
                }
            }
        }

        for event in &events {
            log::trace!("tick {}: {:?}", self.ticks, event);
        }
        events
    }

    fn play(&mut self, input: &TickInput, events: &mut TickEvents) {
        let (width, height) = (self.config.canvas_width, self.config.canvas_height);

        match self.ball.step(width, height) {
            Motion::ExitedBottom => {
                self.enter(Phase::RoundLost);
                events.push(GameEvent::BallLost);
                return;
            }
            Motion::InPlay { bounced: true } => events.push(GameEvent::WallBounce),
            Motion::InPlay { bounced: false } => {}
        }

        if let Some(x) = input.pointer_x {
            self.paddle.follow_pointer(x, width);
        }

        let hit = collision::resolve(&self.ball, &self.paddle, &self.grid);
        if hit.paddle {
            self.ball.reflect_vertical();
            events.push(GameEvent::PaddleBounce);
        } else if hit.brick() {
            for id in &hit.bricks {
                self.grid.remove(*id);
            }
            self.ball.reflect_vertical();
            events.push(GameEvent::BricksDestroyed {
                count: hit.bricks.len() as u32,
                remaining: self.grid.remaining() as u32,
            });
        }

        if self.grid.is_empty() {
            self.enter(Phase::Won);
            events.push(GameEvent::Won);
        }
    }

    fn settle_round(&mut self, events: &mut TickEvents) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.enter(Phase::GameOver);
            events.push(GameEvent::GameOver);
            return;
        }

        let center_x = self.config.canvas_width / 2.0;
        let center_y = self.config.canvas_height / 2.0;
        self.ball = Ball::spawn(center_x, center_y, &mut self.rng);
        self.enter(Phase::AwaitingStart);
        events.push(GameEvent::LifeLost { lives: self.lives });
    }

    /// Replace everything with a fresh session. The RNG stream carries on so
    /// consecutive sessions differ.
    fn restart(&mut self) {
        let rng = self.rng.clone();
        *self = Self::build(self.config, rng, self.episode.wrapping_add(1));
        log::debug!("episode {} started", self.episode);
    }

    fn enter(&mut self, next: Phase) {
        log::debug!(
            "phase {} -> {} (lives {}, bricks {})",
            self.phase.as_str(),
            next.as_str(),
            self.lives,
            self.grid.remaining()
        );
        self.phase = next;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(self)
    }

    /// Hash of everything that affects the picture.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.phase.hash(&mut hasher);
        self.lives.hash(&mut hasher);
        self.episode.hash(&mut hasher);
        self.grid.remaining().hash(&mut hasher);
        self.paddle.left.to_bits().hash(&mut hasher);
        self.ball.x.to_bits().hash(&mut hasher);
        self.ball.y.to_bits().hash(&mut hasher);
        hasher.finish()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
