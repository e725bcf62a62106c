use crate::session::Session;
use crate::types::Phase;

/// Compact copy of the observable session state.
///
/// Cheap to take every tick; used for tracing and by tests that compare
/// sessions without reaching into their entities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub lives: u8,
    pub episode: u32,
    pub ticks: u64,
    pub seed: u64,
    pub bricks_remaining: u32,
    pub bricks_total: u32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_vx: f32,
    pub ball_vy: f32,
    pub paddle_left: f32,
}

impl SessionSnapshot {
    /// True while player input changes the outcome.
    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }
}

impl From<&Session> for SessionSnapshot {
    fn from(s: &Session) -> Self {
        let ball = s.ball();
        Self {
            phase: s.phase(),
            lives: s.lives(),
            episode: s.episode(),
            ticks: s.ticks(),
            seed: s.seed(),
            bricks_remaining: s.bricks().remaining() as u32,
            bricks_total: s.bricks().capacity() as u32,
            ball_x: ball.x,
            ball_y: ball.y,
            ball_vx: ball.vx,
            ball_vy: ball.vy,
            paddle_left: s.paddle().left,
        }
    }
}
