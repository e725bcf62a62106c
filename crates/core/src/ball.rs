//! Ball module - motion and wall response
//!
//! The ball moves by its full velocity once per tick. Sides and top reflect;
//! the bottom does not: a ball that falls completely past the bottom edge
//! ends the round instead of bouncing.

use crate::geometry::Rect;
use crate::rng::BallRng;
use crate::types::{BALL_RADIUS, VELOCITY_Y};

/// Outcome of one motion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Still on the canvas; `bounced` when a side or the top reflected it
    InPlay { bounced: bool },
    /// Fully below the canvas
    ExitedBottom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Center x
    pub x: f32,
    /// Center y
    pub y: f32,
    pub radius: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Ball {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self {
            x,
            y,
            radius: BALL_RADIUS,
            vx,
            vy,
        }
    }

    /// Fresh ball at the given center: random horizontal velocity, moving down.
    pub fn spawn(center_x: f32, center_y: f32, rng: &mut BallRng) -> Self {
        Self::new(center_x, center_y, rng.horizontal_velocity(), VELOCITY_Y)
    }

    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    pub fn bounds(&self) -> Rect {
        Rect::around(self.x, self.y, self.radius)
    }

    /// Move by one tick of velocity.
    #[inline]
    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    pub fn reflect_vertical(&mut self) {
        self.vy = -self.vy;
    }

    /// Advance one tick and respond to the canvas edges.
    pub fn step(&mut self, canvas_width: f32, canvas_height: f32) -> Motion {
        self.advance();

        let left = self.x - self.radius;
        let top = self.y - self.radius;
        let mut bounced = false;

        if left <= 0.0 {
            self.vx = -self.vx;
            bounced = true;
        }
        if left >= canvas_width - self.diameter() {
            self.vx = -self.vx;
            bounced = true;
        }
        if top <= 0.0 {
            self.vy = -self.vy;
            bounced = true;
        }
        if top >= canvas_height + self.diameter() {
            return Motion::ExitedBottom;
        }

        Motion::InPlay { bounced }
    }
}
