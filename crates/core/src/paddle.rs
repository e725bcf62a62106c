//! Paddle module - pointer-driven horizontal bar
//!
//! The paddle never leaves the canvas. A pointer position that would push any
//! part of it outside is ignored rather than clamped, so the paddle keeps its
//! last valid position.

use crate::geometry::Rect;
use crate::types::{PADDLE_HEIGHT, PADDLE_WIDTH, PADDLE_Y_OFFSET};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Centered paddle, raised `PADDLE_Y_OFFSET` above the bottom.
    pub fn new(canvas_center_x: f32, canvas_height: f32) -> Self {
        Self {
            left: canvas_center_x - PADDLE_WIDTH / 2.0,
            top: canvas_height - (PADDLE_Y_OFFSET + PADDLE_HEIGHT),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.left, self.top, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    /// Put the left edge at `left_x` if the whole paddle stays in bounds.
    ///
    /// Returns whether the paddle moved.
    pub fn move_to(&mut self, left_x: f32, canvas_width: f32) -> bool {
        if left_x >= 0.0 && left_x + self.width <= canvas_width {
            self.left = left_x;
            true
        } else {
            false
        }
    }

    /// Center the paddle under the pointer, subject to [`Paddle::move_to`].
    pub fn follow_pointer(&mut self, pointer_x: f32, canvas_width: f32) -> bool {
        self.move_to(pointer_x - self.width / 2.0, canvas_width)
    }
}
