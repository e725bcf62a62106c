//! Geometry module - axis-aligned boxes and overlap tests
//!
//! Coordinates follow the canvas: origin top-left, x to the right, y downward.

/// Axis-aligned rectangle given by its edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle from its top-left corner and size.
    pub fn from_origin(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    /// Bounding box of a circle.
    pub fn around(center_x: f32, center_y: f32, radius: f32) -> Self {
        Self::new(
            center_x - radius,
            center_y - radius,
            center_x + radius,
            center_y + radius,
        )
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    /// Inclusive overlap test: boxes that merely touch along an edge overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }

    /// True when the horizontal span lies inside `[min, max]`.
    #[inline]
    pub fn within_x(&self, min: f32, max: f32) -> bool {
        self.left >= min && self.right <= max
    }
}
