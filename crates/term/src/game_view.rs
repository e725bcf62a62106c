//! GameView: maps `core::Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The canvas is scaled uniformly so that one terminal column and one half row
//! both cover `scale` canvas units, then drawn with half-block pixels inside a
//! border. A status line sits under the border.

use crate::core::{Rect, Session};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BrickTier, Phase};

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const CANVAS_BG: Rgb = Rgb::new(240, 240, 235);
const INK: Rgb = Rgb::new(20, 20, 20);

const START_PROMPT: &str = "CLICK SOMEWHERE TO START";
const LIVES_LABEL: &str = "Lives: ";
const RESTART_PROMPT: &str = "PRESS 'SPACE' FOR RESTART";
const TOO_SMALL: &str = "terminal too small";

/// Rows below the canvas reserved for the status line.
const STATUS_ROWS: u16 = 1;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Placement of the canvas on the terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Terminal column of canvas x = 0
    pub origin_x: u16,
    /// Terminal row of canvas y = 0
    pub origin_y: u16,
    /// Canvas width in columns
    pub columns: u16,
    /// Canvas height in rows (twice as many half rows)
    pub rows: u16,
    /// Canvas units per column and per half row
    pub scale: f32,
}

impl Projection {
    /// Canvas x at the middle of a terminal column.
    pub fn column_to_canvas_x(&self, column: u16) -> f32 {
        (column as f32 - self.origin_x as f32 + 0.5) * self.scale
    }

    /// Terminal row holding canvas y (clamped to the canvas rows).
    pub fn canvas_y_to_row(&self, y: f32) -> u16 {
        let row = (y / self.scale / 2.0).floor().max(0.0) as u16;
        self.origin_y + row.min(self.rows.saturating_sub(1))
    }

    /// Half-pixel span covered by `[lo, hi)` canvas units, clipped to `limit`.
    fn span(&self, lo: f32, hi: f32, limit: u16) -> Option<(u16, u16)> {
        let first = (lo / self.scale).floor().max(0.0);
        let last = ((hi / self.scale).ceil() - 1.0).min(limit as f32 - 1.0);
        if last < first || first >= limit as f32 {
            return None;
        }
        Some((first as u16, last.max(first) as u16))
    }
}

/// A lightweight terminal renderer for the Breakout game.
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Fit a canvas into the viewport, or `None` when there is no room.
    pub fn projection(
        &self,
        canvas_width: f32,
        canvas_height: f32,
        viewport: Viewport,
    ) -> Option<Projection> {
        let avail_w = viewport.width.saturating_sub(2);
        let avail_h = viewport.height.saturating_sub(2 + STATUS_ROWS);
        if avail_w == 0 || avail_h == 0 || canvas_width <= 0.0 || canvas_height <= 0.0 {
            return None;
        }

        let scale = (canvas_width / avail_w as f32).max(canvas_height / (2.0 * avail_h as f32));
        // Tolerance keeps exact fits from rounding up into a missing column.
        let columns = ((canvas_width / scale) - 1e-3).ceil().max(1.0) as u16;
        let rows = ((canvas_height / scale / 2.0) - 1e-3).ceil().max(1.0) as u16;

        let frame_w = columns + 2;
        let frame_h = rows + 2 + STATUS_ROWS;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        Some(Projection {
            origin_x: start_x + 1,
            origin_y: start_y + 1,
            columns,
            rows,
            scale,
        })
    }

    /// Projection for a session's canvas.
    pub fn session_projection(&self, session: &Session, viewport: Viewport) -> Option<Projection> {
        self.projection(session.canvas_width(), session.canvas_height(), viewport)
    }

    /// Render the current session into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::plain(Rgb::new(220, 220, 220), SCREEN_BG).into_cell(' '));

        let Some(proj) = self.session_projection(session, viewport) else {
            fb.put_str(0, 0, TOO_SMALL, CellStyle::default());
            return;
        };

        let border = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
        self.draw_border(
            fb,
            proj.origin_x - 1,
            proj.origin_y - 1,
            proj.columns + 2,
            proj.rows + 2,
            border,
        );

        // Canvas background: every cell becomes a half-block pixel pair.
        for row in 0..proj.rows * 2 {
            for col in 0..proj.columns {
                fb.set_half(proj.origin_x + col, proj.origin_y * 2 + row, CANVAS_BG);
            }
        }

        for brick in session.bricks().iter() {
            self.paint_rect(fb, &proj, &brick.rect, tier_color(brick.tier));
        }
        self.paint_rect(fb, &proj, &session.paddle().bounds(), INK);
        let ball = session.ball();
        self.paint_disc(fb, &proj, ball.x, ball.y, ball.radius, INK);

        self.draw_prompts(fb, &proj, session);
        self.draw_status(fb, &proj, session);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Paint every half pixel the rectangle touches.
    fn paint_rect(&self, fb: &mut FrameBuffer, proj: &Projection, rect: &Rect, color: Rgb) {
        let Some((x0, x1)) = proj.span(rect.left, rect.right, proj.columns) else {
            return;
        };
        let Some((y0, y1)) = proj.span(rect.top, rect.bottom, proj.rows * 2) else {
            return;
        };
        for py in y0..=y1 {
            for px in x0..=x1 {
                fb.set_half(proj.origin_x + px, proj.origin_y * 2 + py, color);
            }
        }
    }

    /// Paint the half pixels whose centers lie inside the (slightly padded) disc.
    fn paint_disc(
        &self,
        fb: &mut FrameBuffer,
        proj: &Projection,
        cx: f32,
        cy: f32,
        radius: f32,
        color: Rgb,
    ) {
        let bbox = Rect::around(cx, cy, radius);
        let Some((x0, x1)) = proj.span(bbox.left, bbox.right, proj.columns) else {
            return;
        };
        let Some((y0, y1)) = proj.span(bbox.top, bbox.bottom, proj.rows * 2) else {
            return;
        };

        let reach = radius + proj.scale * 0.5;
        let mut painted = false;
        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = (px as f32 + 0.5) * proj.scale - cx;
                let dy = (py as f32 + 0.5) * proj.scale - cy;
                if dx * dx + dy * dy <= reach * reach {
                    fb.set_half(proj.origin_x + px, proj.origin_y * 2 + py, color);
                    painted = true;
                }
            }
        }

        // Tiny scales: keep the ball visible as at least one pixel.
        if !painted {
            fb.set_half(proj.origin_x + x0, proj.origin_y * 2 + y0, color);
        }
    }

    fn draw_prompts(&self, fb: &mut FrameBuffer, proj: &Projection, session: &Session) {
        let text = CellStyle::plain(INK, CANVAS_BG);
        let title = text.bold();
        let h = session.canvas_height();

        match session.phase() {
            Phase::AwaitingStart => {
                self.draw_centered(fb, proj, h / 2.0 + 50.0, START_PROMPT, 0, text);

                let digits = decimal_width(session.lives() as u32);
                let row = proj.canvas_y_to_row(h / 2.0 + 100.0);
                let x = self.draw_centered(fb, proj, h / 2.0 + 100.0, LIVES_LABEL, digits, text);
                fb.put_u32(x + LIVES_LABEL.len() as u16, row, session.lives() as u32, text);
            }
            Phase::GameOver => {
                self.draw_centered(fb, proj, h / 2.0, "GAME OVER", 0, title);
                self.draw_centered(fb, proj, h / 1.3 + 50.0, RESTART_PROMPT, 0, text);
            }
            Phase::Won => {
                self.draw_centered(fb, proj, h / 2.0, "WIN", 0, title);
                self.draw_centered(fb, proj, h / 1.3 + 50.0, RESTART_PROMPT, 0, text);
            }
            Phase::Playing | Phase::RoundLost => {}
        }
    }

    /// Center `label` (plus `extra` trailing cells) on the canvas at canvas y.
    /// Returns the starting column.
    fn draw_centered(
        &self,
        fb: &mut FrameBuffer,
        proj: &Projection,
        canvas_y: f32,
        label: &str,
        extra: u16,
        style: CellStyle,
    ) -> u16 {
        let width = label.chars().count() as u16 + extra;
        let x = proj.origin_x + proj.columns.saturating_sub(width) / 2;
        fb.put_str(x, proj.canvas_y_to_row(canvas_y), label, style);
        x
    }

    fn draw_status(&self, fb: &mut FrameBuffer, proj: &Projection, session: &Session) {
        let y = proj.origin_y + proj.rows + 1;
        let x0 = proj.origin_x - 1;
        let label = CellStyle::plain(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), SCREEN_BG);
        let dim = CellStyle { dim: true, ..value };

        let mut x = x0;
        fb.put_str(x, y, "LIVES ", label);
        x += 6;
        x += fb.put_u32(x, y, session.lives() as u32, value);
        x += 2;

        fb.put_str(x, y, "BRICKS ", label);
        x += 7;
        x += fb.put_u32(x, y, session.bricks().remaining() as u32, value);
        fb.put_char(x, y, '/', value);
        x += 1;
        x += fb.put_u32(x, y, session.bricks().capacity() as u32, value);
        x += 2;

        fb.put_str(x, y, "q quit", dim);
    }
}

fn tier_color(tier: BrickTier) -> Rgb {
    match tier {
        BrickTier::Red => Rgb::new(220, 50, 47),
        BrickTier::Orange => Rgb::new(255, 140, 0),
        BrickTier::Yellow => Rgb::new(230, 200, 0),
        BrickTier::Green => Rgb::new(60, 180, 75),
        BrickTier::Cyan => Rgb::new(0, 190, 200),
    }
}

fn decimal_width(mut n: u32) -> u16 {
    let mut w = 1;
    while n >= 10 {
        n /= 10;
        w += 1;
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    // 44 x 33 fits the 420 x 600 canvas at exactly 10 units per column.
    fn exact_viewport() -> Viewport {
        Viewport::new(44, 33)
    }

    #[test]
    fn test_exact_fit_projection() {
        let proj = GameView::default()
            .projection(420.0, 600.0, exact_viewport())
            .unwrap();
        assert_eq!(proj.scale, 10.0);
        assert_eq!((proj.columns, proj.rows), (42, 30));
        assert_eq!((proj.origin_x, proj.origin_y), (1, 1));
    }

    #[test]
    fn test_projection_is_centered_on_wide_viewports() {
        let proj = GameView::default()
            .projection(420.0, 600.0, Viewport::new(84, 33))
            .unwrap();
        assert_eq!(proj.scale, 10.0);
        assert_eq!(proj.origin_x, 21);
    }

    #[test]
    fn test_projection_needs_room() {
        let view = GameView::default();
        assert!(view.projection(420.0, 600.0, Viewport::new(2, 40)).is_none());
        assert!(view.projection(420.0, 600.0, Viewport::new(40, 3)).is_none());
        assert!(view.projection(420.0, 600.0, Viewport::new(3, 4)).is_some());
    }

    #[test]
    fn test_column_to_canvas_x() {
        let proj = GameView::default()
            .projection(420.0, 600.0, exact_viewport())
            .unwrap();
        assert_eq!(proj.column_to_canvas_x(1), 5.0);
        assert_eq!(proj.column_to_canvas_x(22), 215.0);
        // Left of the canvas maps to negative x, which the paddle ignores.
        assert!(proj.column_to_canvas_x(0) < 0.0);
    }

    #[test]
    fn test_span_clips_to_canvas() {
        let proj = GameView::default()
            .projection(420.0, 600.0, exact_viewport())
            .unwrap();
        assert_eq!(proj.span(0.0, 37.0, 42), Some((0, 3)));
        assert_eq!(proj.span(70.0, 78.0, 60), Some((7, 7)));
        assert_eq!(proj.span(590.0, 650.0, 60), Some((59, 59)));
        assert_eq!(proj.span(610.0, 630.0, 60), None);
    }

    #[test]
    fn test_decimal_width() {
        assert_eq!(decimal_width(0), 1);
        assert_eq!(decimal_width(9), 1);
        assert_eq!(decimal_width(10), 2);
        assert_eq!(decimal_width(100), 3);
    }
}
