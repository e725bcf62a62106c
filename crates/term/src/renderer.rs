//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one and only changed runs of cells
//! are written. Style changes are emitted per component, which matters for
//! half-block pixels where neighbouring cells often share one of the colors.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor, event,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub const WINDOW_TITLE: &str = "Breakout";

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen, and start reporting mouse motion.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::SetTitle(WINDOW_TITLE))?;
        self.buf.queue(event::EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(event::DisableMouseCapture)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (after a resize, for instance).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The renderer diffs against the previous frame, then swaps buffers so the
    /// caller gets the old allocation back for the next frame.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            other => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = other.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Tracks the style the terminal currently has so only differences are emitted.
#[derive(Default)]
struct StyleCursor {
    current: Option<CellStyle>,
}

impl StyleCursor {
    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        let prev = match self.current {
            Some(prev) if prev == style => return Ok(()),
            other => other,
        };

        let attrs_changed = prev.map_or(true, |p| p.bold != style.bold || p.dim != style.dim);
        if attrs_changed {
            // Attribute reset also clears colors on some terminals; re-emit both.
            out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        if attrs_changed || prev.map_or(true, |p| p.fg != style.fg) {
            out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        }
        if attrs_changed || prev.map_or(true, |p| p.bg != style.bg) {
            out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        }

        self.current = Some(style);
        Ok(())
    }

    fn print(&mut self, out: &mut Vec<u8>, cell: Cell) -> Result<()> {
        self.apply(out, cell.style)?;
        out.queue(Print(cell.ch))?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut styles = StyleCursor::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            styles.print(out, fb.get(x, y).unwrap_or_default())?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the changed runs between two same-sized frames into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut styles = StyleCursor::default();
    let mut wrote = false;

    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            styles.print(out, next.get(x + dx, y).unwrap_or_default())?;
        }
        wrote = true;
    }

    if wrote {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Runs `(x, y, len)` of cells that differ between two frames.
///
/// A size mismatch marks every row dirty.
fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = (u16, u16, u16)> + 'a {
    let w = next.width();
    let resized = prev.width() != next.width() || prev.height() != next.height();

    (0..next.height()).flat_map(move |y| {
        let mut x = 0u16;
        std::iter::from_fn(move || {
            if resized {
                if x == 0 && w > 0 {
                    x = w;
                    return Some((0, y, w));
                }
                return None;
            }

            let same = |x: u16| prev.get(x, y) == next.get(x, y);
            while x < w && same(x) {
                x += 1;
            }
            if x >= w {
                return None;
            }
            let start = x;
            while x < w && !same(x) {
                x += 1;
            }
            Some((start, y, x - start))
        })
    })
}
