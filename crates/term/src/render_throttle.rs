//! Frame pacing for the terminal runner.
//!
//! While the ball moves every tick produces a new picture, so every tick is
//! drawn. On the start prompt and the end screens nothing moves, and the view
//! is only redrawn when the session fingerprint changes or a keep-alive
//! interval has passed (terminals sometimes drop output on resize).

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Decide whether to draw a frame at `now_ms`.
    ///
    /// Animated frames always draw. Static frames draw on a fingerprint change,
    /// otherwise at most once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        if !is_static || changed || stale {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            return true;
        }
        false
    }

    /// Forget the last frame so the next call always draws.
    pub fn reset(&mut self) {
        self.last_fingerprint = None;
    }
}
