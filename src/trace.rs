//! JSON trace lines for phase transitions.

use serde_json::{json, Value};

use crate::core::SessionSnapshot;

/// Log target used for trace lines, so they can be filtered separately.
pub const TRACE_TARGET: &str = "breakout::trace";

pub fn snapshot_json(snapshot: &SessionSnapshot) -> Value {
    json!({
        "phase": snapshot.phase.as_str(),
        "lives": snapshot.lives,
        "episode": snapshot.episode,
        "ticks": snapshot.ticks,
        "seed": snapshot.seed,
        "bricks": {
            "remaining": snapshot.bricks_remaining,
            "total": snapshot.bricks_total,
        },
        "ball": {
            "x": snapshot.ball_x,
            "y": snapshot.ball_y,
            "vx": snapshot.ball_vx,
            "vy": snapshot.ball_vy,
        },
        "paddle_left": snapshot.paddle_left,
    })
}

/// Write one trace line for the snapshot.
pub fn emit(snapshot: &SessionSnapshot) {
    log::info!(target: TRACE_TARGET, "{}", snapshot_json(snapshot));
}
