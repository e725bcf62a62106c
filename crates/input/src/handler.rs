//! Per-tick input accumulation.
//!
//! Terminal events arrive at any time between ticks. The handler latches them
//! and hands the session exactly one [`TickInput`] per tick: the latest
//! pointer position plus any confirm/restart presses seen since the previous
//! tick. Draining clears the one-shot latches, so a press is consumed once.

use crate::map::InputEvent;
use crate::types::{GameAction, TickInput};

/// Latched input state between two ticks.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    pointer_column: Option<u16>,
    confirm: bool,
    restart: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer column, if the pointer has been seen at all.
    pub fn pointer_column(&self) -> Option<u16> {
        self.pointer_column
    }

    /// Record one event. `Resize` and `Quit` belong to the runner and are ignored.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pointer { column, .. } => {
                self.pointer_column = Some(column);
            }
            InputEvent::Click { column, .. } => {
                self.pointer_column = Some(column);
                self.confirm = true;
            }
            InputEvent::Action(GameAction::Confirm) => self.confirm = true,
            InputEvent::Action(GameAction::Restart) => self.restart = true,
            InputEvent::Resize | InputEvent::Quit => {}
        }
    }

    /// Build the input for the next tick and clear the one-shot latches.
    ///
    /// `to_canvas_x` converts a terminal column into canvas units; it depends
    /// on the current layout, which only the renderer knows.
    pub fn take_tick_input(&mut self, to_canvas_x: impl Fn(u16) -> f32) -> TickInput {
        let input = TickInput {
            pointer_x: self.pointer_column.map(to_canvas_x),
            confirm: self.confirm,
            restart: self.restart,
        };
        self.confirm = false;
        self.restart = false;
        input
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
