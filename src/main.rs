//! Terminal Breakout runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from the `term` crate. The session advances on a fixed tick; input that
//! arrives between ticks is latched and applied on the next one.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{event, terminal};
use log::{debug, info, trace};

use tui_breakout::config::Config;
use tui_breakout::core::Session;
use tui_breakout::input::{map_event, InputEvent, InputHandler};
use tui_breakout::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_breakout::types::{GameEvent, BOUNCE_SOUND, TICK_MS};
use tui_breakout::{logging, trace as json_trace};

/// Keep-alive redraw interval for screens where nothing moves.
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = Config::from_env();
    if logging::init(&config)? {
        info!(
            "starting: seed={} trace={} filter={}",
            config.seed, config.trace, config.log_filter
        );
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting with error: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut session = Session::new(config.seed);
    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);

    let (w, h) = terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut projection = view.session_projection(&session, viewport);
    let mut fb = FrameBuffer::new(w, h);

    let started = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut last_phase = session.phase();
    if config.trace {
        json_trace::emit(&session.snapshot());
    }

    loop {
        // Render.
        let now_ms = started.elapsed().as_millis() as u64;
        let is_static = !session.phase().is_animated();
        if throttle.should_render(now_ms, session.fingerprint(), is_static) {
            view.render_into(&session, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match map_event(&event::read()?) {
                Some(InputEvent::Quit) => {
                    info!(
                        "quit: phase={} lives={} bricks={}",
                        session.phase().as_str(),
                        session.lives(),
                        session.bricks().remaining()
                    );
                    return Ok(());
                }
                Some(InputEvent::Resize) => {
                    let (w, h) = terminal::size()?;
                    viewport = Viewport::new(w, h);
                    projection = view.session_projection(&session, viewport);
                    term.invalidate();
                    throttle.reset();
                    debug!("resized to {w}x{h}");
                }
                Some(other) => input.handle(other),
                None => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            // Without a layout there is no canvas under the pointer; a negative
            // x is out of bounds and leaves the paddle where it is.
            let tick_input = input.take_tick_input(|column| {
                projection.map_or(-1.0, |p| p.column_to_canvas_x(column))
            });

            for event in session.tick(&tick_input) {
                log_event(event);
            }

            if session.phase() != last_phase {
                last_phase = session.phase();
                if config.trace {
                    json_trace::emit(&session.snapshot());
                }
            }
        }
    }
}

fn log_event(event: GameEvent) {
    if event.is_bounce() {
        trace!("bounce: {BOUNCE_SOUND}");
    }
    match event {
        GameEvent::Started => info!("round started"),
        GameEvent::BricksDestroyed { count, remaining } => {
            debug!("destroyed {count} brick(s), {remaining} left");
        }
        GameEvent::BallLost => debug!("ball lost"),
        GameEvent::LifeLost { lives } => info!("life lost, {lives} left"),
        GameEvent::GameOver => info!("game over"),
        GameEvent::Won => info!("won"),
        GameEvent::Restarted => info!("restarted"),
        GameEvent::WallBounce | GameEvent::PaddleBounce => {}
    }
}
