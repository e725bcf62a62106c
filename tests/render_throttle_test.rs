use tui_breakout::core::Session;
use tui_breakout::term::RenderThrottle;
use tui_breakout::types::TickInput;

#[test]
fn render_throttle_static_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(t.should_render(1, 2, true));
}

#[test]
fn render_throttle_static_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(!t.should_render(10, 1, true));
    assert!(!t.should_render(249, 1, true));
    assert!(t.should_render(250, 1, true));
}

#[test]
fn render_throttle_animated_always_renders() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, false));
    assert!(t.should_render(1, 1, false));
    assert!(t.should_render(2, 1, false));
}

#[test]
fn start_prompt_redraws_only_when_session_changes() {
    let mut session = Session::new(4);
    let mut t = RenderThrottle::new(1_000);
    let is_static = !session.phase().is_animated();
    assert!(is_static);

    assert!(t.should_render(0, session.fingerprint(), is_static));
    // Waiting ticks change nothing visible.
    session.tick(&TickInput::pointer(300.0));
    assert!(!t.should_render(16, session.fingerprint(), is_static));

    session.tick(&TickInput::confirm());
    assert!(t.should_render(32, session.fingerprint(), !session.phase().is_animated()));
}
