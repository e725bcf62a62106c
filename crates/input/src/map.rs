//! Event mapping from terminal events to input events.

use crate::types::GameAction;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// A terminal event the game cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer moved to a terminal cell
    Pointer { column: u16, row: u16 },
    /// Left button pressed at a terminal cell
    Click { column: u16, row: u16 },
    /// Keyboard action
    Action(GameAction),
    /// Terminal size changed
    Resize,
    /// Leave the game
    Quit,
}

/// Map any terminal event. Irrelevant events yield `None`.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(*key) {
                Some(InputEvent::Quit)
            } else {
                handle_key_event(*key).map(InputEvent::Action)
            }
        }
        Event::Mouse(mouse) => handle_mouse_event(*mouse),
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    }
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Enter => Some(GameAction::Confirm),
        KeyCode::Char(' ') => Some(GameAction::Restart),
        _ => None,
    }
}

fn handle_mouse_event(mouse: MouseEvent) -> Option<InputEvent> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::Pointer { column, row }),
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Click { column, row }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Confirm)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Restart)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char(' '))));
    }

    #[test]
    fn test_key_events_map_only_on_press() {
        let press = Event::Key(KeyEvent::from(KeyCode::Char(' ')));
        assert_eq!(
            map_event(&press),
            Some(InputEvent::Action(GameAction::Restart))
        );

        let release = Event::Key(KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(&release), None);

        let quit = Event::Key(KeyEvent::from(KeyCode::Char('Q')));
        assert_eq!(map_event(&quit), Some(InputEvent::Quit));
    }

    #[test]
    fn test_mouse_events() {
        assert_eq!(
            map_event(&mouse(MouseEventKind::Moved, 12, 3)),
            Some(InputEvent::Pointer { column: 12, row: 3 })
        );
        assert_eq!(
            map_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 7, 1)),
            Some(InputEvent::Pointer { column: 7, row: 1 })
        );
        assert_eq!(
            map_event(&mouse(MouseEventKind::Down(MouseButton::Left), 4, 9)),
            Some(InputEvent::Click { column: 4, row: 9 })
        );
        assert_eq!(
            map_event(&mouse(MouseEventKind::Down(MouseButton::Right), 4, 9)),
            None
        );
        assert_eq!(map_event(&mouse(MouseEventKind::ScrollUp, 4, 9)), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(map_event(&Event::Resize(80, 24)), Some(InputEvent::Resize));
        assert_eq!(map_event(&Event::FocusGained), None);
    }
}
