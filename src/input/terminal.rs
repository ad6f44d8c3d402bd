//! Input handling for the terminal frontend

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

/// Acceleration fed to the shake detector when the player "shakes" from the keyboard
pub const KEYBOARD_JOLT: (f32, f32, f32) = (14.0, 18.0, 9.81);

/// Input action that can be triggered by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Start button or tap, depending on whether a session is running
    Confirm,
    /// Pointer went down anywhere on screen
    Tap,
    /// Simulated accelerometer jolt
    Jolt,
    /// Leave the game
    Quit,
}

/// Map a terminal event to an input action
pub fn map_event(event: &Event) -> Option<InputAction> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(InputAction::Tap),
            _ => None,
        },
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<InputAction> {
    // Only key presses, not releases or repeats
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputAction::Quit);
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputAction::Confirm),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(InputAction::Jolt),
        KeyCode::Char('q') | KeyCode::Esc => Some(InputAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{MouseEvent, KeyEventState};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_event(&press(KeyCode::Enter)), Some(InputAction::Confirm));
        assert_eq!(map_event(&press(KeyCode::Char(' '))), Some(InputAction::Confirm));
        assert_eq!(map_event(&press(KeyCode::Char('s'))), Some(InputAction::Jolt));
        assert_eq!(map_event(&press(KeyCode::Esc)), Some(InputAction::Quit));
        assert_eq!(map_event(&press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&event), Some(InputAction::Quit));
    }

    #[test]
    fn test_key_release_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(&event), None);
    }

    #[test]
    fn test_mouse_down_is_tap() {
        let down = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        let up = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(&down), Some(InputAction::Tap));
        assert_eq!(map_event(&up), None);
    }

    #[test]
    fn test_keyboard_jolt_is_a_shake() {
        let detector = crate::input::ShakeDetector::default();
        let (x, y, z) = KEYBOARD_JOLT;
        assert!(detector.sample(x, y, z).is_some());
    }
}
