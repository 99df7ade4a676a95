//! Event handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Returns the key of a press event, ignoring repeats and releases.
#[must_use]
pub fn key_press(event: &Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
        _ => None,
    }
}

/// Checks if key quits from any screen.
#[must_use]
pub fn is_force_quit(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, kind)
    }

    #[test]
    fn test_force_quit() {
        assert!(is_force_quit(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press
        )));
        assert!(!is_force_quit(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::NONE,
            KeyEventKind::Press
        )));
        assert!(!is_force_quit(&make_key_event(
            KeyCode::Esc,
            KeyModifiers::NONE,
            KeyEventKind::Press
        )));
    }

    #[test]
    fn test_key_press_filters_releases() {
        let press = make_key_event(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Press);
        let release = make_key_event(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);

        assert_eq!(key_press(&Event::Key(press)), Some(press));
        assert_eq!(key_press(&Event::Key(release)), None);
        assert_eq!(key_press(&Event::Resize(80, 24)), None);
    }
}
