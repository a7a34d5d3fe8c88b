//! Keyboard event handling by mode.

use crossterm::event::{KeyCode, KeyEvent};

use super::Action;

/// Map a key press to an action. `dialog_presented` selects between the two
/// input modes: driving the dialog, or idling on the demo screen.
pub fn handle_key_event(dialog_presented: bool, key: KeyEvent) -> Action {
    if dialog_presented {
        handle_dialog_mode(key)
    } else {
        handle_idle_mode(key)
    }
}

fn handle_dialog_mode(key: KeyEvent) -> Action {
    match key.code {
        // Wheel scrolling
        KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown,

        // Button focus
        KeyCode::Left | KeyCode::Char('h') => Action::FocusCancel,
        KeyCode::Right | KeyCode::Char('l') => Action::FocusDone,
        KeyCode::Tab => Action::ToggleFocus,

        KeyCode::Enter => Action::Activate,
        KeyCode::Esc => Action::Cancel,

        _ => Action::None,
    }
}

fn handle_idle_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('p') | KeyCode::Enter => Action::OpenPicker,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_dialog_mode_scrolls_and_activates() {
        assert_eq!(handle_key_event(true, key(KeyCode::Up)), Action::ScrollUp);
        assert_eq!(handle_key_event(true, key(KeyCode::Char('j'))), Action::ScrollDown);
        assert_eq!(handle_key_event(true, key(KeyCode::Enter)), Action::Activate);
        assert_eq!(handle_key_event(true, key(KeyCode::Esc)), Action::Cancel);
        assert_eq!(handle_key_event(true, key(KeyCode::Tab)), Action::ToggleFocus);
    }

    #[test]
    fn test_idle_mode_opens_and_quits() {
        assert_eq!(handle_key_event(false, key(KeyCode::Char('p'))), Action::OpenPicker);
        assert_eq!(handle_key_event(false, key(KeyCode::Enter)), Action::OpenPicker);
        assert_eq!(handle_key_event(false, key(KeyCode::Char('q'))), Action::Quit);
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        assert_eq!(handle_key_event(true, key(KeyCode::Char('x'))), Action::None);
        assert_eq!(handle_key_event(false, key(KeyCode::Char('x'))), Action::None);
    }
}
