mod navigate;
mod pipeline;
mod prompt;
mod tree;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

// Submodules reach each other's handlers through `use super::*;`
#[allow(unused_imports)]
use navigate::*;
#[allow(unused_imports)]
use pipeline::*;
#[allow(unused_imports)]
use prompt::*;
#[allow(unused_imports)]
use tree::*;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Prompt => handle_prompt(app, key),
    }
}

/// Fold Shift+letter into the uppercase char so bindings can match on
/// `Char('S')` regardless of how the terminal reports it
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}


#[cfg(test)]
mod tests {
    use super::test_keys::*;
    use super::*;

    #[test]
    fn shift_letter_is_uppercased() {
        let key = normalize_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::SHIFT));
        assert_eq!(key.code, KeyCode::Char('S'));
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = app();
        app.mode = Mode::Prompt;
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn modifier_only_press_is_ignored() {
        let mut app = app();
        press(
            &mut app,
            KeyCode::Modifier(crossterm::event::ModifierKeyCode::LeftShift),
        );
        assert!(!app.should_quit);
        assert_eq!(app.mode, Mode::Navigate);
    }
}
