//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Printable characters are deliberately left unbound so they reach the
/// search field. Only navigation and control chords appear here.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Event kind and lock state are ignored; only code and modifiers count.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    /// Bind `code` + `modifiers` to `action`, replacing any earlier binding.
    pub fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };

        // Results navigation
        bindings.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::SelectPrevious);
        bindings.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::SelectNext);
        bindings.bind(
            KeyCode::Char('p'),
            KeyModifiers::CONTROL,
            KeyAction::SelectPrevious,
        );
        bindings.bind(
            KeyCode::Char('n'),
            KeyModifiers::CONTROL,
            KeyAction::SelectNext,
        );
        bindings.bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::SelectFirst);
        bindings.bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::SelectLast);

        // Query editing
        bindings.bind(
            KeyCode::Backspace,
            KeyModifiers::NONE,
            KeyAction::DeleteBackward,
        );
        bindings.bind(KeyCode::Delete, KeyModifiers::NONE, KeyAction::DeleteForward);
        bindings.bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::CursorLeft);
        bindings.bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::CursorRight);
        bindings.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::CursorHome);
        bindings.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::CursorEnd);
        bindings.bind(
            KeyCode::Char('a'),
            KeyModifiers::CONTROL,
            KeyAction::CursorHome,
        );
        bindings.bind(
            KeyCode::Char('e'),
            KeyModifiers::CONTROL,
            KeyAction::CursorEnd,
        );
        bindings.bind(
            KeyCode::Char('u'),
            KeyModifiers::CONTROL,
            KeyAction::ClearQuery,
        );

        // Screens
        bindings.bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::NextScreen);

        // Application
        bindings.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Cancel);
        bindings.bind(KeyCode::F(1), KeyModifiers::NONE, KeyAction::Help);
        bindings.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        bindings
    }
}
