//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides pager-style default bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);
        let mut bindings = HashMap::new();

        // Page navigation
        for code in [KeyCode::Char('n'), KeyCode::Right, KeyCode::PageDown] {
            bindings.insert(plain(code), KeyAction::NextPage);
        }
        for code in [KeyCode::Char('p'), KeyCode::Left, KeyCode::PageUp] {
            bindings.insert(plain(code), KeyAction::PrevPage);
        }
        for code in [KeyCode::Char('g'), KeyCode::Home] {
            bindings.insert(plain(code), KeyAction::FirstPage);
        }
        bindings.insert(plain(KeyCode::End), KeyAction::LastPage);
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::LastPage,
        );

        // Rows per page
        bindings.insert(plain(KeyCode::Char('+')), KeyAction::MoreRows);
        bindings.insert(
            KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT),
            KeyAction::MoreRows,
        );
        bindings.insert(plain(KeyCode::Char('-')), KeyAction::FewerRows);

        // Presentation
        bindings.insert(plain(KeyCode::Char('v')), KeyAction::ToggleLayout);
        bindings.insert(plain(KeyCode::Char('o')), KeyAction::CycleSortOrder);

        // Application
        bindings.insert(plain(KeyCode::Char('q')), KeyAction::Quit);
        bindings.insert(plain(KeyCode::Esc), KeyAction::Quit);
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
