//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Lookups ignore key kind and state,
/// so only code and modifiers matter.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut b = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;
        let shift = KeyModifiers::SHIFT;

        // Row cursor
        b.bind(KeyCode::Char('j'), none, KeyAction::CursorDown);
        b.bind(KeyCode::Char('k'), none, KeyAction::CursorUp);
        b.bind(KeyCode::Down, none, KeyAction::CursorDown);
        b.bind(KeyCode::Up, none, KeyAction::CursorUp);

        // Pagination
        b.bind(KeyCode::Char('n'), none, KeyAction::NextPage);
        b.bind(KeyCode::Char('l'), none, KeyAction::NextPage);
        b.bind(KeyCode::Right, none, KeyAction::NextPage);
        b.bind(KeyCode::PageDown, none, KeyAction::NextPage);
        b.bind(KeyCode::Char('p'), none, KeyAction::PrevPage);
        b.bind(KeyCode::Char('h'), none, KeyAction::PrevPage);
        b.bind(KeyCode::Left, none, KeyAction::PrevPage);
        b.bind(KeyCode::PageUp, none, KeyAction::PrevPage);
        b.bind(KeyCode::Char('g'), none, KeyAction::FirstPage);
        b.bind(KeyCode::Home, none, KeyAction::FirstPage);
        b.bind(KeyCode::Char('G'), shift, KeyAction::LastPage);
        b.bind(KeyCode::Char('G'), none, KeyAction::LastPage);
        b.bind(KeyCode::End, none, KeyAction::LastPage);

        // Page size. '+' needs shift on most layouts.
        b.bind(KeyCode::Char('+'), none, KeyAction::GrowPageSize);
        b.bind(KeyCode::Char('+'), shift, KeyAction::GrowPageSize);
        b.bind(KeyCode::Char('-'), none, KeyAction::ShrinkPageSize);

        // Search
        b.bind(KeyCode::Char('/'), none, KeyAction::StartSearch);
        b.bind(KeyCode::Char('f'), none, KeyAction::StartColumnFilter);
        b.bind(KeyCode::Char('c'), none, KeyAction::ClearSearch);

        // Detail
        b.bind(KeyCode::Enter, none, KeyAction::OpenDetail);

        // Application controls
        b.bind(KeyCode::Char('r'), none, KeyAction::Refresh);
        b.bind(KeyCode::Char('?'), none, KeyAction::Help);
        b.bind(KeyCode::Char('?'), shift, KeyAction::Help);
        b.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        b.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        b
    }
}
