//! Keyboard bindings configuration.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::model::KeyAction;

/// Maps keyboard events to domain actions.
///
/// Provides default bindings with optional overrides from the config
/// file's `[keybindings]` table (key name → action name).
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Build bindings from defaults plus config-file overrides.
    ///
    /// Entries with an unrecognized key or action name are skipped with
    /// a warning rather than failing startup.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut bindings = Self::default();

        for (key_name, action_name) in overrides {
            match (parse_key_name(key_name), parse_action_name(action_name)) {
                (Some(key), Some(action)) => {
                    bindings.bindings.insert(key, action);
                }
                (None, _) => warn!(key = %key_name, "Ignoring binding for unknown key"),
                (_, None) => warn!(action = %action_name, "Ignoring binding for unknown action"),
            }
        }

        bindings
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Focus switching
        bindings.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::CycleFocus,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE),
            KeyAction::FocusLaptop,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE),
            KeyAction::FocusPhone,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE),
            KeyAction::FocusAbout,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE),
            KeyAction::FocusSkills,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE),
            KeyAction::FocusContact,
        );

        // Item navigation, vim-style plus arrows plus brackets
        bindings.insert(
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
            KeyAction::NextItem,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            KeyAction::PrevItem,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            KeyAction::NextItem,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            KeyAction::PrevItem,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char(']'), KeyModifiers::NONE),
            KeyAction::NextItem,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('['), KeyModifiers::NONE),
            KeyAction::PrevItem,
        );

        // Panel interaction
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::Activate,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyAction::Activate,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE),
            KeyAction::ToggleAutoplay,
        );

        // Application
        bindings.insert(
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE),
            KeyAction::ToggleTheme,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            KeyAction::ToggleHelp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}

/// Parse a config-file key name into a key event.
///
/// Accepts single printable characters ("q", "["), the named keys
/// "tab", "enter", "space", "esc", "left", "right", "up", "down", and a
/// "ctrl+<char>" form.
fn parse_key_name(name: &str) -> Option<KeyEvent> {
    let lower = name.to_ascii_lowercase();

    if let Some(rest) = lower.strip_prefix("ctrl+") {
        let mut chars = rest.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        return Some(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
    }

    let code = match lower.as_str() {
        "tab" => KeyCode::Tab,
        "enter" => KeyCode::Enter,
        "space" => KeyCode::Char(' '),
        "esc" | "escape" => KeyCode::Esc,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        _ => {
            let mut chars = name.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Parse a config-file action name into a domain action.
fn parse_action_name(name: &str) -> Option<KeyAction> {
    match name {
        "cycle-focus" => Some(KeyAction::CycleFocus),
        "focus-laptop" => Some(KeyAction::FocusLaptop),
        "focus-phone" => Some(KeyAction::FocusPhone),
        "focus-about" => Some(KeyAction::FocusAbout),
        "focus-skills" => Some(KeyAction::FocusSkills),
        "focus-contact" => Some(KeyAction::FocusContact),
        "next-item" => Some(KeyAction::NextItem),
        "prev-item" => Some(KeyAction::PrevItem),
        "activate" => Some(KeyAction::Activate),
        "toggle-autoplay" => Some(KeyAction::ToggleAutoplay),
        "toggle-theme" => Some(KeyAction::ToggleTheme),
        "toggle-help" => Some(KeyAction::ToggleHelp),
        "quit" => Some(KeyAction::Quit),
        _ => None,
    }
}
