//! Keyboard action routing.
//!
//! Pure functions that transform `AppState` in response to domain
//! actions. The shell resolves raw key events through `KeyBindings`
//! first, except while the contact form has focus — then printable keys
//! are captured as text by [`handle_contact_key`] before any binding
//! lookup.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::KeyAction;
use crate::state::app_state::{AppState, FocusPane};

/// Apply a domain action to the state.
///
/// Returns `true` when the application should quit.
pub fn handle_key_action(state: &mut AppState, action: KeyAction, now: Instant) -> bool {
    match action {
        KeyAction::CycleFocus => state.cycle_focus(),
        KeyAction::FocusLaptop => state.set_focus(FocusPane::Laptop),
        KeyAction::FocusPhone => state.set_focus(FocusPane::Phone),
        KeyAction::FocusAbout => state.set_focus(FocusPane::About),
        KeyAction::FocusSkills => state.set_focus(FocusPane::Skills),
        KeyAction::FocusContact => state.set_focus(FocusPane::Contact),

        KeyAction::NextItem => match state.focus {
            FocusPane::Laptop => state.laptop.go_to_next(now),
            FocusPane::Phone => state.phone.go_to_next(now),
            FocusPane::Skills => state.next_skill(),
            FocusPane::About | FocusPane::Contact => {}
        },
        KeyAction::PrevItem => match state.focus {
            FocusPane::Laptop => state.laptop.go_to_previous(now),
            FocusPane::Phone => state.phone.go_to_previous(now),
            FocusPane::Skills => state.previous_skill(),
            FocusPane::About | FocusPane::Contact => {}
        },

        KeyAction::Activate => match state.focus {
            FocusPane::About => state.toggle_about(),
            FocusPane::Skills => state.deselect_skill(),
            // On the displays Enter/Space has no binding-level meaning;
            // contact submission is handled by the input-capture path.
            FocusPane::Laptop | FocusPane::Phone | FocusPane::Contact => {}
        },
        KeyAction::ToggleAutoplay => state.toggle_autoplay(now),

        KeyAction::ToggleTheme => state.toggle_theme(),
        KeyAction::ToggleHelp => state.toggle_help(),
        KeyAction::Quit => return true,
    }
    false
}

/// Capture a raw key event as contact-form input.
///
/// Returns `true` when the key was consumed. Tab and Escape are left
/// unconsumed so pane switching still works while typing; everything
/// printable (plus Backspace, Up/Down, Enter) belongs to the form.
pub fn handle_contact_key(state: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    if state.focus != FocusPane::Contact {
        return false;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT) {
        return false;
    }

    match key.code {
        KeyCode::Char(ch) => {
            state.contact.input_char(ch);
            true
        }
        KeyCode::Backspace => {
            state.contact.backspace();
            true
        }
        KeyCode::Down => {
            state.contact.focus_next_field();
            true
        }
        KeyCode::Up => {
            state.contact.focus_previous_field();
            true
        }
        KeyCode::Enter => {
            state.contact.submit(now);
            true
        }
        _ => false,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "key_handler_tests.rs"]
mod tests;
