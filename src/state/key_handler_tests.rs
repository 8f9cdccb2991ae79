//! Tests for keyboard action routing and contact input capture.

use super::*;
use crate::config::ResolvedConfig;
use crate::content::PortfolioContent;
use crate::model::Theme;
use crate::state::contact_form::{ContactField, FormPhase};

fn test_state() -> (AppState, Instant) {
    let now = Instant::now();
    let state = AppState::new(
        PortfolioContent::built_in(),
        &ResolvedConfig::default(),
        now,
    );
    (state, now)
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

// ===== Action routing =====

#[test]
fn quit_action_requests_exit() {
    let (mut state, now) = test_state();
    assert!(handle_key_action(&mut state, KeyAction::Quit, now));
}

#[test]
fn non_quit_actions_do_not_request_exit() {
    let (mut state, now) = test_state();
    assert!(!handle_key_action(&mut state, KeyAction::ToggleTheme, now));
    assert_eq!(state.theme, Theme::Dark);
}

#[test]
fn next_item_routes_to_the_focused_display() {
    let (mut state, now) = test_state();
    handle_key_action(&mut state, KeyAction::NextItem, now);
    assert_eq!(state.laptop.current_index(), 1);
    assert_eq!(state.phone.current_index(), 0, "phone untouched");

    state.set_focus(FocusPane::Phone);
    handle_key_action(&mut state, KeyAction::NextItem, now);
    assert_eq!(state.phone.current_index(), 1);
}

#[test]
fn prev_item_on_skills_moves_the_selection() {
    let (mut state, now) = test_state();
    state.set_focus(FocusPane::Skills);
    handle_key_action(&mut state, KeyAction::PrevItem, now);
    assert_eq!(state.selected_skill, Some(state.skills.len() - 1));
}

#[test]
fn activate_toggles_the_about_note_when_focused() {
    let (mut state, now) = test_state();
    state.set_focus(FocusPane::About);
    handle_key_action(&mut state, KeyAction::Activate, now);
    assert!(state.about_expanded);
}

#[test]
fn activate_clears_the_skill_selection() {
    let (mut state, now) = test_state();
    state.set_focus(FocusPane::Skills);
    state.select_skill(1);
    handle_key_action(&mut state, KeyAction::Activate, now);
    assert_eq!(state.selected_skill, None);
}

#[test]
fn focus_actions_jump_directly() {
    let (mut state, now) = test_state();
    handle_key_action(&mut state, KeyAction::FocusContact, now);
    assert_eq!(state.focus, FocusPane::Contact);
    handle_key_action(&mut state, KeyAction::FocusSkills, now);
    assert_eq!(state.focus, FocusPane::Skills);
}

// ===== Contact input capture =====

#[test]
fn capture_only_applies_while_contact_is_focused() {
    let (mut state, now) = test_state();
    assert!(!handle_contact_key(&mut state, press(KeyCode::Char('q')), now));

    state.set_focus(FocusPane::Contact);
    assert!(handle_contact_key(&mut state, press(KeyCode::Char('q')), now));
    assert_eq!(state.contact.name, "q");
}

#[test]
fn typed_characters_land_in_the_focused_field() {
    let (mut state, now) = test_state();
    state.set_focus(FocusPane::Contact);
    for ch in "Ada".chars() {
        handle_contact_key(&mut state, press(KeyCode::Char(ch)), now);
    }
    handle_contact_key(&mut state, press(KeyCode::Down), now);
    handle_contact_key(&mut state, press(KeyCode::Char('x')), now);

    assert_eq!(state.contact.name, "Ada");
    assert_eq!(state.contact.email, "x");
    assert_eq!(state.contact.focused, ContactField::Email);
}

#[test]
fn backspace_and_arrows_are_consumed() {
    let (mut state, now) = test_state();
    state.set_focus(FocusPane::Contact);
    assert!(handle_contact_key(&mut state, press(KeyCode::Backspace), now));
    assert!(handle_contact_key(&mut state, press(KeyCode::Up), now));
    assert_eq!(state.contact.focused, ContactField::Message);
}

#[test]
fn tab_and_escape_fall_through_to_bindings() {
    let (mut state, now) = test_state();
    state.set_focus(FocusPane::Contact);
    assert!(!handle_contact_key(&mut state, press(KeyCode::Tab), now));
    assert!(!handle_contact_key(&mut state, press(KeyCode::Esc), now));
}

#[test]
fn control_chords_are_not_captured_as_text() {
    let (mut state, now) = test_state();
    state.set_focus(FocusPane::Contact);
    let chord = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(!handle_contact_key(&mut state, chord, now));
    assert_eq!(state.contact.name, "");
}

#[test]
fn enter_submits_the_form() {
    let (mut state, now) = test_state();
    state.set_focus(FocusPane::Contact);
    state.contact.name = "Ada".to_string();
    state.contact.email = "ada@example.com".to_string();
    state.contact.message = "Long enough message here.".to_string();

    assert!(handle_contact_key(&mut state, press(KeyCode::Enter), now));
    assert!(matches!(state.contact.phase, FormPhase::Submitting { .. }));
}

#[test]
fn invalid_submit_via_enter_surfaces_errors() {
    let (mut state, now) = test_state();
    state.set_focus(FocusPane::Contact);
    handle_contact_key(&mut state, press(KeyCode::Enter), now);
    assert_eq!(state.contact.phase, FormPhase::Editing);
    assert!(state.contact.errors.any());
}
