//! Tests for AppState transitions.
//!
//! These verify pure state behavior without any TUI dependencies.

use super::*;

fn test_state() -> (AppState, Instant) {
    let now = Instant::now();
    let state = AppState::new(
        PortfolioContent::built_in(),
        &ResolvedConfig::default(),
        now,
    );
    (state, now)
}

fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

// ===== Construction =====

#[test]
fn new_state_focuses_the_laptop() {
    let (state, _) = test_state();
    assert_eq!(state.focus, FocusPane::Laptop);
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.about_expanded);
    assert_eq!(state.selected_skill, None);
    assert!(!state.help_visible);
    assert_eq!(state.hovered, None);
}

#[test]
fn both_carousels_start_cycling_at_index_zero() {
    let (state, _) = test_state();
    assert_eq!(state.laptop.current_index(), 0);
    assert_eq!(state.phone.current_index(), 0);
    assert!(state.laptop.is_cycling());
    assert!(state.phone.is_cycling());
}

// ===== Focus =====

#[test]
fn focus_cycle_visits_every_pane_and_closes() {
    let (mut state, _) = test_state();
    let mut seen = vec![state.focus];
    for _ in 0..4 {
        state.cycle_focus();
        seen.push(state.focus);
    }
    state.cycle_focus();
    assert_eq!(state.focus, FocusPane::Laptop, "cycle returns to start");
    assert!(seen.contains(&FocusPane::Phone));
    assert!(seen.contains(&FocusPane::About));
    assert!(seen.contains(&FocusPane::Skills));
    assert!(seen.contains(&FocusPane::Contact));
}

#[test]
fn focused_surface_is_only_set_for_displays() {
    let (mut state, _) = test_state();
    assert_eq!(state.focused_surface(), Some(DeskSurface::Laptop));
    state.set_focus(FocusPane::Contact);
    assert_eq!(state.focused_surface(), None);
}

// ===== Theme and panels =====

#[test]
fn theme_toggle_is_an_involution() {
    let (mut state, _) = test_state();
    state.toggle_theme();
    assert_eq!(state.theme, Theme::Dark);
    state.toggle_theme();
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn about_note_toggles_expansion() {
    let (mut state, _) = test_state();
    state.toggle_about();
    assert!(state.about_expanded);
    state.toggle_about();
    assert!(!state.about_expanded);
}

// ===== Skills =====

#[test]
fn skill_selection_wraps_both_ways() {
    let (mut state, _) = test_state();
    let count = state.skills.len();
    assert!(count > 1, "built-in content has several skills");

    state.next_skill();
    assert_eq!(state.selected_skill, Some(0));
    state.previous_skill();
    assert_eq!(state.selected_skill, Some(count - 1));
    state.next_skill();
    assert_eq!(state.selected_skill, Some(0));
}

#[test]
fn selecting_the_selected_skill_deselects() {
    let (mut state, _) = test_state();
    state.select_skill(2);
    assert_eq!(state.selected_skill, Some(2));
    state.select_skill(2);
    assert_eq!(state.selected_skill, None);
}

#[test]
fn out_of_range_skill_selection_is_ignored() {
    let (mut state, _) = test_state();
    state.select_skill(999);
    assert_eq!(state.selected_skill, None);
}

// ===== Autoplay and hover =====

#[test]
fn autoplay_toggle_targets_the_focused_surface() {
    let (mut state, now) = test_state();
    state.set_focus(FocusPane::Phone);

    state.toggle_autoplay(at(now, 100));
    assert!(state.phone.is_paused());
    assert!(!state.laptop.is_paused(), "laptop untouched");

    state.toggle_autoplay(at(now, 200));
    assert!(!state.phone.is_paused());
}

#[test]
fn autoplay_toggle_is_a_no_op_on_non_display_panes() {
    let (mut state, now) = test_state();
    state.set_focus(FocusPane::Skills);
    state.toggle_autoplay(at(now, 100));
    assert!(!state.laptop.is_paused());
    assert!(!state.phone.is_paused());
}

#[test]
fn hover_moves_the_pause_between_surfaces() {
    let (mut state, now) = test_state();

    state.set_hovered(Some(DeskSurface::Laptop), at(now, 100));
    assert!(state.laptop.is_paused());
    assert!(!state.phone.is_paused());

    state.set_hovered(Some(DeskSurface::Phone), at(now, 200));
    assert!(!state.laptop.is_paused(), "leaving the laptop resumes it");
    assert!(state.phone.is_paused());

    state.set_hovered(None, at(now, 300));
    assert!(!state.phone.is_paused());
    assert_eq!(state.hovered, None);
}

#[test]
fn repeated_hover_updates_are_idempotent() {
    let (mut state, now) = test_state();
    state.set_hovered(Some(DeskSurface::Laptop), at(now, 100));
    state.set_hovered(Some(DeskSurface::Laptop), at(now, 200));
    assert!(state.laptop.is_paused());

    // A hover pause held across many intervals never advances the
    // laptop, while the phone keeps cycling.
    assert_eq!(state.laptop.current_index(), 0);
    state.on_timer(at(now, 4000));
    assert_eq!(state.laptop.current_index(), 0);
    assert_eq!(state.phone.current_index(), 1);
}

// ===== Timer fan-out =====

#[test]
fn timer_advances_both_carousels_together() {
    let (mut state, now) = test_state();
    assert!(state.on_timer(at(now, 4000)));
    assert_eq!(state.laptop.current_index(), 1);
    assert_eq!(state.phone.current_index(), 1);
}

#[test]
fn timer_reports_no_change_when_nothing_is_due() {
    let (mut state, now) = test_state();
    assert!(!state.on_timer(at(now, 1000)));
}

#[test]
fn timer_drives_the_contact_form_phases() {
    let (mut state, now) = test_state();
    state.contact.name = "Ada".to_string();
    state.contact.email = "ada@example.com".to_string();
    state.contact.message = "A long enough message.".to_string();
    state.contact.submit(at(now, 100));

    assert!(state.on_timer(at(now, 1600)));
    assert!(matches!(
        state.contact.phase,
        crate::state::contact_form::FormPhase::Sent { .. }
    ));
}

// ===== Empty content =====

#[test]
fn empty_content_yields_static_displays() {
    let now = Instant::now();
    let content = PortfolioContent {
        profile: PortfolioContent::built_in().profile,
        web_projects: vec![],
        mobile_projects: vec![],
        skills: vec![],
    };
    let mut state = AppState::new(content, &ResolvedConfig::default(), now);

    assert_eq!(state.laptop.current_item(), None);
    assert!(!state.phone.is_cycling());
    assert!(!state.on_timer(at(now, 40_000)));

    state.next_skill();
    assert_eq!(state.selected_skill, None);
}
