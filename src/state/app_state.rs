//! Application state and transitions.
//!
//! `AppState` is the root state type containing all UI state. All
//! transitions are pure functions; the shell delivers events and draws
//! whatever the state says.

use std::time::{Duration, Instant};

use crate::config::ResolvedConfig;
use crate::content::PortfolioContent;
use crate::model::{Profile, Project, Skill, Theme};
use crate::state::contact_form::ContactFormState;
use crate::state::cycle::{CycleController, PauseSource};

// ===== FocusPane =====

/// Which desk element has keyboard focus. Sum type - exactly one.
///
/// Focus cycles Laptop → Phone → About → Skills → Contact and back, with
/// direct bindings for each pane. While Contact has focus, printable
/// keys are captured as form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    /// The laptop screen cycling web projects.
    Laptop,
    /// The phone screen cycling mobile projects.
    Phone,
    /// The sticky-note about panel.
    About,
    /// The skills grid.
    Skills,
    /// The contact form.
    Contact,
}

// ===== DeskSurface =====

/// A display surface that embeds a carousel controller.
///
/// Hover tracking and autoplay toggles address controllers through this
/// rather than through `FocusPane`, since only these two panes cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeskSurface {
    /// The laptop display.
    Laptop,
    /// The phone display.
    Phone,
}

// ===== AppState =====

/// Root application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active visual theme.
    pub theme: Theme,

    /// Pane with keyboard focus.
    pub focus: FocusPane,

    /// Web-project carousel shown on the laptop. Manual navigation
    /// leaves its running schedule untouched.
    pub laptop: CycleController<Project>,

    /// Mobile-project carousel shown on the phone. Configured with the
    /// manual-pause window: navigating by hand suspends autoplay for a
    /// while, then it resumes on its own.
    pub phone: CycleController<Project>,

    /// Author blurb for the about note.
    pub profile: Profile,

    /// Entries of the skills grid.
    pub skills: Vec<Skill>,

    /// Whether the about note shows its extra bio lines.
    pub about_expanded: bool,

    /// Currently selected skill, if any. Selecting again deselects.
    pub selected_skill: Option<usize>,

    /// Contact form state.
    pub contact: ContactFormState,

    /// Whether the key-hint overlay is up.
    pub help_visible: bool,

    /// Surface currently under the pointer, if any.
    pub hovered: Option<DeskSurface>,
}

impl AppState {
    /// Build the initial state from loaded content and resolved config.
    ///
    /// Both carousels start at index 0 with their first tick armed
    /// `cycle_interval_ms` after `now` (when they have anything to
    /// cycle).
    pub fn new(content: PortfolioContent, config: &ResolvedConfig, now: Instant) -> Self {
        let interval = Duration::from_millis(config.cycle_interval_ms);
        let manual_window = Duration::from_millis(config.manual_resume_ms);

        Self {
            theme: config.theme,
            focus: FocusPane::Laptop,
            laptop: CycleController::new(content.web_projects, interval, now),
            phone: CycleController::new(content.mobile_projects, interval, now)
                .with_manual_pause(manual_window),
            profile: content.profile,
            skills: content.skills,
            about_expanded: false,
            selected_skill: None,
            contact: ContactFormState::new(),
            help_visible: false,
            hovered: None,
        }
    }

    /// Deliver a timer event to every timed piece of state.
    ///
    /// Returns whether anything changed, i.e. whether the shell should
    /// redraw.
    pub fn on_timer(&mut self, now: Instant) -> bool {
        let laptop = self.laptop.on_timer(now);
        let phone = self.phone.on_timer(now);
        let contact = self.contact.on_timer(now);
        laptop || phone || contact
    }

    /// Cycle focus through the desk: Laptop → Phone → About → Skills →
    /// Contact → Laptop.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Laptop => FocusPane::Phone,
            FocusPane::Phone => FocusPane::About,
            FocusPane::About => FocusPane::Skills,
            FocusPane::Skills => FocusPane::Contact,
            FocusPane::Contact => FocusPane::Laptop,
        };
    }

    /// Set focus to a specific pane.
    pub fn set_focus(&mut self, pane: FocusPane) {
        self.focus = pane;
    }

    /// Flip between light and dark theme.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Expand or collapse the about note.
    pub fn toggle_about(&mut self) {
        self.about_expanded = !self.about_expanded;
    }

    /// Show or hide the key-hint overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Move the skill selection forward, wrapping. Starts at the first
    /// skill when nothing is selected. No-op without skills.
    pub fn next_skill(&mut self) {
        if self.skills.is_empty() {
            return;
        }
        self.selected_skill = Some(match self.selected_skill {
            None => 0,
            Some(current) => (current + 1) % self.skills.len(),
        });
    }

    /// Move the skill selection backward, wrapping. Starts at the last
    /// skill when nothing is selected. No-op without skills.
    pub fn previous_skill(&mut self) {
        if self.skills.is_empty() {
            return;
        }
        self.selected_skill = Some(match self.selected_skill {
            None => self.skills.len() - 1,
            Some(0) => self.skills.len() - 1,
            Some(current) => current - 1,
        });
    }

    /// Select a skill by index, or deselect it when already selected.
    /// Out-of-range indices are ignored.
    pub fn select_skill(&mut self, index: usize) {
        if index >= self.skills.len() {
            return;
        }
        self.selected_skill = if self.selected_skill == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Clear the skill selection.
    pub fn deselect_skill(&mut self) {
        self.selected_skill = None;
    }

    /// The carousel surface that currently has focus, if the focused
    /// pane is one.
    pub fn focused_surface(&self) -> Option<DeskSurface> {
        match self.focus {
            FocusPane::Laptop => Some(DeskSurface::Laptop),
            FocusPane::Phone => Some(DeskSurface::Phone),
            _ => None,
        }
    }

    /// Controller for a display surface.
    pub fn surface(&self, surface: DeskSurface) -> &CycleController<Project> {
        match surface {
            DeskSurface::Laptop => &self.laptop,
            DeskSurface::Phone => &self.phone,
        }
    }

    /// Mutable controller for a display surface.
    pub fn surface_mut(&mut self, surface: DeskSurface) -> &mut CycleController<Project> {
        match surface {
            DeskSurface::Laptop => &mut self.laptop,
            DeskSurface::Phone => &mut self.phone,
        }
    }

    /// Toggle autoplay for the focused display surface via its
    /// user-toggle pause source. No-op when focus is not on a surface.
    pub fn toggle_autoplay(&mut self, now: Instant) {
        let Some(surface) = self.focused_surface() else {
            return;
        };
        let controller = self.surface_mut(surface);
        if controller.is_paused_by(PauseSource::UserToggle) {
            controller.resume(PauseSource::UserToggle, now);
        } else {
            controller.pause(PauseSource::UserToggle);
        }
    }

    /// Update hover tracking to `surface`, translating the change into
    /// hover pause/resume calls on the affected controllers.
    pub fn set_hovered(&mut self, surface: Option<DeskSurface>, now: Instant) {
        if self.hovered == surface {
            return;
        }
        if let Some(previous) = self.hovered {
            self.surface_mut(previous).resume(PauseSource::Hover, now);
        }
        if let Some(current) = surface {
            self.surface_mut(current).pause(PauseSource::Hover);
        }
        self.hovered = surface;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
