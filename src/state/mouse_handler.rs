//! Mouse interaction: hover tracking and dot-indicator clicks.
//!
//! The view records where it last drew the display surfaces and their
//! dot rows; this module translates raw mouse events against those
//! areas into controller calls. Hovering a display pauses it (and only
//! it); clicking a dot jumps straight to that project.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::state::app_state::{AppState, DeskSurface, FocusPane};

/// Screen regions recorded during the last render, used for mouse
/// hit-testing. All `None`/empty until the first draw.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    /// Full laptop display area.
    pub laptop: Option<Rect>,
    /// Full phone display area.
    pub phone: Option<Rect>,
    /// Laptop dot-indicator row (height 1, one dot every two columns).
    pub laptop_dots: Option<Rect>,
    /// Phone dot-indicator row.
    pub phone_dots: Option<Rect>,
}

impl HitAreas {
    /// Which display surface contains the given cell, if any.
    pub fn surface_at(&self, column: u16, row: u16) -> Option<DeskSurface> {
        let position = Position::new(column, row);
        if self.laptop.is_some_and(|area| area.contains(position)) {
            Some(DeskSurface::Laptop)
        } else if self.phone.is_some_and(|area| area.contains(position)) {
            Some(DeskSurface::Phone)
        } else {
            None
        }
    }

    /// Dot index under the given cell, if it lands exactly on a dot of
    /// either surface's indicator row.
    pub fn dot_at(&self, column: u16, row: u16) -> Option<(DeskSurface, usize)> {
        let hit = |area: Option<Rect>| -> Option<usize> {
            let area = area?;
            if row != area.y || column < area.x || column >= area.x + area.width {
                return None;
            }
            let offset = column - area.x;
            // Dots are drawn on even offsets with a space between.
            (offset % 2 == 0).then_some(usize::from(offset / 2))
        };

        if let Some(index) = hit(self.laptop_dots) {
            return Some((DeskSurface::Laptop, index));
        }
        if let Some(index) = hit(self.phone_dots) {
            return Some((DeskSurface::Phone, index));
        }
        None
    }
}

/// Apply a mouse event to the state.
pub fn handle_mouse(state: &mut AppState, areas: &HitAreas, event: MouseEvent, now: Instant) {
    match event.kind {
        MouseEventKind::Moved => {
            let surface = areas.surface_at(event.column, event.row);
            state.set_hovered(surface, now);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some((surface, index)) = areas.dot_at(event.column, event.row) {
                state.surface_mut(surface).go_to_index(index, now);
                state.set_focus(match surface {
                    DeskSurface::Laptop => FocusPane::Laptop,
                    DeskSurface::Phone => FocusPane::Phone,
                });
            } else if let Some(surface) = areas.surface_at(event.column, event.row) {
                state.set_focus(match surface {
                    DeskSurface::Laptop => FocusPane::Laptop,
                    DeskSurface::Phone => FocusPane::Phone,
                });
            }
        }
        _ => {}
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
