//! Desk-scene layout: where every panel lands on screen.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, FocusPane, HitAreas};
use crate::view::styles::{ColorConfig, Palette};
use crate::view::{help, laptop, panels, phone};

/// Resolved screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeskLayout {
    /// Title bar.
    pub header: Rect,
    /// Laptop display (left of the desk).
    pub laptop: Rect,
    /// Phone display (right of the desk).
    pub phone: Rect,
    /// About note (bottom left).
    pub about: Rect,
    /// Skills grid (bottom middle).
    pub skills: Rect,
    /// Contact form (bottom right).
    pub contact: Rect,
    /// Status/hint bar.
    pub status: Rect,
}

/// Split the screen into the desk-scene regions.
///
/// Header and status bar take one line each; the desk (laptop + phone)
/// gets the flexible middle; the panel row keeps a fixed height so the
/// form stays usable on short terminals.
pub fn compute_layout(area: Rect) -> DeskLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // desk: laptop + phone
            Constraint::Length(12), // panel row
            Constraint::Length(1), // status bar
        ])
        .split(area);

    let desk = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(vertical[1]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(38),
            Constraint::Percentage(32),
        ])
        .split(vertical[2]);

    DeskLayout {
        header: vertical[0],
        laptop: desk[0],
        phone: desk[1],
        about: panels[0],
        skills: panels[1],
        contact: panels[2],
        status: vertical[3],
    }
}

/// Render the whole application and report the mouse hit areas for this
/// frame.
pub fn render_app(frame: &mut Frame, state: &AppState, colors: ColorConfig) -> HitAreas {
    let palette = Palette::new(state.theme, colors);
    let layout = compute_layout(frame.area());

    render_header(frame, layout.header, state, &palette);
    let laptop_dots = laptop::render_laptop(frame, layout.laptop, state, &palette);
    let phone_dots = phone::render_phone(frame, layout.phone, state, &palette);
    panels::render_about(frame, layout.about, state, &palette);
    panels::render_skills(frame, layout.skills, state, &palette);
    panels::render_contact(frame, layout.contact, state, &palette);
    render_status_bar(frame, layout.status, state, &palette);

    if state.help_visible {
        help::render_help_overlay(frame, &palette);
    }

    HitAreas {
        laptop: Some(layout.laptop),
        phone: Some(layout.phone),
        laptop_dots,
        phone_dots,
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    frame.render_widget(
        Paragraph::new(Line::styled(
            "Interactive Developer Desk Portfolio",
            palette.title_style(),
        )),
        area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("theme: {} · ? help ", state.theme),
            palette.muted_style(),
        )))
        .alignment(Alignment::Right),
        area,
    );
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let pane = match state.focus {
        FocusPane::Laptop => "laptop",
        FocusPane::Phone => "phone",
        FocusPane::About => "about",
        FocusPane::Skills => "skills",
        FocusPane::Contact => "contact",
    };
    frame.render_widget(
        Paragraph::new(Line::styled(
            format!("[{pane}]  Tab panes · ←/→ navigate · a autoplay · t theme · q quit"),
            palette.muted_style(),
        )),
        area,
    );
}

// ===== Tests =====
