//! The desk panels: about sticky note, skills grid, contact form.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::contact_form::{ContactField, FormPhase};
use crate::state::{AppState, FocusPane};
use crate::view::constants::{BAR_EMPTY, BAR_FILLED, SKILL_BAR_WIDTH};
use crate::view::helpers::{empty_line, truncate_to_width};
use crate::view::styles::Palette;

// ===== About note =====

/// Render the sticky-note about panel.
pub fn render_about(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let focused = state.focus == FocusPane::About;
    let marker = if state.about_expanded { "▾" } else { "▸" };

    let note_style = Style::default()
        .bg(palette.note_bg)
        .fg(palette.note_text);

    let mut lines = vec![
        Line::styled(
            format!("Hi, I'm {}!", state.profile.name),
            note_style.add_modifier(Modifier::BOLD),
        ),
        Line::styled(state.profile.tagline.clone(), note_style),
        empty_line(),
    ];

    if state.about_expanded {
        for entry in &state.profile.bio {
            lines.push(Line::styled(format!("· {entry}"), note_style));
        }
        if let Some(location) = &state.profile.location {
            lines.push(Line::styled(format!("· Based in {location}"), note_style));
        }
    } else {
        lines.push(Line::styled(
            "Enter to learn more…",
            note_style.add_modifier(Modifier::ITALIC),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(focused))
        .title(Span::styled(
            format!(" About Me {marker} "),
            palette.title_style(),
        ));

    frame.render_widget(
        Paragraph::new(lines)
            .style(note_style)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

// ===== Skills grid =====

/// Render the skills panel: one proficiency bar per skill, with the
/// selected skill's description underneath.
pub fn render_skills(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let focused = state.focus == FocusPane::Skills;

    let mut lines = Vec::with_capacity(state.skills.len() + 2);
    for (index, skill) in state.skills.iter().enumerate() {
        let selected = state.selected_skill == Some(index);
        let marker = if selected { "▸ " } else { "  " };
        let name_style = if selected {
            palette.title_style()
        } else {
            palette.text_style()
        };

        lines.push(Line::from(vec![
            Span::styled(marker, palette.title_style()),
            Span::styled(format!("{:<13}", truncate_to_width(&skill.name, 12)), name_style),
            Span::styled(proficiency_bar(skill.clamped_level()), Style::default().fg(palette.accent)),
            Span::styled(format!(" {:>3}%", skill.clamped_level()), palette.muted_style()),
        ]));
    }

    if let Some(index) = state.selected_skill {
        if let Some(skill) = state.skills.get(index) {
            lines.push(empty_line());
            lines.push(Line::styled(skill.description.clone(), palette.muted_style()));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(focused))
        .title(Span::styled(" Skills & Technologies ", palette.title_style()));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

/// Fixed-width bar for a 0-100 proficiency level.
fn proficiency_bar(level: u8) -> String {
    let filled = (usize::from(level) * SKILL_BAR_WIDTH + 50) / 100;
    let filled = filled.min(SKILL_BAR_WIDTH);
    let mut bar = String::new();
    for _ in 0..filled {
        bar.push_str(BAR_FILLED);
    }
    for _ in filled..SKILL_BAR_WIDTH {
        bar.push_str(BAR_EMPTY);
    }
    bar
}

// ===== Contact form =====

/// Render the contact form panel with inline validation messages and
/// the submit lifecycle notice.
pub fn render_contact(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let focused = state.focus == FocusPane::Contact;
    let form = &state.contact;
    let editing = matches!(form.phase, FormPhase::Editing);
    let width = usize::from(area.width.saturating_sub(4));

    let mut lines = Vec::new();
    for (field, label) in [
        (ContactField::Name, "Name *"),
        (ContactField::Email, "Email *"),
        (ContactField::Message, "Message *"),
    ] {
        let field_focused = focused && editing && form.focused == field;
        let label_style = if field_focused {
            palette.title_style()
        } else {
            palette.muted_style()
        };
        lines.push(Line::styled(label.to_string(), label_style));

        let cursor = if field_focused { "▏" } else { "" };
        lines.push(Line::styled(
            format!("  {}{}", truncate_to_width(form.value_of(field), width), cursor),
            palette.text_style(),
        ));

        if let Some(message) = form.error_for(field) {
            lines.push(Line::styled(
                format!("  ⚠ {message}"),
                Style::default().fg(palette.error),
            ));
        }
    }

    lines.push(empty_line());
    lines.push(match form.phase {
        FormPhase::Submitting { .. } => Line::styled("Sending…", palette.title_style()),
        FormPhase::Sent { .. } => Line::styled(
            "✓ Message sent successfully!",
            Style::default().fg(palette.success),
        ),
        FormPhase::Editing => Line::styled("Enter sends · ↑/↓ switch fields", palette.muted_style()),
    });

    if !state.profile.email.is_empty() {
        lines.push(Line::styled(
            format!("Or directly: {}", state.profile.email),
            palette.muted_style(),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(focused))
        .title(Span::styled(" Get In Touch ", palette.title_style()));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
