//! Key-hint overlay.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::view::styles::Palette;

const BINDINGS: &[(&str, &str)] = &[
    ("Tab", "cycle panes"),
    ("1-5", "focus laptop/phone/about/skills/contact"),
    ("←/→ h/l", "previous / next item"),
    ("Enter/Space", "toggle note · deselect skill"),
    ("a", "toggle autoplay on focused display"),
    ("t", "switch light/dark theme"),
    ("?", "toggle this overlay"),
    ("q / Ctrl+C", "quit"),
];

/// Render the centered help overlay on top of everything else.
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let area = centered_box(frame.area(), 52, (BINDINGS.len() + 5) as u16);
    frame.render_widget(Clear, area);

    let mut lines = Vec::with_capacity(BINDINGS.len() + 2);
    for (keys, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("{keys:>12}  "), palette.title_style()),
            Span::styled(*action, palette.text_style()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "While the contact form is focused, typing goes to it.",
        palette.muted_style(),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(true))
        .title(Span::styled(" Key Bindings ", palette.title_style()));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// A box of at most `width` x `height` centered in `area`.
fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
