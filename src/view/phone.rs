//! The phone display: a rounded frame cycling mobile projects, with an
//! autoplay indicator and dot switcher.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::Project;
use crate::state::cycle::PauseSource;
use crate::state::{AppState, FocusPane};
use crate::view::helpers::{centered_row, chip_line, dots_line, dots_width, empty_line, truncate_to_width};
use crate::view::styles::Palette;

/// Render the phone surface into `area`.
///
/// Returns the dot-indicator row for mouse hit-testing, when one was
/// drawn.
pub fn render_phone(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: &Palette,
) -> Option<Rect> {
    let controller = &state.phone;
    let focused = state.focus == FocusPane::Phone;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style(focused))
        .title(Span::styled(" 9:41 ", palette.muted_style()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 4 || inner.width < 8 {
        return None;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // app screen
            Constraint::Length(1), // autoplay + counter
            Constraint::Length(1), // dot switcher
        ])
        .split(inner);

    match controller.current_item() {
        Some(project) => render_app_screen(frame, chunks[0], project, palette),
        None => frame.render_widget(
            Paragraph::new("No mobile apps yet")
                .style(palette.muted_style())
                .alignment(Alignment::Center),
            chunks[0],
        ),
    }

    let total = controller.total_items();
    if total == 0 {
        return None;
    }

    // Original behavior: the toggle is sticky, the hover/manual window
    // merely suspends. Label reflects the sticky switch.
    let (label, label_style) = if controller.is_paused_by(PauseSource::UserToggle) {
        ("⏸ Manual", palette.muted_style())
    } else {
        ("▶ Auto", Style::default().fg(palette.success))
    };
    let status = Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(
            format!("  {} / {}", controller.current_index() + 1, total),
            palette.muted_style(),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        chunks[1],
    );

    let dots_area = centered_row(chunks[2], chunks[2].y, dots_width(total));
    frame.render_widget(
        Paragraph::new(dots_line(total, controller.current_index(), palette)),
        dots_area,
    );
    Some(dots_area)
}

/// One mobile project rendered as an app screen.
fn render_app_screen(frame: &mut Frame, area: Rect, project: &Project, palette: &Palette) {
    let width = usize::from(area.width);

    let mut lines = vec![
        Line::styled(
            truncate_to_width(&project.title, width),
            palette.title_style(),
        ),
        chip_line(&project.tech, palette),
        empty_line(),
        Line::styled(project.description.clone(), palette.text_style()),
    ];

    let mut links = Vec::new();
    if let Some(url) = &project.store_url {
        links.push(("Store ", url));
    }
    if let Some(url) = &project.repo_url {
        links.push(("Code  ", url));
    }
    if !links.is_empty() {
        lines.push(empty_line());
        for (label, url) in links {
            lines.push(Line::from(vec![
                Span::styled(label, palette.muted_style()),
                Span::styled(
                    truncate_to_width(url, width.saturating_sub(6)),
                    palette.title_style(),
                ),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
