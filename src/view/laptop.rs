//! The laptop display: a browser-window frame cycling web projects.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::Project;
use crate::state::{AppState, FocusPane};
use crate::view::helpers::{centered_row, chip_line, dots_line, dots_width, empty_line, truncate_to_width};
use crate::view::styles::Palette;

/// Render the laptop surface into `area`.
///
/// Returns the dot-indicator row for mouse hit-testing, when one was
/// drawn.
pub fn render_laptop(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: &Palette,
) -> Option<Rect> {
    let controller = &state.laptop;
    let focused = state.focus == FocusPane::Laptop;

    // Window chrome: traffic lights and an address bar in the title.
    let address = format!(
        " ● ● ●  portfolio.dev/projects/{} ",
        controller.current_index() + 1
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(focused))
        .title(Span::styled(address, palette.muted_style()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 4 || inner.width < 8 {
        return None;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // project card
            Constraint::Length(1), // counter + hint
            Constraint::Length(1), // dot indicators
        ])
        .split(inner);

    match controller.current_item() {
        Some(project) => render_project_card(frame, chunks[0], project, palette),
        None => frame.render_widget(
            Paragraph::new("No web projects yet")
                .style(palette.muted_style())
                .alignment(Alignment::Center),
            chunks[0],
        ),
    }

    let total = controller.total_items();
    if total == 0 {
        return None;
    }

    let mut counter = format!("{} / {}", controller.current_index() + 1, total);
    if controller.is_paused() {
        counter.push_str("  ⏸");
    }
    frame.render_widget(
        Paragraph::new(counter)
            .style(palette.muted_style())
            .alignment(Alignment::Center),
        chunks[1],
    );

    let dots_area = centered_row(chunks[2], chunks[2].y, dots_width(total));
    frame.render_widget(
        Paragraph::new(dots_line(total, controller.current_index(), palette)),
        dots_area,
    );
    Some(dots_area)
}

/// One project rendered as a card: title, tech chips, description, links.
fn render_project_card(frame: &mut Frame, area: Rect, project: &Project, palette: &Palette) {
    let width = usize::from(area.width);

    let mut lines = vec![
        Line::styled(
            truncate_to_width(&project.title, width),
            palette.title_style(),
        ),
        empty_line(),
        chip_line(&project.tech, palette),
        empty_line(),
        Line::styled(project.description.clone(), palette.text_style()),
    ];

    let mut links = Vec::new();
    if let Some(url) = &project.live_url {
        links.push(("Live ", url));
    }
    if let Some(url) = &project.repo_url {
        links.push(("Code ", url));
    }
    if !links.is_empty() {
        lines.push(empty_line());
        for (label, url) in links {
            lines.push(Line::from(vec![
                Span::styled(label, palette.muted_style()),
                Span::styled(truncate_to_width(url, width.saturating_sub(5)), palette.title_style()),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
