//! Small line-building helpers shared by the panels.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::view::constants::{DOT_ACTIVE, DOT_INACTIVE};
use crate::view::styles::Palette;

/// An empty spacer line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// Truncate `text` to at most `max_width` terminal cells, appending an
/// ellipsis when anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// The dot-indicator line for a carousel: one dot per item, the current
/// one highlighted, single spaces between.
///
/// Dots sit on even column offsets, which the mouse hit-testing relies
/// on; keep this and `HitAreas::dot_at` in sync.
pub fn dots_line(total: usize, current: usize, palette: &Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(total * 2);
    for index in 0..total {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        if index == current {
            spans.push(Span::styled(DOT_ACTIVE, Style::default().fg(palette.accent)));
        } else {
            spans.push(Span::styled(DOT_INACTIVE, Style::default().fg(palette.muted)));
        }
    }
    Line::from(spans)
}

/// Width in cells of a dot-indicator line for `total` items.
pub fn dots_width(total: usize) -> u16 {
    if total == 0 {
        0
    } else {
        (total * 2 - 1) as u16
    }
}

/// Center a line of `width` cells horizontally inside `area`, returning
/// the exact sub-rectangle it occupies (height 1, on `row`).
pub fn centered_row(area: Rect, row: u16, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, row, width, 1)
}

/// Tech tags rendered as a chip line: `[React] [Expo] …`.
pub fn chip_line(tech: &[String], palette: &Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(tech.len() * 2);
    for (index, tag) in tech.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!("[{tag}]"),
            Style::default().fg(palette.chip),
        ));
    }
    Line::from(spans)
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Theme;
    use crate::view::styles::ColorConfig;

    fn palette() -> Palette {
        Palette::new(Theme::Light, ColorConfig::from_env_and_args(true))
    }

    #[test]
    fn short_text_is_not_truncated() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn long_text_gets_an_ellipsis_within_budget() {
        use unicode_width::UnicodeWidthStr;

        let truncated = truncate_to_width("a rather long project title", 10);
        assert!(truncated.ends_with('…'));
        assert!(truncated.width() <= 10);
    }

    #[test]
    fn dots_width_counts_gaps() {
        assert_eq!(dots_width(0), 0);
        assert_eq!(dots_width(1), 1);
        assert_eq!(dots_width(3), 5);
    }

    #[test]
    fn dots_line_marks_the_current_item() {
        let line = dots_line(3, 1, &palette());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "○ ● ○");
    }

    #[test]
    fn centered_row_stays_inside_the_area() {
        let area = Rect::new(10, 0, 20, 5);
        let row = centered_row(area, 2, 5);
        assert_eq!(row, Rect::new(17, 2, 5, 1));

        let oversized = centered_row(area, 2, 50);
        assert_eq!(oversized.width, 20, "clamped to the area");
    }

    #[test]
    fn chip_line_wraps_each_tag_in_brackets() {
        let tags = vec!["React".to_string(), "Vite".to_string()];
        let line = chip_line(&tags, &palette());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[React] [Vite]");
    }
}
