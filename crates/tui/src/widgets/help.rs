//! Help overlay widget.
//!
//! This module provides the help overlay that displays all available keybindings
//! when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::layout::centered_rect;
use crate::theme::Theme;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 40;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 23;

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("←  →", "Focus column"),
            ("↑  ↓", "Select task"),
            ("Shift+← →", "Move to column"),
            ("Shift+↑ ↓", "Reorder task"),
        ],
    ),
    (
        "Tasks",
        &[
            ("n", "New task"),
            ("Enter / e", "Edit task"),
            ("d / Del", "Delete task"),
        ],
    ),
    (
        "Board",
        &[
            ("c", "Calendar"),
            ("x", "Export PDF"),
            ("t", "Toggle dark mode"),
            ("Esc", "Clear selection"),
            ("Ctrl+C", "Quit"),
            ("?", "Toggle help"),
        ],
    ),
];

/// Renders a centered help overlay displaying all keybindings.
///
/// The area behind the overlay is cleared first.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskboard_tui::theme::Theme;
/// use taskboard_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(Theme::Light, area, &mut buf);
/// ```
pub fn render_help_overlay(theme: Theme, area: Rect, buf: &mut Buffer) {
    let palette = theme.palette();
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);
    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(palette.key)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.key))
        .style(theme.base_style());

    Paragraph::new(build_help_lines(theme))
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

fn build_help_lines(theme: Theme) -> Vec<Line<'static>> {
    let palette = theme.palette();
    let header_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(palette.key);
    let hint_style = Style::default()
        .fg(palette.muted)
        .add_modifier(Modifier::ITALIC);

    let mut lines = Vec::new();
    for (section, keys) in BINDINGS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {section}"), header_style)));
        for (key, action) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), key_style),
                Span::raw(*action),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_contains;

    #[test]
    fn all_lines_fit_the_panel() {
        let lines = build_help_lines(Theme::Light);
        assert!(lines.len() <= usize::from(HELP_HEIGHT - 2));
        assert!(lines.iter().all(|l| l.width() <= usize::from(HELP_WIDTH - 2)));
    }

    #[test]
    fn render_help_overlay_lists_bindings() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_help_overlay(Theme::Dark, area, &mut buf);

        assert!(buffer_contains(&buf, "Help"));
        assert!(buffer_contains(&buf, "Navigation"));
        assert!(buffer_contains(&buf, "Shift+← →   Move to column"));
        assert!(buffer_contains(&buf, "x           Export PDF"));
        assert!(buffer_contains(&buf, "Press any key to close"));
    }

    #[test]
    fn render_help_overlay_small_area() {
        let area = Rect::new(0, 0, 30, 10);
        let mut buf = Buffer::empty(area);
        render_help_overlay(Theme::Light, area, &mut buf);
    }
}
