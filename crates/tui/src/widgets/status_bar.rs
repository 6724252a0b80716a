//! Status bar rendering widget.
//!
//! A single row at the bottom of the board with the most used key hints,
//! preceded by the outcome of the last action when there is one.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

const HINTS: &[(&str, &str)] = &[
    ("n", "New"),
    ("e", "Edit"),
    ("d", "Delete"),
    ("Shift+←→", "Move"),
    ("c", "Calendar"),
    ("x", "Export"),
    ("t", "Theme"),
    ("?", "Help"),
];

/// Renders the status bar.
///
/// # Layout
///
/// ```text
/// Moved "Plan" to Done | n New  e Edit  d Delete  Shift+←→ Move ...
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskboard_tui::theme::Theme;
/// use taskboard_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(Some("Task added"), Theme::Light, area, &mut buf);
/// ```
pub fn render_status_bar(status: Option<&str>, theme: Theme, area: Rect, buf: &mut Buffer) {
    let palette = theme.palette();
    let key_style = Style::default().fg(palette.key);
    let text_style = Style::default().fg(palette.muted);

    let mut spans = Vec::new();
    if let Some(status) = status {
        spans.push(Span::styled(status.to_string(), Style::default().fg(palette.accent)));
        spans.push(Span::styled(" | ", text_style));
    }
    for (key, action) in HINTS {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {action}  "), text_style));
    }

    Paragraph::new(Line::from(spans))
        .style(theme.base_style())
        .render(area, buf);
}
