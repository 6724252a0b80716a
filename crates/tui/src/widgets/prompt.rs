//! Export path prompt and delete confirmation widgets.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use taskboard_protocol::Task;

use crate::form::PathPrompt;
use crate::layout::centered_rect;
use crate::theme::Theme;

const PROMPT_WIDTH: u16 = 60;
const PROMPT_HEIGHT: u16 = 7;
const CONFIRM_WIDTH: u16 = 44;
const CONFIRM_HEIGHT: u16 = 6;

fn popup_block(title: &str, theme: Theme) -> Block<'static> {
    let palette = theme.palette();
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(theme.base_style())
}

/// Renders the export destination prompt centered in `area`.
///
/// ```text
/// ╭ Export PDF ──────────────────────────────╮
/// │                                          │
/// │ Save to: /home/me/kanban.pdf█            │
/// │                                          │
/// │ Enter export  Esc cancel  empty cancels  │
/// ╰──────────────────────────────────────────╯
/// ```
pub fn render_export_prompt(prompt: &PathPrompt, theme: Theme, area: Rect, buf: &mut Buffer) {
    let palette = theme.palette();
    let popup = centered_rect(PROMPT_WIDTH, PROMPT_HEIGHT, area);
    Clear.render(popup, buf);

    let label = " Save to: ";
    let room = (popup.width as usize).saturating_sub(label.len() + 3);
    let value = prompt.input.value();
    let count = value.chars().count();
    let shown: String = value.chars().skip(count.saturating_sub(room)).collect();

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(label, Style::default().fg(palette.muted)),
            Span::raw(shown),
            Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Enter export  Esc cancel  empty path cancels",
            Style::default().fg(palette.muted),
        )),
    ];

    Paragraph::new(lines)
        .block(popup_block("Export PDF", theme))
        .render(popup, buf);
}

/// Renders the delete confirmation for `task` centered in `area`.
pub fn render_confirm_delete(task: &Task, theme: Theme, area: Rect, buf: &mut Buffer) {
    let palette = theme.palette();
    let popup = centered_rect(CONFIRM_WIDTH, CONFIRM_HEIGHT, area);
    Clear.render(popup, buf);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(" Delete "),
            Span::styled(
                format!("\"{}\"", task.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("?"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" y", Style::default().fg(palette.key)),
            Span::raw(" delete  "),
            Span::styled("n", Style::default().fg(palette.key)),
            Span::raw(" keep"),
        ]),
    ];

    Paragraph::new(lines)
        .block(popup_block("Confirm", theme))
        .wrap(Wrap { trim: false })
        .render(popup, buf);
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::{NaiveDate, NaiveTime};
    use taskboard_protocol::TaskFields;

    use super::*;
    use crate::test_utils::buffer_contains;

    #[test]
    fn prompt_shows_path() {
        let prompt = PathPrompt::new(PathBuf::from("/tmp/kanban.pdf"));
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_export_prompt(&prompt, Theme::Light, area, &mut buf);

        assert!(buffer_contains(&buf, "Export PDF"));
        assert!(buffer_contains(&buf, "Save to: /tmp/kanban.pdf"));
    }

    #[test]
    fn prompt_keeps_end_of_long_path() {
        let long = format!("/{}/board.pdf", "nested".repeat(20));
        let prompt = PathPrompt::new(PathBuf::from(long));
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_export_prompt(&prompt, Theme::Light, area, &mut buf);

        assert!(buffer_contains(&buf, "nested/board.pdf"));
    }

    #[test]
    fn confirm_names_task() {
        let due = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let task = Task::new(TaskFields::new("Old idea", due, NaiveTime::MIN));
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_confirm_delete(&task, Theme::Dark, area, &mut buf);

        assert!(buffer_contains(&buf, "Delete \"Old idea\"?"));
        assert!(buffer_contains(&buf, "y delete  n keep"));
    }
}
