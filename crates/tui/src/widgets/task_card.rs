//! Task card rendering widget.
//!
//! Cards show the title, the first line of the description and the due
//! instant with the priority. The border takes the priority colour.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use taskboard_protocol::Task;

use crate::theme::Theme;

/// Renders a task card to the buffer.
///
/// # Layout
///
/// ```text
/// ┌──────────────────────────┐
/// │Write report              │
/// │Quarterly numbers         │
/// │Due 14.03.2025 09:30 High │
/// └──────────────────────────┘
/// ```
///
/// The selected card gets a thick border and a bold title.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskboard_protocol::{Task, TaskFields};
/// use taskboard_tui::theme::Theme;
/// use taskboard_tui::widgets::render_task_card;
///
/// let due = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// let task = Task::new(TaskFields::new("Write report", due, NaiveTime::MIN));
/// let area = Rect::new(0, 0, 24, 5);
/// let mut buf = Buffer::empty(area);
///
/// render_task_card(&task, false, Theme::Light, "%d.%m.%Y", area, &mut buf);
/// ```
pub fn render_task_card(
    task: &Task,
    is_selected: bool,
    theme: Theme,
    date_format: &str,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let palette = theme.palette();
    let priority_color = theme.color_of(task.priority);
    let (border_type, title_style) = if is_selected {
        (
            BorderType::Thick,
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (BorderType::Plain, Style::default().fg(palette.foreground))
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let description = task.description.lines().next().unwrap_or_default();
    let due = format!(
        "Due {} {}",
        task.due_date.format(date_format),
        task.reminder_time.format("%H:%M")
    );

    let content = vec![
        Line::from(Span::styled(
            truncate_string(&task.title, inner_width),
            title_style,
        )),
        Line::from(Span::styled(
            truncate_string(description, inner_width),
            Style::default().fg(palette.muted),
        )),
        Line::from(vec![
            Span::styled(
                truncate_string(&due, inner_width),
                Style::default().fg(palette.muted),
            ),
            Span::raw(" "),
            Span::styled(
                task.priority.display_name(),
                Style::default().fg(priority_color),
            ),
        ]),
    ];

    Paragraph::new(content)
        .style(theme.base_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(priority_color)),
        )
        .render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
pub(crate) fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use ratatui::style::Color;
    use taskboard_protocol::{Priority, TaskFields};

    use super::*;
    use crate::test_utils::buffer_to_string;

    fn task(priority: Priority) -> Task {
        let due = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        Task::new(
            TaskFields::new("Write report", due, NaiveTime::from_hms_opt(9, 30, 0).unwrap())
                .with_description("Quarterly numbers\nsecond line")
                .with_priority(priority),
        )
    }

    #[test]
    fn truncate_string_short() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello", 5), "Hello");
    }

    #[test]
    fn truncate_string_long() {
        assert_eq!(truncate_string("Hello, World!", 10), "Hello, ...");
        assert_eq!(truncate_string("Hello", 3), "Hel");
    }

    #[test]
    fn card_layout() {
        let area = Rect::new(0, 0, 36, 5);
        let mut buf = Buffer::empty(area);

        render_task_card(&task(Priority::High), false, Theme::Light, "%d.%m.%Y", area, &mut buf);

        insta::assert_snapshot!(buffer_to_string(&buf), @r"
        ┌──────────────────────────────────┐
        │Write report                      │
        │Quarterly numbers                 │
        │Due 14.03.2025 09:30 High         │
        └──────────────────────────────────┘
        ");
    }

    #[test]
    fn border_takes_priority_color() {
        let area = Rect::new(0, 0, 30, 5);
        for (priority, color) in [
            (Priority::High, Color::Red),
            (Priority::Medium, Color::Yellow),
            (Priority::Low, Color::Green),
        ] {
            let mut buf = Buffer::empty(area);
            render_task_card(&task(priority), false, Theme::Dark, "%d.%m.%Y", area, &mut buf);
            assert_eq!(buf[(0, 0)].fg, color);
        }
    }

    #[test]
    fn selected_card_uses_thick_border() {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        render_task_card(&task(Priority::Low), true, Theme::Light, "%d.%m.%Y", area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "┏");
        assert!(buf[(1, 1)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn date_format_is_respected() {
        let area = Rect::new(0, 0, 36, 5);
        let mut buf = Buffer::empty(area);

        render_task_card(&task(Priority::Medium), false, Theme::Light, "%Y-%m-%d", area, &mut buf);

        assert!(buffer_to_string(&buf).contains("Due 2025-03-14 09:30 Medium"));
    }

    #[test]
    fn tiny_area_renders_nothing() {
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        render_task_card(&task(Priority::Low), true, Theme::Light, "%d.%m.%Y", area, &mut buf);
        assert_eq!(buffer_to_string(&buf), "\n\n");
    }
}
