//! Calendar overlay widget.
//!
//! Shows the cursor's month as a Monday-first grid with due dates
//! highlighted, and below it the tasks due on the cursor date.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use taskboard_protocol::{CalendarMarks, KanbanBoard, describe_due_on};

use super::BoardStyle;
use crate::calendar::CalendarView;
use crate::layout::centered_rect;

const CALENDAR_WIDTH: u16 = 44;
const CALENDAR_HEIGHT: u16 = 22;
const WEEKDAYS: &str = " Mo Tu We Th Fr Sa Su";

/// Renders the calendar overlay centered in `area`.
///
/// # Layout
///
/// ```text
/// ╭ Calendar ────────────────────────────────╮
/// │              March 2025                  │
/// │ Mo Tu We Th Fr Sa Su                     │
/// │                    1  2                  │
/// │  3  4  5  6  7  8  9                     │
/// │ ...                                      │
/// │ Tasks on 12.03.2025                      │
/// │ • Write report (High)                    │
/// ╰──────────────────────────────────────────╯
/// ```
pub fn render_calendar(
    view: &CalendarView,
    marks: &CalendarMarks,
    board: &KanbanBoard,
    style: BoardStyle<'_>,
    area: Rect,
    buf: &mut Buffer,
) {
    let palette = style.theme.palette();
    let popup = centered_rect(CALENDAR_WIDTH, CALENDAR_HEIGHT, area);
    Clear.render(popup, buf);

    let block = Block::default()
        .title(Span::styled(
            " Calendar ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(style.theme.base_style());
    let inner = block.inner(popup);
    block.render(popup, buf);

    let [grid_area, preview_area, hint_area] = Layout::vertical([
        Constraint::Length(9),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    Paragraph::new(grid_lines(view, marks, style)).render(grid_area, buf);

    let summary = describe_due_on(board, view.cursor, style.date_format);
    let mut preview = vec![Line::from(Span::styled(
        format!(" {}", summary.heading),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    let line_style = if summary.is_empty() {
        Style::default()
            .fg(palette.muted)
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default()
    };
    preview.extend(
        summary
            .lines
            .into_iter()
            .map(|line| Line::from(Span::styled(format!(" {line}"), line_style))),
    );
    Paragraph::new(preview).render(preview_area, buf);

    Paragraph::new(Line::from(Span::styled(
        "←→↑↓ day/week  PgUp/PgDn month  Enter show",
        Style::default().fg(palette.muted),
    )))
    .alignment(Alignment::Center)
    .render(hint_area, buf);
}

fn grid_lines(view: &CalendarView, marks: &CalendarMarks, style: BoardStyle<'_>) -> Vec<Line<'static>> {
    let palette = style.theme.palette();
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{:^21}", view.month_title()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(WEEKDAYS, Style::default().fg(palette.muted))),
    ];

    for week in view.weeks() {
        let mut spans = Vec::with_capacity(14);
        for day in week {
            spans.push(Span::raw(" "));
            let Some(date) = day else {
                spans.push(Span::raw("  "));
                continue;
            };
            let mut day_style = Style::default();
            if marks.is_marked(date) {
                day_style = day_style.fg(palette.marked).add_modifier(Modifier::BOLD);
            }
            if date == view.today {
                day_style = day_style.add_modifier(Modifier::UNDERLINED);
            }
            if date == view.cursor {
                day_style = day_style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!("{:>2}", date.format("%-d")), day_style));
        }
        lines.push(Line::from(spans));
    }
    lines
}
