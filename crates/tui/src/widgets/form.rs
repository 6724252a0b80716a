//! Task dialog widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::task_card::truncate_string;
use crate::form::{FormField, TaskForm};
use crate::layout::centered_rect;
use crate::theme::Theme;

const FORM_WIDTH: u16 = 56;
const FORM_HEIGHT: u16 = 11;
const LABEL_WIDTH: usize = 13;

/// Renders the task dialog centered in `area`.
///
/// # Layout
///
/// ```text
/// ╭ New Task ─────────────────────────────────────────╮
/// │                                                   │
/// │ Title        Write report█                        │
/// │ Description  Quarterly numbers                    │
/// │ Priority     < High >                             │
/// │ Due date     14.03.2025                           │
/// │ Reminder     09:30                                │
/// │                                                   │
/// │ invalid due date '31.02.2025', expected dd.mm.yyyy│
/// │ Tab next  ←→ priority  Enter save  Esc cancel     │
/// ╰───────────────────────────────────────────────────╯
/// ```
pub fn render_task_form(form: &TaskForm, theme: Theme, area: Rect, buf: &mut Buffer) {
    let palette = theme.palette();
    let popup = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
    Clear.render(popup, buf);

    let value_width = (popup.width as usize).saturating_sub(LABEL_WIDTH + 4);
    let mut lines = vec![Line::from("")];

    for field in FormField::all() {
        let focused = form.focus == field;
        let label_style = if focused {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };

        let mut spans = vec![Span::styled(
            format!(" {:<width$}", field.label(), width = LABEL_WIDTH),
            label_style,
        )];
        match field {
            FormField::Priority => {
                let arrows = if focused { ("< ", " >") } else { ("  ", "  ") };
                spans.push(Span::raw(arrows.0));
                spans.push(Span::styled(
                    form.priority.display_name(),
                    Style::default()
                        .fg(theme.color_of(form.priority))
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(arrows.1));
            }
            _ => {
                let value = match field {
                    FormField::Title => form.title.value(),
                    FormField::Description => form.description.value(),
                    FormField::DueDate => form.due_date.value(),
                    _ => form.reminder_time.value(),
                };
                // Keep the end of the text, where the cursor is, in view.
                let shown: String = if value.chars().count() >= value_width {
                    let skip = value.chars().count() + 1 - value_width.max(1);
                    value.chars().skip(skip).collect()
                } else {
                    value.to_string()
                };
                spans.push(Span::raw(shown));
                if focused {
                    spans.push(Span::styled(
                        " ",
                        Style::default().add_modifier(Modifier::REVERSED),
                    ));
                }
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(match &form.error {
        Some(error) => Line::from(Span::styled(
            format!(" {}", truncate_string(&error.to_string(), popup.width.saturating_sub(3) as usize)),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(""),
    });
    lines.push(Line::from(Span::styled(
        " Tab next  ←→ priority  Enter save  Esc cancel",
        Style::default().fg(palette.muted),
    )));

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", form.heading()),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(theme.base_style());

    Paragraph::new(lines).block(block).render(popup, buf);
}
