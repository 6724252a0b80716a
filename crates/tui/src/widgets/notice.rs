//! Notice (message box) widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::layout::centered_rect;
use crate::state::{Notice, NoticeKind};
use crate::theme::Theme;

const NOTICE_WIDTH: u16 = 50;

/// Renders `notice` centered in `area`.
///
/// `queued` is the number of further notices waiting behind this one.
/// The box grows with the body up to the height of `area`.
pub fn render_notice(notice: &Notice, queued: usize, theme: Theme, area: Rect, buf: &mut Buffer) {
    let palette = theme.palette();
    let accent = match notice.kind {
        NoticeKind::Info => palette.accent,
        NoticeKind::Reminder => palette.marked,
        NoticeKind::Error => Color::Red,
    };

    let mut lines = vec![Line::from("")];
    lines.extend(notice.body.lines().map(|line| Line::from(format!(" {line}"))));
    lines.push(Line::from(""));
    let hint = if queued > 0 {
        format!(" Press any key ({queued} more)")
    } else {
        " Press any key".to_string()
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default()
            .fg(palette.muted)
            .add_modifier(Modifier::ITALIC),
    )));

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let popup = centered_rect(NOTICE_WIDTH, height, area);
    Clear.render(popup, buf);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", notice.title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .style(theme.base_style());

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .render(popup, buf);
}
