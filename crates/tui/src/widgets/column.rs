//! Column rendering widget.
//!
//! A column shows its name and task count in the border title, followed by
//! a vertical list of task cards that scrolls to keep the selection visible.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use taskboard_protocol::Column;

use super::BoardStyle;
use super::task_card::render_task_card;
use crate::layout::TASK_CARD_HEIGHT;

/// Position of a column in the horizontal layout.
///
/// Adjacent columns share a border, so only the last one draws its right
/// edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// Leftmost column, rounded corners on the left.
    First,
    /// Any column between the first and last.
    Middle,
    /// Rightmost column, rounded corners on the right.
    Last,
}

impl ColumnPosition {
    /// Returns the position of column `index` out of `count`.
    #[must_use]
    pub const fn of(index: usize, count: usize) -> Self {
        if index == 0 {
            Self::First
        } else if index + 1 >= count {
            Self::Last
        } else {
            Self::Middle
        }
    }

    const fn borders(self) -> Borders {
        match self {
            Self::First | Self::Middle => Borders::TOP.union(Borders::BOTTOM).union(Borders::LEFT),
            Self::Last => Borders::ALL,
        }
    }
}

const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Renders a single column to the buffer.
///
/// Empty columns show a "No tasks" placeholder. When the column to the left
/// is focused, the shared border is drawn in the accent colour as well.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskboard_protocol::{Column, ColumnKind};
/// use taskboard_tui::widgets::{BoardStyle, ColumnPosition, render_column};
///
/// let column = Column::new(ColumnKind::ToDo);
/// let area = Rect::new(0, 0, 24, 12);
/// let mut buf = Buffer::empty(area);
///
/// render_column(&column, true, None, BoardStyle::default(), ColumnPosition::First, false, area, &mut buf);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn render_column(
    column: &Column,
    is_focused: bool,
    selected_idx: Option<usize>,
    style: BoardStyle<'_>,
    position: ColumnPosition,
    prev_focused: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let palette = style.theme.palette();
    let border_style = if is_focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.muted)
    };

    let title = format!(" {} ({}) ", column.kind.display_name(), column.len());
    let title_style = if is_focused {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.foreground)
    };

    let border_set = match position {
        ColumnPosition::First => BORDER_SET_FIRST,
        ColumnPosition::Middle => BORDER_SET_MIDDLE,
        ColumnPosition::Last => BORDER_SET_LAST,
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(position.borders())
        .border_set(border_set)
        .border_style(border_style)
        .style(style.theme.base_style());

    let inner_area = block.inner(area);
    block.render(area, buf);

    if prev_focused && !is_focused && area.width > 0 {
        let accent = Style::default().fg(palette.accent);
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_style(accent);
            }
        }
    }

    if column.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            "No tasks",
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        )))
        .render(inner_area, buf);
        return;
    }

    let visible_tasks = (inner_area.height / TASK_CARD_HEIGHT).max(1) as usize;
    let scroll_offset = calculate_scroll_offset(selected_idx, column.len(), visible_tasks);

    let task_count = column.len().min(visible_tasks);
    let mut constraints: Vec<Constraint> = (0..task_count)
        .map(|_| Constraint::Length(TASK_CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let task_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    for (i, task_area) in task_areas.iter().take(task_count).enumerate() {
        let task_idx = scroll_offset + i;
        let Some(task) = column.tasks.get(task_idx) else {
            break;
        };
        let is_selected = is_focused && selected_idx == Some(task_idx);
        render_task_card(
            task,
            is_selected,
            style.theme,
            style.date_format,
            *task_area,
            buf,
        );
    }
}

/// Calculates the scroll offset to keep the selected task visible.
pub(crate) fn calculate_scroll_offset(
    selected_idx: Option<usize>,
    total_tasks: usize,
    visible_tasks: usize,
) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };

    if total_tasks <= visible_tasks {
        return 0;
    }

    let max_offset = total_tasks.saturating_sub(visible_tasks);
    if selected < visible_tasks / 2 {
        0
    } else {
        selected.saturating_sub(visible_tasks / 2).min(max_offset)
    }
}
