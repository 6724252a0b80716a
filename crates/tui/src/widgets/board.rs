//! Kanban board rendering widget.
//!
//! The three columns are laid out side by side with equal widths.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
};
use taskboard_protocol::{ColumnKind, KanbanBoard};

use super::BoardStyle;
use super::column::{ColumnPosition, render_column};

/// Renders the complete Kanban board to the buffer.
///
/// Only the focused column shows a task selection.
///
/// # Layout
///
/// ```text
/// ╭ To Do (2) ──────┬ In Progress (1) ┬ Done (0) ───────╮
/// │┌──────────────┐ │┌──────────────┐ │No tasks         │
/// ││Task 1        │ ││Task 3        │ │                 │
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskboard_protocol::{ColumnKind, KanbanBoard};
/// use taskboard_tui::widgets::{BoardStyle, render_board};
///
/// let board = KanbanBoard::new();
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&board, ColumnKind::ToDo, None, BoardStyle::default(), area, &mut buf);
/// ```
pub fn render_board(
    board: &KanbanBoard,
    selected_column: ColumnKind,
    selected_task: Option<usize>,
    style: BoardStyle<'_>,
    area: Rect,
    buf: &mut Buffer,
) {
    let column_areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
    let kinds = ColumnKind::all();

    for (i, kind) in kinds.iter().enumerate() {
        let is_focused = selected_column == *kind;
        let task_selection = if is_focused { selected_task } else { None };
        let prev_focused = kind.previous() == Some(selected_column);

        render_column(
            board.column(*kind),
            is_focused,
            task_selection,
            style,
            ColumnPosition::of(i, kinds.len()),
            prev_focused,
            column_areas[i],
            buf,
        );
    }
}

/// Returns the column under horizontal offset `x` of a board drawn in `area`.
///
/// Mirrors the split used by [`render_board`].
#[must_use]
pub fn column_at(x: u16, area: Rect) -> Option<ColumnKind> {
    if !(area.x..area.x.saturating_add(area.width)).contains(&x) {
        return None;
    }
    let column_areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
    column_areas
        .iter()
        .position(|rect| (rect.x..rect.x + rect.width).contains(&x))
        .and_then(ColumnKind::from_index)
}
