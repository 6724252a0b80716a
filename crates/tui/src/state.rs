//! Application state management.
//!
//! This module defines the core state structures for the TUI application:
//! the board with its calendar marks, selection tracking, the active
//! overlay and the queue of pending notices.

use std::collections::VecDeque;

use taskboard_protocol::{
    CalendarMarks, Column, ColumnKind, KanbanBoard, Task, TaskFields, TaskId,
};

use crate::calendar::CalendarView;
use crate::form::{PathPrompt, TaskForm};
use crate::theme::Theme;

/// A modal panel drawn over the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    /// Creating or editing a task.
    TaskForm(TaskForm),
    /// Browsing due dates.
    Calendar(CalendarView),
    /// Choosing the PDF destination.
    ExportPrompt(PathPrompt),
    /// Waiting for the user to confirm a deletion.
    ConfirmDelete(TaskId),
}

/// How a notice is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Neutral information.
    Info,
    /// A reminder that fired.
    Reminder,
    /// Something went wrong.
    Error,
}

/// A message box waiting to be acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// How the notice is presented.
    pub kind: NoticeKind,
    /// Box title.
    pub title: String,
    /// Box body, may span several lines.
    pub body: String,
}

impl Notice {
    /// Creates an informational notice.
    #[must_use]
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Creates a reminder notice.
    #[must_use]
    pub fn reminder(body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Reminder,
            title: "Reminder".to_string(),
            body: body.into(),
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Which key mapping applies to the next key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Board navigation and actions.
    Board,
    /// The help overlay is open.
    Help,
    /// A notice is waiting to be dismissed.
    Notice,
    /// The task dialog is open.
    Form,
    /// The export prompt is open.
    Prompt,
    /// The calendar is open.
    Calendar,
    /// A deletion awaits confirmation.
    Confirm,
}

/// The application state.
///
/// Contains all mutable state for the TUI application including the board
/// data, selection tracking, overlays and the theme.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The Kanban board being displayed.
    pub board: KanbanBoard,
    /// Dates with at least one task due.
    pub marks: CalendarMarks,
    /// The focused column.
    pub selected_column: ColumnKind,
    /// Index of the selected task within the focused column, if any.
    pub selected_task: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The active colour theme.
    pub theme: Theme,
    /// The open overlay, if any.
    pub overlay: Option<Overlay>,
    /// Notices waiting to be dismissed, oldest first.
    pub notices: VecDeque<Notice>,
}

impl AppState {
    /// Creates a new application state with the given board.
    ///
    /// Initializes with the first column focused and the light theme.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::{ColumnKind, KanbanBoard};
    /// use taskboard_tui::AppState;
    ///
    /// let state = AppState::new(KanbanBoard::new());
    /// assert_eq!(state.selected_column, ColumnKind::ToDo);
    /// ```
    #[must_use]
    pub fn new(board: KanbanBoard) -> Self {
        let mut marks = CalendarMarks::new();
        marks.sync_with(&board);
        Self {
            board,
            marks,
            selected_column: ColumnKind::ToDo,
            selected_task: None,
            help_visible: false,
            theme: Theme::default(),
            overlay: None,
            notices: VecDeque::new(),
        }
    }

    fn selected_column_ref(&self) -> &Column {
        self.board.column(self.selected_column)
    }

    /// Returns the key mapping for the current screen.
    ///
    /// Notices sit above everything, then help, then the open overlay.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if !self.notices.is_empty() {
            return InputMode::Notice;
        }
        if self.help_visible {
            return InputMode::Help;
        }
        match self.overlay {
            None => InputMode::Board,
            Some(Overlay::TaskForm(_)) => InputMode::Form,
            Some(Overlay::Calendar(_)) => InputMode::Calendar,
            Some(Overlay::ExportPrompt(_)) => InputMode::Prompt,
            Some(Overlay::ConfirmDelete(_)) => InputMode::Confirm,
        }
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }

    /// Switches between the light and dark theme.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = self.theme.display_name(), "theme toggled");
    }

    /// Queues a notice behind any already shown.
    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    /// Dismisses the front notice. Returns `true` if there was one.
    pub fn dismiss_notice(&mut self) -> bool {
        self.notices.pop_front().is_some()
    }

    /// Moves the column focus to the left, wrapping around if needed.
    pub fn navigate_left(&mut self) {
        self.selected_column = self
            .selected_column
            .previous()
            .unwrap_or(ColumnKind::Done);
        self.clamp_task_selection();
    }

    /// Moves the column focus to the right, wrapping around if needed.
    pub fn navigate_right(&mut self) {
        self.selected_column = self.selected_column.next().unwrap_or(ColumnKind::ToDo);
        self.clamp_task_selection();
    }

    /// Moves the task selection up within the focused column.
    pub fn navigate_up(&mut self) {
        let len = self.selected_column_ref().len();
        if len == 0 {
            self.selected_task = None;
            return;
        }

        self.selected_task = match self.selected_task {
            Some(idx) if idx > 0 => Some(idx - 1),
            Some(_) => Some(len - 1),
            None => Some(0),
        };
    }

    /// Moves the task selection down within the focused column.
    pub fn navigate_down(&mut self) {
        let len = self.selected_column_ref().len();
        if len == 0 {
            self.selected_task = None;
            return;
        }

        self.selected_task = match self.selected_task {
            Some(idx) if idx + 1 < len => Some(idx + 1),
            Some(_) | None => Some(0),
        };
    }

    /// Returns the currently selected task, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, NaiveTime};
    /// use taskboard_protocol::{ColumnKind, KanbanBoard, Task, TaskFields};
    /// use taskboard_tui::AppState;
    ///
    /// let due = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// let mut board = KanbanBoard::new();
    /// board.add_task(ColumnKind::ToDo, Task::new(TaskFields::new("Task 1", due, NaiveTime::MIN)));
    ///
    /// let mut state = AppState::new(board);
    /// assert!(state.selected_task().is_none());
    ///
    /// state.navigate_down();
    /// assert_eq!(state.selected_task().unwrap().title, "Task 1");
    /// ```
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        let idx = self.selected_task?;
        self.selected_column_ref().tasks.get(idx)
    }

    /// Returns the ID of the selected task, if any.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(|task| task.id)
    }

    /// Clears the current task selection.
    pub fn clear_selection(&mut self) {
        self.selected_task = None;
    }

    /// Focuses the column and position currently holding `id`.
    ///
    /// Returns `false` if the task is not on the board.
    pub fn select_task(&mut self, id: TaskId) -> bool {
        match self.board.locate(id) {
            Some((column, idx)) => {
                self.selected_column = column;
                self.selected_task = Some(idx);
                true
            }
            None => false,
        }
    }

    /// Appends a new task to `column`, selects it and returns its ID.
    pub fn add_task(&mut self, column: ColumnKind, fields: TaskFields) -> TaskId {
        let task = Task::new(fields);
        let id = task.id;
        self.board.add_task(column, task);
        self.refresh_after_mutation(Some(id));
        id
    }

    /// Replaces the fields of a task, selecting it at its new position.
    ///
    /// # Errors
    ///
    /// Returns [`taskboard_protocol::ProtocolError::TaskNotFound`] if the
    /// task is not on the board.
    pub fn edit_task(&mut self, id: TaskId, fields: TaskFields) -> taskboard_protocol::Result<()> {
        self.board.edit_task(id, fields)?;
        self.refresh_after_mutation(Some(id));
        Ok(())
    }

    /// Removes a task. Unknown IDs are ignored.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.board.remove_task(id)?;
        self.refresh_after_mutation(None);
        Some(removed)
    }

    /// Moves the selected task into the neighbouring column, appending it.
    ///
    /// `delta` is negative for the left neighbour. Returns `false` when there
    /// is no selection or no neighbour in that direction.
    pub fn move_selected_across(&mut self, delta: isize) -> bool {
        let Some(id) = self.selected_task_id() else {
            return false;
        };
        let target = if delta < 0 {
            self.selected_column.previous()
        } else {
            self.selected_column.next()
        };
        let Some(target) = target else {
            return false;
        };
        self.apply_move(id, target, None)
    }

    /// Moves the selected task up or down within its column.
    ///
    /// Returns `false` when there is no selection or the task is already at
    /// that end of the column.
    pub fn move_selected_within(&mut self, delta: isize) -> bool {
        let (Some(id), Some(idx)) = (self.selected_task_id(), self.selected_task) else {
            return false;
        };
        let Some(position) = idx.checked_add_signed(delta) else {
            return false;
        };
        if position >= self.selected_column_ref().len() {
            return false;
        }
        self.apply_move(id, self.selected_column, Some(position))
    }

    fn apply_move(&mut self, id: TaskId, to: ColumnKind, position: Option<usize>) -> bool {
        match self.board.move_task(id, to, position) {
            Ok(()) => {
                tracing::debug!(task = %id, column = to.display_name(), "task moved");
                self.refresh_after_mutation(Some(id));
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "move failed");
                false
            }
        }
    }

    fn refresh_after_mutation(&mut self, focus: Option<TaskId>) {
        self.marks.sync_with(&self.board);
        if !focus.is_some_and(|id| self.select_task(id)) {
            self.clamp_task_selection();
        }
    }

    /// Ensures the task selection is valid for the focused column.
    fn clamp_task_selection(&mut self) {
        let len = self.selected_column_ref().len();
        if len == 0 {
            self.selected_task = None;
        } else if let Some(idx) = self.selected_task
            && idx >= len
        {
            self.selected_task = Some(len - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use taskboard_protocol::Priority;

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
    }

    fn fields(title: &str, due: NaiveDate) -> TaskFields {
        TaskFields::new(title, due, NaiveTime::MIN)
    }

    fn state_with(titles: &[&str]) -> AppState {
        let mut board = KanbanBoard::new();
        for (i, title) in titles.iter().enumerate() {
            board.add_task(ColumnKind::ToDo, Task::new(fields(title, day(i as u32 + 1))));
        }
        AppState::new(board)
    }

    fn titles(state: &AppState, column: ColumnKind) -> Vec<&str> {
        state
            .board
            .column(column)
            .tasks
            .iter()
            .map(|t| t.title.as_str())
            .collect()
    }

    #[test]
    fn new_state_has_correct_defaults() {
        let state = state_with(&["a"]);
        assert_eq!(state.selected_column, ColumnKind::ToDo);
        assert!(state.selected_task.is_none());
        assert!(!state.help_visible);
        assert_eq!(state.theme, Theme::Light);
        assert!(state.overlay.is_none());
        assert!(state.marks.is_marked(day(1)));
        assert_eq!(state.input_mode(), InputMode::Board);
    }

    #[test]
    fn navigate_left_right_wrap_around() {
        let mut state = state_with(&[]);
        state.navigate_left();
        assert_eq!(state.selected_column, ColumnKind::Done);
        state.navigate_right();
        assert_eq!(state.selected_column, ColumnKind::ToDo);
        state.navigate_right();
        assert_eq!(state.selected_column, ColumnKind::InProgress);
    }

    #[test]
    fn navigate_up_down_with_tasks() {
        let mut state = state_with(&["a", "b", "c"]);
        state.navigate_down();
        assert_eq!(state.selected_task, Some(0));
        state.navigate_down();
        state.navigate_down();
        assert_eq!(state.selected_task, Some(2));
        state.navigate_down();
        assert_eq!(state.selected_task, Some(0));
        state.navigate_up();
        assert_eq!(state.selected_task, Some(2));
    }

    #[test]
    fn navigating_into_empty_column_clears_selection() {
        let mut state = state_with(&["a"]);
        state.navigate_down();
        state.navigate_right();
        assert!(state.selected_task.is_none());
        state.navigate_up();
        assert!(state.selected_task.is_none());
    }

    #[test]
    fn input_mode_priority() {
        let mut state = state_with(&[]);
        state.overlay = Some(Overlay::Calendar(CalendarView::new(day(1))));
        assert_eq!(state.input_mode(), InputMode::Calendar);
        state.toggle_help();
        assert_eq!(state.input_mode(), InputMode::Help);
        state.push_notice(Notice::info("t", "b"));
        assert_eq!(state.input_mode(), InputMode::Notice);
    }

    #[test]
    fn notices_are_fifo() {
        let mut state = state_with(&[]);
        state.push_notice(Notice::info("first", ""));
        state.push_notice(Notice::reminder("second"));
        assert!(state.dismiss_notice());
        assert_eq!(state.notices.front().unwrap().kind, NoticeKind::Reminder);
        assert!(state.dismiss_notice());
        assert!(!state.dismiss_notice());
    }

    #[test]
    fn dismiss_help_reports_visibility() {
        let mut state = state_with(&[]);
        assert!(!state.dismiss_help());
        state.toggle_help();
        assert!(state.dismiss_help());
        assert!(!state.help_visible);
    }

    #[test]
    fn add_task_selects_and_marks() {
        let mut state = state_with(&["a"]);
        state.selected_column = ColumnKind::InProgress;
        let id = state.add_task(ColumnKind::InProgress, fields("new", day(20)));

        assert_eq!(state.selected_task_id(), Some(id));
        assert!(state.marks.is_marked(day(20)));
    }

    #[test]
    fn edit_task_moves_to_end_and_updates_marks() {
        let mut state = state_with(&["a", "b"]);
        let id = state.board.column(ColumnKind::ToDo).tasks[0].id;

        state
            .edit_task(id, fields("a2", day(15)).with_priority(Priority::High))
            .unwrap();
        assert_eq!(state.selected_task().unwrap().priority, Priority::High);

        assert_eq!(titles(&state, ColumnKind::ToDo), ["b", "a2"]);
        assert_eq!(state.selected_task, Some(1));
        assert!(!state.marks.is_marked(day(1)));
        assert!(state.marks.is_marked(day(15)));
    }

    #[test]
    fn remove_task_clamps_selection_and_unmarks() {
        let mut state = state_with(&["a", "b"]);
        state.selected_task = Some(1);
        let id = state.selected_task_id().unwrap();

        assert!(state.remove_task(id).is_some());
        assert_eq!(state.selected_task, Some(0));
        assert!(!state.marks.is_marked(day(2)));
        assert!(state.remove_task(id).is_none());
    }

    #[test]
    fn move_across_appends_and_follows_task() {
        let mut state = state_with(&["a", "b"]);
        state.add_task(ColumnKind::InProgress, fields("busy", day(9)));
        state.selected_column = ColumnKind::ToDo;
        state.selected_task = Some(0);

        assert!(state.move_selected_across(1));
        assert_eq!(titles(&state, ColumnKind::InProgress), ["busy", "a"]);
        assert_eq!(state.selected_column, ColumnKind::InProgress);
        assert_eq!(state.selected_task, Some(1));
        assert_eq!(state.selected_task().unwrap().column, ColumnKind::InProgress);

        assert!(state.move_selected_across(1));
        assert!(!state.move_selected_across(1));
        assert_eq!(state.selected_column, ColumnKind::Done);
    }

    #[test]
    fn move_within_reorders() {
        let mut state = state_with(&["a", "b", "c"]);
        state.selected_task = Some(0);

        assert!(!state.move_selected_within(-1));
        assert!(state.move_selected_within(1));
        assert_eq!(titles(&state, ColumnKind::ToDo), ["b", "a", "c"]);
        assert_eq!(state.selected_task, Some(1));

        state.selected_task = Some(2);
        assert!(!state.move_selected_within(1));
    }

    #[test]
    fn moves_without_selection_do_nothing() {
        let mut state = state_with(&["a"]);
        assert!(!state.move_selected_across(1));
        assert!(!state.move_selected_within(1));
    }
}
