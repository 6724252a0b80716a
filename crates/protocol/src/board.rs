//! Kanban board types and structures.
//!
//! This module defines the three fixed status columns and the board that
//! holds them. Every task lives in exactly one column; moving a task is a
//! remove from the source column paired with an insert into the destination.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};
use crate::task::{Task, TaskFields, TaskId};

/// One of the three fixed status columns.
///
/// The order reflects the typical progression of work, but any column can
/// be reached from any other.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::ColumnKind;
///
/// let column = ColumnKind::InProgress;
/// assert_eq!(column.display_name(), "In Progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Tasks waiting to be started.
    #[default]
    ToDo,
    /// Tasks currently being worked on.
    InProgress,
    /// Completed tasks.
    Done,
}

impl ColumnKind {
    /// Returns all columns in board order.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::ColumnKind;
    ///
    /// let columns = ColumnKind::all();
    /// assert_eq!(columns.len(), 3);
    /// assert_eq!(columns[0], ColumnKind::ToDo);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::ToDo, Self::InProgress, Self::Done]
    }

    /// Returns a human-readable display name for the column.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::ColumnKind;
    ///
    /// assert_eq!(ColumnKind::ToDo.display_name(), "To Do");
    /// assert_eq!(ColumnKind::Done.display_name(), "Done");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the index of this column on the board (0-2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::ToDo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Creates a `ColumnKind` from its index.
    ///
    /// Returns `None` if the index is out of range (>= 3).
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::ColumnKind;
    ///
    /// assert_eq!(ColumnKind::from_index(1), Some(ColumnKind::InProgress));
    /// assert_eq!(ColumnKind::from_index(3), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::ToDo),
            1 => Some(Self::InProgress),
            2 => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns the column to the right, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the column to the left, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(idx) => Self::from_index(idx),
            None => None,
        }
    }
}

/// A single column on the Kanban board.
///
/// Task order reflects manual placement, or insertion order otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Which column this is.
    pub kind: ColumnKind,
    /// Tasks currently in this column, ordered by position.
    pub tasks: Vec<Task>,
}

impl Column {
    /// Creates a new empty column of the specified kind.
    #[must_use]
    pub const fn new(kind: ColumnKind) -> Self {
        Self {
            kind,
            tasks: Vec::new(),
        }
    }

    /// Returns the number of tasks in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the column has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the position of a task in this column, if present.
    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Returns a reference to a task by ID, if found.
    #[must_use]
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.position(id)?;
        Some(self.tasks.remove(pos))
    }
}

/// A Kanban board with three fixed columns.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use taskboard_protocol::{ColumnKind, KanbanBoard, Task, TaskFields};
///
/// let mut board = KanbanBoard::new();
/// let due = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// let task = Task::new(TaskFields::new("Plan sprint", due, NaiveTime::MIN));
/// let id = task.id;
///
/// board.add_task(ColumnKind::ToDo, task);
/// board.move_task(id, ColumnKind::Done, None).unwrap();
///
/// assert_eq!(board.column(ColumnKind::Done).len(), 1);
/// assert_eq!(board.total_tasks(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbanBoard {
    /// The three columns of the board, indexed by [`ColumnKind::index`].
    pub columns: [Column; 3],
}

impl Default for KanbanBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl KanbanBoard {
    /// Creates a new empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: ColumnKind::all().map(Column::new),
        }
    }

    /// Returns a reference to the column of the specified kind.
    #[must_use]
    pub fn column(&self, kind: ColumnKind) -> &Column {
        &self.columns[kind.index()]
    }

    fn column_mut(&mut self, kind: ColumnKind) -> &mut Column {
        &mut self.columns[kind.index()]
    }

    /// Appends a task to the end of a column.
    ///
    /// There is no capacity limit and no uniqueness check on titles.
    pub fn add_task(&mut self, column: ColumnKind, mut task: Task) {
        task.move_to_column(column);
        self.column_mut(column).tasks.push(task);
    }

    /// Finds a task by ID across all columns.
    #[must_use]
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.columns.iter().find_map(|column| column.get_task(id))
    }

    /// Returns the column and position of a task.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, NaiveTime};
    /// use taskboard_protocol::{ColumnKind, KanbanBoard, Task, TaskFields};
    ///
    /// let mut board = KanbanBoard::new();
    /// let due = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
    /// let task = Task::new(TaskFields::new("Review", due, NaiveTime::MIN));
    /// let id = task.id;
    /// board.add_task(ColumnKind::InProgress, task);
    ///
    /// assert_eq!(board.locate(id), Some((ColumnKind::InProgress, 0)));
    /// ```
    #[must_use]
    pub fn locate(&self, id: TaskId) -> Option<(ColumnKind, usize)> {
        self.columns
            .iter()
            .find_map(|column| column.position(id).map(|pos| (column.kind, pos)))
    }

    /// Iterates over every task in column-then-position order.
    pub fn iter_tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns.iter().flat_map(|column| column.tasks.iter())
    }

    /// Removes a task by ID from whichever column holds it.
    ///
    /// Removing an unknown ID is a no-op and returns `None`.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        self.columns
            .iter_mut()
            .find_map(|column| column.remove_task(id))
    }

    /// Moves a task into a column at the given position.
    ///
    /// The position is clamped to the destination length; `None` appends.
    /// Moving within the same column reorders it.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::TaskNotFound`] if no column holds the task.
    pub fn move_task(&mut self, id: TaskId, to: ColumnKind, position: Option<usize>) -> Result<()> {
        let mut task = self.remove_task(id).ok_or(ProtocolError::TaskNotFound(id))?;
        task.move_to_column(to);

        let destination = self.column_mut(to);
        let index = position.map_or(destination.len(), |p| p.min(destination.len()));
        destination.tasks.insert(index, task);
        Ok(())
    }

    /// Replaces every editable field of a task.
    ///
    /// The old entry is removed and the updated one appended at the end of
    /// the same column, so the task's position is not preserved. The ID is
    /// kept so that anything keyed on it can be refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::TaskNotFound`] if no column holds the task.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, NaiveTime};
    /// use taskboard_protocol::{ColumnKind, KanbanBoard, Task, TaskFields};
    ///
    /// let due = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
    /// let mut board = KanbanBoard::new();
    /// let draft = Task::new(TaskFields::new("Draft", due, NaiveTime::MIN));
    /// let id = draft.id;
    /// board.add_task(ColumnKind::ToDo, draft);
    /// board.add_task(ColumnKind::ToDo, Task::new(TaskFields::new("Other", due, NaiveTime::MIN)));
    ///
    /// let edited = board.edit_task(id, TaskFields::new("Final", due, NaiveTime::MIN)).unwrap();
    /// assert_eq!(edited.title, "Final");
    /// assert_eq!(board.locate(id), Some((ColumnKind::ToDo, 1)));
    /// ```
    pub fn edit_task(&mut self, id: TaskId, fields: TaskFields) -> Result<&Task> {
        let old = self.remove_task(id).ok_or(ProtocolError::TaskNotFound(id))?;
        let column = old.column;

        let mut replacement = Task::with_id(id, fields);
        replacement.move_to_column(column);

        let destination = self.column_mut(column);
        destination.tasks.push(replacement);
        let last = destination.tasks.len() - 1;
        Ok(&destination.tasks[last])
    }

    /// Returns every task due on `date`.
    ///
    /// Scans To Do, then In Progress, then Done, keeping position order
    /// within each column.
    #[must_use]
    pub fn tasks_due_on(&self, date: NaiveDate) -> Vec<&Task> {
        self.iter_tasks().filter(|t| t.due_date == date).collect()
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::priority::Priority;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, d).expect("valid date")
    }

    fn task(title: &str, due: NaiveDate) -> Task {
        Task::new(TaskFields::new(title, due, NaiveTime::MIN))
    }

    fn titles(board: &KanbanBoard, kind: ColumnKind) -> Vec<&str> {
        board
            .column(kind)
            .tasks
            .iter()
            .map(|t| t.title.as_str())
            .collect()
    }

    #[test]
    fn column_kind_all_returns_three_columns() {
        let all = ColumnKind::all();
        assert_eq!(all, [ColumnKind::ToDo, ColumnKind::InProgress, ColumnKind::Done]);
    }

    #[test]
    fn column_kind_index_roundtrip() {
        for kind in ColumnKind::all() {
            assert_eq!(ColumnKind::from_index(kind.index()), Some(kind));
        }
    }

    #[test]
    fn column_kind_navigation() {
        assert_eq!(ColumnKind::ToDo.next(), Some(ColumnKind::InProgress));
        assert_eq!(ColumnKind::InProgress.next(), Some(ColumnKind::Done));
        assert_eq!(ColumnKind::Done.next(), None);

        assert_eq!(ColumnKind::Done.previous(), Some(ColumnKind::InProgress));
        assert_eq!(ColumnKind::ToDo.previous(), None);
    }

    #[test]
    fn column_kind_json_format() {
        let json = serde_json::to_string(&ColumnKind::InProgress).expect("serialize");
        assert_eq!(json, r#""in_progress""#);
    }

    #[test]
    fn new_board_has_three_empty_columns() {
        let board = KanbanBoard::new();
        for (i, column) in board.columns.iter().enumerate() {
            assert_eq!(column.kind.index(), i);
            assert!(column.is_empty());
        }
        assert_eq!(board.total_tasks(), 0);
    }

    #[test]
    fn add_appends_and_sets_column() {
        let mut board = KanbanBoard::new();
        board.add_task(ColumnKind::Done, task("a", date(1)));
        board.add_task(ColumnKind::Done, task("b", date(1)));

        assert_eq!(titles(&board, ColumnKind::Done), ["a", "b"]);
        assert!(board.column(ColumnKind::Done).tasks.iter().all(|t| t.column == ColumnKind::Done));
    }

    #[test]
    fn duplicate_titles_are_allowed() {
        let mut board = KanbanBoard::new();
        board.add_task(ColumnKind::ToDo, task("same", date(1)));
        board.add_task(ColumnKind::ToDo, task("same", date(1)));
        assert_eq!(board.total_tasks(), 2);
    }

    #[test]
    fn remove_unknown_task_is_noop() {
        let mut board = KanbanBoard::new();
        board.add_task(ColumnKind::ToDo, task("keep", date(1)));

        assert!(board.remove_task(TaskId::new_v4()).is_none());
        assert_eq!(board.total_tasks(), 1);
    }

    #[test]
    fn remove_returns_task() {
        let mut board = KanbanBoard::new();
        let t = task("gone", date(1));
        let id = t.id;
        board.add_task(ColumnKind::InProgress, t);

        let removed = board.remove_task(id).expect("task should be removed");
        assert_eq!(removed.title, "gone");
        assert_eq!(board.total_tasks(), 0);
    }

    #[test]
    fn move_between_columns() {
        let mut board = KanbanBoard::new();
        let t = task("moving", date(1));
        let id = t.id;
        board.add_task(ColumnKind::ToDo, t);
        board.add_task(ColumnKind::Done, task("first", date(1)));
        board.add_task(ColumnKind::Done, task("last", date(1)));

        board.move_task(id, ColumnKind::Done, Some(1)).expect("move");

        assert!(board.column(ColumnKind::ToDo).is_empty());
        assert_eq!(titles(&board, ColumnKind::Done), ["first", "moving", "last"]);
        assert_eq!(board.get_task(id).map(|t| t.column), Some(ColumnKind::Done));
    }

    #[test]
    fn move_clamps_position() {
        let mut board = KanbanBoard::new();
        let t = task("moving", date(1));
        let id = t.id;
        board.add_task(ColumnKind::ToDo, t);
        board.add_task(ColumnKind::InProgress, task("existing", date(1)));

        board.move_task(id, ColumnKind::InProgress, Some(99)).expect("move");
        assert_eq!(titles(&board, ColumnKind::InProgress), ["existing", "moving"]);
    }

    #[test]
    fn move_within_column_reorders() {
        let mut board = KanbanBoard::new();
        let a = task("a", date(1));
        let id = a.id;
        board.add_task(ColumnKind::ToDo, a);
        board.add_task(ColumnKind::ToDo, task("b", date(1)));
        board.add_task(ColumnKind::ToDo, task("c", date(1)));

        board.move_task(id, ColumnKind::ToDo, Some(2)).expect("move");
        assert_eq!(titles(&board, ColumnKind::ToDo), ["b", "c", "a"]);
    }

    #[test]
    fn move_unknown_task_fails() {
        let mut board = KanbanBoard::new();
        let id = TaskId::new_v4();
        let err = board.move_task(id, ColumnKind::Done, None).unwrap_err();
        assert!(matches!(err, ProtocolError::TaskNotFound(missing) if missing == id));
    }

    #[test]
    fn edit_appends_at_end_of_same_column() {
        let mut board = KanbanBoard::new();
        let draft = task("Draft", date(1));
        let id = draft.id;
        board.add_task(ColumnKind::InProgress, draft);
        board.add_task(ColumnKind::InProgress, task("Other", date(2)));

        let fields = TaskFields::new("Final", date(3), NaiveTime::MIN).with_priority(Priority::High);
        let edited = board.edit_task(id, fields).expect("edit");
        assert_eq!(edited.id, id);
        assert_eq!(edited.column, ColumnKind::InProgress);

        assert_eq!(titles(&board, ColumnKind::InProgress), ["Other", "Final"]);
        assert_eq!(board.total_tasks(), 2);
    }

    #[test]
    fn edit_unknown_task_fails() {
        let mut board = KanbanBoard::new();
        let fields = TaskFields::new("x", date(1), NaiveTime::MIN);
        assert!(board.edit_task(TaskId::new_v4(), fields).is_err());
    }

    #[test]
    fn tasks_due_on_scans_in_column_order() {
        let mut board = KanbanBoard::new();
        board.add_task(ColumnKind::Done, task("done", date(5)));
        board.add_task(ColumnKind::ToDo, task("todo-1", date(5)));
        board.add_task(ColumnKind::ToDo, task("other-day", date(6)));
        board.add_task(ColumnKind::InProgress, task("doing", date(5)));
        board.add_task(ColumnKind::ToDo, task("todo-2", date(5)));

        let due: Vec<_> = board.tasks_due_on(date(5)).iter().map(|t| t.title.as_str()).collect();
        assert_eq!(due, ["todo-1", "todo-2", "doing", "done"]);
    }

    #[test]
    fn tasks_due_on_empty_when_nothing_matches() {
        let mut board = KanbanBoard::new();
        board.add_task(ColumnKind::ToDo, task("a", date(1)));
        assert!(board.tasks_due_on(date(2)).is_empty());
    }
}

#[cfg(test)]
mod proptest_tests {
    use chrono::NaiveTime;
    use proptest::prelude::*;

    use super::*;

    fn arb_column() -> impl Strategy<Value = ColumnKind> {
        prop_oneof![
            Just(ColumnKind::ToDo),
            Just(ColumnKind::InProgress),
            Just(ColumnKind::Done),
        ]
    }

    fn board_from(columns: &[ColumnKind]) -> (KanbanBoard, Vec<TaskId>) {
        let due = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
        let mut board = KanbanBoard::new();
        let mut ids = Vec::new();
        for (i, column) in columns.iter().enumerate() {
            let task = Task::new(TaskFields::new(format!("task {i}"), due, NaiveTime::MIN));
            ids.push(task.id);
            board.add_task(*column, task);
        }
        (board, ids)
    }

    proptest! {
        /// Moving never changes the total and leaves the task in exactly one column.
        #[test]
        fn move_preserves_total(
            columns in prop::collection::vec(arb_column(), 1..20),
            pick in any::<prop::sample::Index>(),
            to in arb_column(),
            position in prop::option::of(0usize..30),
        ) {
            let (mut board, ids) = board_from(&columns);
            let id = ids[pick.index(ids.len())];
            let before = board.total_tasks();

            board.move_task(id, to, position).expect("move");

            prop_assert_eq!(board.total_tasks(), before);
            let holders = board.columns.iter().filter(|c| c.get_task(id).is_some()).count();
            prop_assert_eq!(holders, 1);
            prop_assert_eq!(board.locate(id).map(|(kind, _)| kind), Some(to));
        }

        /// Editing puts the task last in its original column.
        #[test]
        fn edit_moves_task_to_end(
            columns in prop::collection::vec(arb_column(), 1..20),
            pick in any::<prop::sample::Index>(),
        ) {
            let (mut board, ids) = board_from(&columns);
            let id = ids[pick.index(ids.len())];
            let (column, _) = board.locate(id).expect("task present");
            let fields = board.get_task(id).expect("task present").fields();

            board.edit_task(id, fields).expect("edit");

            let len = board.column(column).len();
            prop_assert_eq!(board.locate(id), Some((column, len - 1)));
        }
    }
}
