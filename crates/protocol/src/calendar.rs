//! Calendar date marks and due-date queries.
//!
//! Marks record which dates have at least one task due so a date picker can
//! highlight them. Queries always scan the whole board; there is no
//! incremental index.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::board::KanbanBoard;

/// Message shown when a date has nothing due.
pub const NO_TASKS_MESSAGE: &str = "No tasks due on this day.";

/// The set of dates that have at least one due task.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskboard_protocol::CalendarMarks;
///
/// let mut marks = CalendarMarks::new();
/// let day = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
///
/// marks.mark_due(day);
/// marks.mark_due(day);
/// assert_eq!(marks.len(), 1);
/// assert!(marks.is_marked(day));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarMarks {
    dates: BTreeSet<NaiveDate>,
}

impl CalendarMarks {
    /// Creates an empty set of marks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `date` has at least one due task. Idempotent.
    pub fn mark_due(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    /// Returns `true` if `date` is marked.
    #[must_use]
    pub fn is_marked(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Iterates over marked dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Returns the number of marked dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if no date is marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Rebuilds the marks from the tasks currently on the board.
    ///
    /// Dates whose last task was deleted or re-dated lose their mark.
    pub fn sync_with(&mut self, board: &KanbanBoard) {
        self.dates = board.iter_tasks().map(|t| t.due_date).collect();
    }
}

/// A human-readable answer to "what is due on this date".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueSummary {
    /// Heading naming the date, e.g. `Tasks on 04.07.2025`.
    pub heading: String,
    /// One `• <title> (<priority>)` line per task, or the no-tasks message.
    pub lines: Vec<String>,
    /// Number of tasks due.
    pub count: usize,
}

impl DueSummary {
    /// Returns `true` if nothing is due.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Joins the lines into a single message body.
    #[must_use]
    pub fn body(&self) -> String {
        self.lines.join("\n")
    }
}

/// Describes the tasks due on `date`, formatting the date with `date_format`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskboard_protocol::{KanbanBoard, NO_TASKS_MESSAGE, describe_due_on};
///
/// let board = KanbanBoard::new();
/// let day = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
/// let summary = describe_due_on(&board, day, "%d.%m.%Y");
///
/// assert_eq!(summary.heading, "Tasks on 04.07.2025");
/// assert_eq!(summary.body(), NO_TASKS_MESSAGE);
/// ```
#[must_use]
pub fn describe_due_on(board: &KanbanBoard, date: NaiveDate, date_format: &str) -> DueSummary {
    let due = board.tasks_due_on(date);
    let heading = format!("Tasks on {}", date.format(date_format));
    let lines = if due.is_empty() {
        vec![NO_TASKS_MESSAGE.to_string()]
    } else {
        due.iter()
            .map(|t| format!("• {} ({})", t.title, t.priority))
            .collect()
    };
    DueSummary {
        heading,
        lines,
        count: due.len(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::board::ColumnKind;
    use crate::priority::Priority;
    use crate::task::{Task, TaskFields};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).expect("valid date")
    }

    fn task(title: &str, due: NaiveDate, priority: Priority) -> Task {
        Task::new(TaskFields::new(title, due, NaiveTime::MIN).with_priority(priority))
    }

    #[test]
    fn mark_due_is_idempotent() {
        let mut marks = CalendarMarks::new();
        marks.mark_due(date(1));
        let once = marks.clone();
        marks.mark_due(date(1));
        assert_eq!(marks, once);
    }

    #[test]
    fn iter_is_sorted() {
        let mut marks = CalendarMarks::new();
        marks.mark_due(date(9));
        marks.mark_due(date(2));
        marks.mark_due(date(5));
        assert_eq!(marks.iter().collect::<Vec<_>>(), [date(2), date(5), date(9)]);
    }

    #[test]
    fn sync_drops_stale_marks() {
        let mut board = KanbanBoard::new();
        let t = task("temp", date(3), Priority::Low);
        let id = t.id;
        board.add_task(ColumnKind::ToDo, t);
        board.add_task(ColumnKind::Done, task("stays", date(4), Priority::Low));

        let mut marks = CalendarMarks::new();
        marks.sync_with(&board);
        assert!(marks.is_marked(date(3)));

        board.remove_task(id);
        marks.sync_with(&board);
        assert!(!marks.is_marked(date(3)));
        assert!(marks.is_marked(date(4)));
    }

    #[test]
    fn describe_lists_tasks_with_priorities() {
        let mut board = KanbanBoard::new();
        board.add_task(ColumnKind::InProgress, task("Deploy", date(4), Priority::High));
        board.add_task(ColumnKind::ToDo, task("Write notes", date(4), Priority::Low));

        let summary = describe_due_on(&board, date(4), "%d.%m.%Y");
        assert_eq!(summary.count, 2);
        assert_eq!(summary.lines, ["• Write notes (Low)", "• Deploy (High)"]);
    }

    #[test]
    fn describe_reports_no_tasks() {
        let mut board = KanbanBoard::new();
        board.add_task(ColumnKind::ToDo, task("Elsewhere", date(8), Priority::Medium));

        let summary = describe_due_on(&board, date(4), "%Y-%m-%d");
        assert!(summary.is_empty());
        assert_eq!(summary.heading, "Tasks on 2025-07-04");
        assert_eq!(summary.lines, [NO_TASKS_MESSAGE]);
    }
}
