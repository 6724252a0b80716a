//! Task-related types for the Kanban board.
//!
//! This module defines the task entity, its identifier, and the set of
//! user-editable fields that the task dialog produces.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::board::ColumnKind;
use crate::priority::Priority;

/// Unique identifier for a task.
///
/// Uses UUID v4 for globally unique identification. Front-ends refer to
/// tasks only through this identifier, never by embedding the record.
pub type TaskId = uuid::Uuid;

/// The user-editable fields of a task.
///
/// This is what the creation and edit dialogs produce. An edit replaces
/// every field at once.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use taskboard_protocol::{Priority, TaskFields};
///
/// let due = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// let at = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
/// let fields = TaskFields::new("Write report", due, at)
///     .with_description("Quarterly numbers")
///     .with_priority(Priority::High);
///
/// assert_eq!(fields.priority, Priority::High);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    /// Short summary. Not validated, an empty title is accepted.
    pub title: String,
    /// Optional free text, may be empty.
    pub description: String,
    /// How urgent the task is.
    pub priority: Priority,
    /// The calendar date the task is due on.
    pub due_date: NaiveDate,
    /// Time of day the reminder fires on `due_date`.
    pub reminder_time: NaiveTime,
}

impl TaskFields {
    /// Creates fields with an empty description and the default priority.
    #[must_use]
    pub fn new(title: impl Into<String>, due_date: NaiveDate, reminder_time: NaiveTime) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            due_date,
            reminder_time,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Combines the due date and reminder time into one local instant.
    #[must_use]
    pub fn due_instant(&self) -> NaiveDateTime {
        self.due_date.and_time(self.reminder_time)
    }
}

/// A task on the Kanban board.
///
/// Each task has a unique identifier, the fields entered in the task dialog,
/// and the column it currently lives in.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use taskboard_protocol::{ColumnKind, Priority, Task, TaskFields};
///
/// let due = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// let at = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
/// let task = Task::new(TaskFields::new("Write report", due, at));
///
/// assert_eq!(task.column, ColumnKind::ToDo);
/// assert_eq!(task.priority, Priority::Medium);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Which column this task currently resides in.
    pub column: ColumnKind,
    /// Short summary of the task.
    pub title: String,
    /// Optional details, may be empty.
    pub description: String,
    /// How urgent the task is.
    pub priority: Priority,
    /// The date the task is due on.
    pub due_date: NaiveDate,
    /// Time of day the reminder fires.
    pub reminder_time: NaiveTime,
}

impl Task {
    /// Creates a new task in the `To Do` column with a fresh identifier.
    #[must_use]
    pub fn new(fields: TaskFields) -> Self {
        Self::with_id(TaskId::new_v4(), fields)
    }

    /// Creates a new task with a specific ID.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, NaiveTime};
    /// use taskboard_protocol::{Task, TaskFields, TaskId};
    ///
    /// let id = TaskId::new_v4();
    /// let due = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// let task = Task::with_id(id, TaskFields::new("Test", due, NaiveTime::MIN));
    /// assert_eq!(task.id, id);
    /// ```
    #[must_use]
    pub fn with_id(id: TaskId, fields: TaskFields) -> Self {
        let TaskFields {
            title,
            description,
            priority,
            due_date,
            reminder_time,
        } = fields;
        Self {
            id,
            column: ColumnKind::ToDo,
            title,
            description,
            priority,
            due_date,
            reminder_time,
        }
    }

    /// Returns a copy of the user-editable fields.
    ///
    /// Used to prefill the edit dialog.
    #[must_use]
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            due_date: self.due_date,
            reminder_time: self.reminder_time,
        }
    }

    /// Combines the due date and reminder time into one local instant.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, NaiveTime};
    /// use taskboard_protocol::{Task, TaskFields};
    ///
    /// let due = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    /// let at = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
    /// let task = Task::new(TaskFields::new("Report", due, at));
    ///
    /// assert_eq!(task.due_instant(), due.and_time(at));
    /// ```
    #[must_use]
    pub fn due_instant(&self) -> NaiveDateTime {
        self.due_date.and_time(self.reminder_time)
    }

    /// Moves the task to a different column.
    pub fn move_to_column(&mut self, column: ColumnKind) {
        self.column = column;
    }
}
