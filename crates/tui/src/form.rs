//! Task dialog and export prompt state.
//!
//! This module holds the editable state behind the task dialog (title,
//! description, priority, due date and reminder time) and the single-line
//! path prompt used before exporting.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use taskboard_protocol::{ColumnKind, Priority, Task, TaskFields, TaskId};

/// Date format accepted by the task dialog.
pub const FORM_DATE_FORMAT: &str = "%d.%m.%Y";

/// Time format accepted by the task dialog.
pub const FORM_TIME_FORMAT: &str = "%H:%M";

/// Errors produced when submitting the task dialog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The due date does not parse as `dd.mm.yyyy`.
    #[error("invalid due date '{0}', expected dd.mm.yyyy")]
    InvalidDate(String),

    /// The reminder time does not parse as `HH:MM`.
    #[error("invalid reminder time '{0}', expected HH:MM")]
    InvalidTime(String),
}

/// A single-line text buffer with a byte cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// Creates an input holding `value` with the cursor at the end.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    /// Returns the current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the cursor position in characters.
    #[must_use]
    pub fn cursor_column(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }

    /// Inserts a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some((prev_boundary, _)) = self.value[..self.cursor].char_indices().last() {
            self.value.remove(prev_boundary);
            self.cursor = prev_boundary;
        }
    }
}

/// Fields of the task dialog, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Task title.
    #[default]
    Title,
    /// Free-form description.
    Description,
    /// Priority selector.
    Priority,
    /// Due date, `dd.mm.yyyy`.
    DueDate,
    /// Reminder time, `HH:MM`.
    ReminderTime,
}

impl FormField {
    /// Returns all fields in tab order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Title,
            Self::Description,
            Self::Priority,
            Self::DueDate,
            Self::ReminderTime,
        ]
    }

    /// Returns the field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Priority => "Priority",
            Self::DueDate => "Due date",
            Self::ReminderTime => "Reminder",
        }
    }

    /// Returns the next field (wrapping around).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Priority,
            Self::Priority => Self::DueDate,
            Self::DueDate => Self::ReminderTime,
            Self::ReminderTime => Self::Title,
        }
    }

    /// Returns the previous field (wrapping around).
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Title => Self::ReminderTime,
            Self::Description => Self::Title,
            Self::Priority => Self::Description,
            Self::DueDate => Self::Priority,
            Self::ReminderTime => Self::DueDate,
        }
    }
}

/// What submitting the dialog does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    /// Append a new task to the column.
    Create(ColumnKind),
    /// Replace the fields of an existing task.
    Edit(TaskId),
}

/// State of the task dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    /// What submitting the dialog does.
    pub target: FormTarget,
    /// The field receiving input.
    pub focus: FormField,
    /// Title input.
    pub title: TextInput,
    /// Description input.
    pub description: TextInput,
    /// Selected priority.
    pub priority: Priority,
    /// Due date input, `dd.mm.yyyy`.
    pub due_date: TextInput,
    /// Reminder time input, `HH:MM`.
    pub reminder_time: TextInput,
    /// Error from the last failed submit.
    pub error: Option<FormError>,
}

impl TaskForm {
    /// Opens an empty dialog for a new task in `column`.
    ///
    /// The due date defaults to `now`'s date and the reminder time to
    /// `now`'s time of day.
    #[must_use]
    pub fn create(column: ColumnKind, now: NaiveDateTime, priority: Priority) -> Self {
        Self {
            target: FormTarget::Create(column),
            focus: FormField::Title,
            title: TextInput::default(),
            description: TextInput::default(),
            priority,
            due_date: TextInput::new(now.date().format(FORM_DATE_FORMAT).to_string()),
            reminder_time: TextInput::new(now.time().format(FORM_TIME_FORMAT).to_string()),
            error: None,
        }
    }

    /// Opens a dialog prefilled with an existing task.
    #[must_use]
    pub fn edit(task: &Task) -> Self {
        Self {
            target: FormTarget::Edit(task.id),
            focus: FormField::Title,
            title: TextInput::new(task.title.clone()),
            description: TextInput::new(task.description.clone()),
            priority: task.priority,
            due_date: TextInput::new(task.due_date.format(FORM_DATE_FORMAT).to_string()),
            reminder_time: TextInput::new(task.reminder_time.format(FORM_TIME_FORMAT).to_string()),
            error: None,
        }
    }

    /// Returns the dialog title.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self.target {
            FormTarget::Create(_) => "New Task",
            FormTarget::Edit(_) => "Edit Task",
        }
    }

    /// Moves focus to the next field.
    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field.
    pub fn previous_field(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Steps the priority selector. Ignored on text fields.
    pub fn cycle(&mut self, delta: i32) {
        if self.focus != FormField::Priority {
            return;
        }
        self.priority = if delta < 0 {
            self.priority.previous()
        } else {
            self.priority.next()
        };
    }

    /// Returns the text input behind the focused field, if it is one.
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::Priority => None,
            FormField::DueDate => Some(&mut self.due_date),
            FormField::ReminderTime => Some(&mut self.reminder_time),
        }
    }

    /// Types a character into the focused field.
    pub fn input_char(&mut self, ch: char) {
        if let Some(input) = self.focused_input() {
            input.insert_char(ch);
        }
    }

    /// Deletes the character before the cursor in the focused field.
    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_input() {
            input.backspace();
        }
    }

    /// Parses the dialog into task fields.
    ///
    /// Empty titles are accepted, as are dates in the past.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] if the date or time does not parse.
    pub fn submit(&self) -> Result<TaskFields, FormError> {
        let date_text = self.due_date.value().trim();
        let due_date = NaiveDate::parse_from_str(date_text, FORM_DATE_FORMAT)
            .map_err(|_| FormError::InvalidDate(date_text.to_string()))?;

        let time_text = self.reminder_time.value().trim();
        let reminder_time = NaiveTime::parse_from_str(time_text, FORM_TIME_FORMAT)
            .map_err(|_| FormError::InvalidTime(time_text.to_string()))?;

        Ok(TaskFields::new(self.title.value(), due_date, reminder_time)
            .with_description(self.description.value())
            .with_priority(self.priority))
    }
}

/// State of the export destination prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrompt {
    /// The path being typed.
    pub input: TextInput,
}

impl PathPrompt {
    /// Opens the prompt prefilled with `default`.
    #[must_use]
    pub fn new(default: PathBuf) -> Self {
        Self {
            input: TextInput::new(default.to_string_lossy().into_owned()),
        }
    }

    /// Returns the chosen path, or `None` if the input is blank.
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        let value = self.input.value().trim();
        (!value.is_empty()).then(|| PathBuf::from(value))
    }
}
