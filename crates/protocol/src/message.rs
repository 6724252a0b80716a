//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(matches!(msg, Message::NavigateRight));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the left column.
    NavigateLeft,
    /// Move selection to the right column.
    NavigateRight,
    /// Move selection up within the current column.
    NavigateUp,
    /// Move selection down within the current column.
    NavigateDown,
    /// Move the selected task to the column on the left.
    MoveTaskLeft,
    /// Move the selected task to the column on the right.
    MoveTaskRight,
    /// Move the selected task one place up in its column.
    MoveTaskUp,
    /// Move the selected task one place down in its column.
    MoveTaskDown,
    /// Open the dialog for a new task in the focused column.
    NewTask,
    /// Open the dialog for the selected task.
    EditTask,
    /// Ask to delete the selected task.
    DeleteTask,
    /// Confirm a pending deletion.
    ConfirmDelete,
    /// Open the calendar view.
    OpenCalendar,
    /// Switch between the light and dark palette.
    ToggleTheme,
    /// Open the PDF export prompt.
    ExportPdf,
    /// Toggle help overlay.
    ToggleHelp,
    /// Dismiss the front notice.
    DismissNotice,
    /// Escape: close the topmost overlay or clear state (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },

    // --- Dialog and prompt messages ---
    /// Focus the next dialog field.
    NextField,
    /// Focus the previous dialog field.
    PrevField,
    /// Cycle the value of a selector field.
    CycleValue {
        /// Direction to cycle (positive = forward, negative = backward).
        delta: i32,
    },
    /// Input a character into the focused field.
    Input {
        /// The character that was input.
        ch: char,
    },
    /// Delete the last character of the focused field.
    Backspace,
    /// Confirm the dialog or prompt.
    Submit,
    /// Cancel the dialog or prompt.
    Cancel,

    // --- Calendar messages ---
    /// Move the calendar cursor by a number of days.
    CalendarMoveDays {
        /// Days to move (negative = backward).
        days: i32,
    },
    /// Move the calendar cursor by a number of months.
    CalendarMoveMonths {
        /// Months to move (negative = backward).
        months: i32,
    },
    /// Jump the calendar cursor to today.
    CalendarToday,
    /// Show what is due on the cursor date.
    CalendarSelect,
}

impl Message {
    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}
