//! Shared protocol types for the taskboard application.
//!
//! This crate defines the core types used across all taskboard components,
//! including tasks, the Kanban board structure, calendar marks, priority
//! colouring, messages, and error types.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Task identifiers, editable fields, and the `Task` struct
//! - [`priority`]: Priority levels and their colour coding
//! - [`board`]: The three status columns and the `KanbanBoard` struct
//! - [`calendar`]: Calendar date marks and due-date queries
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for board operations
//!
//! # Examples
//!
//! Creating and managing tasks on a board:
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use taskboard_protocol::{ColumnKind, KanbanBoard, Priority, Task, TaskFields};
//!
//! let mut board = KanbanBoard::new();
//!
//! let due = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
//! let at = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
//! let task = Task::new(TaskFields::new("Ship release", due, at).with_priority(Priority::High));
//! let task_id = task.id;
//! board.add_task(ColumnKind::ToDo, task);
//!
//! // Move the task through the workflow
//! board.move_task(task_id, ColumnKind::InProgress, None).unwrap();
//!
//! assert_eq!(board.tasks_due_on(due).len(), 1);
//! ```

pub mod board;
pub mod calendar;
pub mod error;
pub mod message;
pub mod priority;
pub mod task;

// Re-export primary types at crate root for convenience
pub use board::{Column, ColumnKind, KanbanBoard};
pub use calendar::{CalendarMarks, DueSummary, NO_TASKS_MESSAGE, describe_due_on};
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use priority::{Priority, PriorityColor, color_for, color_for_label};
pub use task::{Task, TaskFields, TaskId};
