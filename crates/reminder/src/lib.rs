//! One-shot task reminders for taskboard.
//!
//! A reminder fires once at a task's due instant (its due date combined
//! with its reminder time). Reminders whose instant is not in the future
//! are never armed.
//!
//! # Overview
//!
//! - [`ReminderScheduler`]: registry of pending reminders keyed by task,
//!   each backed by a cancellable tokio timer
//! - [`ReminderEvent`]: what a firing delivers on the scheduler's channel
//! - [`delay_until`]: the pure timing rule
//!
//! # Examples
//!
//! ```no_run
//! use chrono::{Duration, Local};
//! use taskboard_protocol::{Task, TaskFields};
//! use taskboard_reminder::ReminderScheduler;
//!
//! # async fn demo() {
//! let (mut scheduler, mut events) = ReminderScheduler::new();
//! let due = Local::now().naive_local() + Duration::minutes(5);
//! let task = Task::new(TaskFields::new("Stand-up", due.date(), due.time()));
//!
//! scheduler.schedule(&task, Local::now().naive_local());
//! if let Some(event) = events.recv().await {
//!     println!("{}", event.message());
//! }
//! # }
//! ```

mod scheduler;

pub use scheduler::{
    ReminderEvent, ReminderId, ReminderScheduler, ScheduledReminder, delay_until, local_now,
};
