//! Configuration management for the taskboard application.
//!
//! This crate handles loading, validating, and persisting configuration.
//! Board contents are never persisted; only preferences live here.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`board`]: Default priority and date format
//! - [`reminders`]: Reminder arming and desktop notifications
//! - [`export`]: Export prompt defaults
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./taskboard.json5` or `./taskboard.json`)
//! 2. User config (`~/.config/taskboard/config.json5` or `~/.config/taskboard/config.json`)
//! 3. Built-in defaults
//!
//! # Example File
//!
//! ```json5
//! {
//!   board: { default_priority: "high", date_format: "%d.%m.%Y" },
//!   reminders: { enabled: true, desktop_notifications: true },
//!   export: { directory: "~/Documents", file_name: "kanban.pdf" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use taskboard_config::Config;
//!
//! # fn example() -> taskboard_config::Result<()> {
//! let config = Config::load()?;
//! println!("Dates look like {}", config.board.date_format);
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod export;
pub mod persistence;
pub mod reminders;

// Re-export primary types at crate root for convenience
pub use board::BoardConfig;
pub use config::Config;
pub use error::{ConfigError, Result};
pub use export::ExportConfig;
pub use reminders::ReminderConfig;
