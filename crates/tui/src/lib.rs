//! Terminal UI for the taskboard application.
//!
//! This crate provides a Ratatui-based terminal interface for managing
//! and visualizing the Kanban board, with a calendar of due dates, task
//! reminders and PDF export.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Board selection, overlays and notices
//! - [`form`]: Task dialog and export prompt input state
//! - [`calendar`]: Month view cursor and week grid
//! - [`theme`]: Light and dark palettes, priority colours
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`notify`]: Desktop notifications for fired reminders
//!
//! # Example
//!
//! ```no_run
//! use taskboard_protocol::KanbanBoard;
//! use taskboard_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let board = KanbanBoard::new();
//!     let mut app = App::new(board);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod calendar;
pub mod event;
pub mod form;
pub mod layout;
pub mod notify;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::{AppState, InputMode, Notice, NoticeKind, Overlay};
pub use theme::Theme;
