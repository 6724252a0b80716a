//! Widget components for the taskboard TUI.
//!
//! This module provides reusable rendering functions for the Kanban board UI,
//! organized into focused submodules for each visual component.
//!
//! # Overview
//!
//! The widget system follows a functional rendering approach where each widget
//! is a plain function that renders state to a buffer. This enables easy
//! testing and composition.
//!
//! # Modules
//!
//! - [`board`]: Renders the complete Kanban board with three columns
//! - [`column`]: Renders individual columns with task lists
//! - [`task_card`]: Renders task cards coloured by priority
//! - [`calendar`]: Renders the month grid and due-date preview
//! - [`form`]: Renders the task dialog
//! - [`prompt`]: Renders the export prompt and delete confirmation
//! - [`notice`]: Renders message boxes
//! - [`help`]: Renders the key binding overlay
//! - [`status_bar`]: Renders the footer with keybinding hints
//!
//! # Color Coding
//!
//! Task cards are colour-coded by [`Priority`](taskboard_protocol::Priority):
//!
//! | Priority | Color |
//! |----------|-------|
//! | `High` | Red |
//! | `Medium` | Yellow |
//! | `Low` | Green |

use crate::theme::Theme;

pub mod board;
pub mod calendar;
pub mod column;
pub mod form;
pub mod help;
pub mod notice;
pub mod prompt;
pub mod status_bar;
pub mod task_card;

pub use board::{column_at, render_board};
pub use calendar::render_calendar;
pub use column::{ColumnPosition, render_column};
pub use form::render_task_form;
pub use help::render_help_overlay;
pub use notice::render_notice;
pub use prompt::{render_confirm_delete, render_export_prompt};
pub use status_bar::render_status_bar;
pub use task_card::render_task_card;

/// Presentation settings shared by the board widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStyle<'a> {
    /// Active colour theme.
    pub theme: Theme,
    /// `strftime` pattern for due dates.
    pub date_format: &'a str,
}

impl Default for BoardStyle<'_> {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            date_format: "%d.%m.%Y",
        }
    }
}
