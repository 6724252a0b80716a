//! PDF export for taskboard.
//!
//! Export happens in two steps: the board is laid out into an
//! [`ExportDocument`] (column headings, one line per task, optional
//! description notes), which is then rendered to PDF.
//!
//! # Overview
//!
//! - [`document`]: the format-independent layout, also printable as text
//! - [`pdf`]: A4 rendering with built-in fonts, pagination and wrapping
//! - [`error`]: error types for rendering and writing
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use taskboard_export::export_board;
//! use taskboard_protocol::KanbanBoard;
//!
//! let board = KanbanBoard::new();
//! export_board(&board, Path::new("kanban.pdf"), "%d.%m.%Y").unwrap();
//! ```

use std::path::Path;

use taskboard_protocol::KanbanBoard;

pub mod document;
pub mod error;
pub mod pdf;

pub use document::{DEFAULT_DATE_FORMAT, Entry, ExportDocument, Section};
pub use error::{ExportError, Result};
pub use pdf::{render_pdf, write_pdf};

/// Lays out `board` and writes it as a PDF to `path`.
///
/// Returns the number of pages written.
///
/// # Errors
///
/// See [`write_pdf`].
pub fn export_board(board: &KanbanBoard, path: &Path, date_format: &str) -> Result<usize> {
    write_pdf(&ExportDocument::from_board(board, date_format), path)
}
