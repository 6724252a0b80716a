//! Error types for the export crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while exporting a board.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The PDF library failed to build the document.
    #[error("failed to render PDF: {0}")]
    Render(String),

    /// The finished document could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Destination that was being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
