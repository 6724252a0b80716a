//! Error types for the taskboard-protocol crate.
//!
//! This module defines the errors that can occur when manipulating the
//! board, such as referring to a task that no column holds.

use thiserror::Error;

use crate::task::TaskId;

/// Errors that can occur during board operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A task with the given ID was not found in any column.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
