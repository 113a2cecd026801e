//! Error types for the task tracker core

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the task store, its persistence, and the repository
#[derive(Error, Debug)]
pub enum TaskError {
    /// The title was empty or whitespace-only
    #[error("Task title must not be empty")]
    InvalidTask,

    /// A completion referenced a position that does not exist (stale or invalid index)
    #[error("Task index {index} is out of range ({len} pending task(s)); re-list tasks and retry")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to access task data at '{}': {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The data file exists but cannot be understood
    #[error("Task data in '{}' is corrupt: {reason}", .path.display())]
    CorruptState { path: PathBuf, reason: String },

    #[error("Failed to encode task data: {0}")]
    Encode(#[from] toml::ser::Error),
}

impl TaskError {
    /// Whether the error comes from the caller's input rather than from storage
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TaskError::InvalidTask | TaskError::IndexOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
