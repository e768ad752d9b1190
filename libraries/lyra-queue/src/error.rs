//! Error types for queue management

use thiserror::Error;

/// Queue errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    /// Index outside the current queue bounds
    ///
    /// Reordering never clamps or silently corrects indices; an invalid
    /// index is surfaced to the caller immediately.
    #[error("index {index} out of bounds for queue of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type for queue operations
pub type Result<T> = std::result::Result<T, QueueError>;
