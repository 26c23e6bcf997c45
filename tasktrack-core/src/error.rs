//! Validation errors raised by task construction, setters and input parsing.

use chrono::NaiveDateTime;
use thiserror::Error;

/// A precondition on a task field was violated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Task title is empty or whitespace-only.
    #[error("task title cannot be empty")]
    TitleEmpty,
    /// Due date precedes the task's creation time.
    #[error("due date {due} is earlier than creation time {created}")]
    DueBeforeCreation {
        /// Rejected due date.
        due: NaiveDateTime,
        /// Creation time of the task.
        created: NaiveDateTime,
    },
    /// Input does not name a task status.
    #[error("unknown status: {0} (expected pending, in_progress, completed or cancelled)")]
    UnknownStatus(String),
    /// Input does not name a priority.
    #[error("unknown priority: {0} (expected low, medium, high or urgent)")]
    UnknownPriority(String),
    /// Input is not a valid task identifier.
    #[error("invalid task id: {0}")]
    InvalidTaskId(String),
    /// Input does not match the expected date/time format.
    #[error("invalid date/time {input:?} (expected format {format})")]
    InvalidDateTime {
        /// Raw input text.
        input: String,
        /// The `chrono` format string it was parsed against.
        format: String,
    },
}
