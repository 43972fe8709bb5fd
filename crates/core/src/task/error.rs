use thiserror::Error;

/// Errors that can occur when validating or decoding tasks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task title cannot be empty")]
    EmptyTitle,
    #[error("Task id cannot be empty")]
    EmptyId,
    #[error("Unknown task status: {0}")]
    UnknownStatus(String),
    #[error("Unknown task priority: {0}")]
    UnknownPriority(String),
}
