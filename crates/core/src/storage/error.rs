use thiserror::Error;

use crate::task::TaskError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    /// A stored record did not have the expected shape.
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Validation failed: {0}")]
    Validation(#[from] TaskError),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Task",
            id: "does-not-exist".to_string(),
        };
        assert_eq!(error.to_string(), "Task not found: does-not-exist");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("Table not found".to_string());
        assert_eq!(error.to_string(), "Query failed: Table not found");
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("Missing or invalid field: title".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid data: Missing or invalid field: title"
        );
    }

    #[test]
    fn test_validation_error_converts_from_task_error() {
        let error: RepositoryError = TaskError::EmptyTitle.into();
        assert_eq!(error, RepositoryError::Validation(TaskError::EmptyTitle));
        assert_eq!(
            error.to_string(),
            "Validation failed: Task title cannot be empty"
        );
    }
}
