use async_trait::async_trait;

use crate::task::{CreateTaskRequest, Task, UpdateTaskRequest};

use super::Result;

/// Repository for task persistence.
///
/// Implementations hold no in-process mutable state of their own beyond the
/// store handle, and never retry: store failures are returned as-is.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Lists every stored task. Order is not significant.
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Creates a task with a fresh id and `created == modified`.
    ///
    /// Validation happens before the store is touched. Returns the task as
    /// constructed; the store is not re-read.
    async fn create_task(&self, request: CreateTaskRequest) -> Result<Task>;

    /// Applies a sparse patch to an existing task and refreshes `modified`.
    ///
    /// Returns the complete post-update task. An unknown id is
    /// `RepositoryError::NotFound`; no record is created.
    async fn update_task(&self, request: UpdateTaskRequest) -> Result<Task>;
}
