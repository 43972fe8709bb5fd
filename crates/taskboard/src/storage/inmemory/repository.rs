//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use taskboard_core::storage::{RepositoryError, Result, TaskRepository};
use taskboard_core::task::{
    apply_patch, new_task, validate_update, CreateTaskRequest, Task, TaskId, UpdateTaskRequest,
};

/// In-memory storage backend.
///
/// Tasks are kept ordered by id, the same order a DynamoDB query over the
/// task partition returns them in. Data is lost when the last clone is
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<BTreeMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.values().cloned().collect())
    }

    async fn create_task(&self, request: CreateTaskRequest) -> Result<Task> {
        let task = new_task(request, TaskId::generate(), Utc::now())?;

        let mut tasks = self.tasks.write().await;
        tasks.insert(task.id.clone(), task.clone());
        Ok(task)
    }

    async fn update_task(&self, request: UpdateTaskRequest) -> Result<Task> {
        validate_update(&request)?;

        let mut tasks = self.tasks.write().await;
        let task = tasks
            .get_mut(&request.id)
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "Task",
                id: request.id.to_string(),
            })?;

        apply_patch(task, &request.patch, Utc::now());
        Ok(task.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use taskboard_core::task::{TaskError, TaskPatch, TaskPriority, TaskStatus};

    async fn pause() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let repo = InMemoryTaskRepository::new();

        let task = repo
            .create_task(CreateTaskRequest::new("new task"))
            .await
            .unwrap();

        assert_eq!(task.title, "new task");
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.priority, TaskPriority::Low);
        assert_eq!(task.created, task.modified);
        assert!(!task.id.as_str().is_empty());
    }

    #[tokio::test]
    async fn test_created_task_is_listed() {
        let repo = InMemoryTaskRepository::new();

        let task = repo
            .create_task(CreateTaskRequest::new("listed"))
            .await
            .unwrap();
        let all = repo.list_tasks().await.unwrap();

        assert_eq!(all.iter().filter(|t| t.id == task.id).count(), 1);
        assert_eq!(all[0], task);
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let repo = InMemoryTaskRepository::new();
        assert!(repo.list_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let repo = InMemoryTaskRepository::new();

        let a = repo.create_task(CreateTaskRequest::new("a")).await.unwrap();
        let b = repo.create_task(CreateTaskRequest::new("b")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(repo.list_tasks().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_title_keeps_other_fields() {
        let repo = InMemoryTaskRepository::new();
        let created = repo
            .create_task(
                CreateTaskRequest::new("x")
                    .with_status(TaskStatus::InProgress)
                    .with_priority(TaskPriority::High),
            )
            .await
            .unwrap();
        pause().await;

        let updated = repo
            .update_task(UpdateTaskRequest::new(
                created.id.clone(),
                TaskPatch::new().with_title("y"),
            ))
            .await
            .unwrap();

        assert_eq!(updated.title, "y");
        assert_eq!(updated.status, TaskStatus::InProgress);
        assert_eq!(updated.priority, TaskPriority::High);
        assert_eq!(updated.created, created.created);
        assert!(updated.modified > created.modified);
    }

    #[tokio::test]
    async fn test_update_status_only() {
        let repo = InMemoryTaskRepository::new();
        let created = repo.create_task(CreateTaskRequest::new("x")).await.unwrap();
        pause().await;

        let updated = repo
            .update_task(UpdateTaskRequest::new(
                created.id.clone(),
                TaskPatch::new().with_status(TaskStatus::Done),
            ))
            .await
            .unwrap();

        assert_eq!(updated.title, "x");
        assert_eq!(updated.status, TaskStatus::Done);
        assert!(updated.modified > created.modified);
    }

    #[tokio::test]
    async fn test_empty_patch_only_refreshes_modified() {
        let repo = InMemoryTaskRepository::new();
        let created = repo.create_task(CreateTaskRequest::new("x")).await.unwrap();
        pause().await;

        let updated = repo
            .update_task(UpdateTaskRequest::new(created.id.clone(), TaskPatch::new()))
            .await
            .unwrap();

        assert_eq!(updated.title, created.title);
        assert_eq!(updated.status, created.status);
        assert_eq!(updated.priority, created.priority);
        assert!(updated.modified > created.modified);
    }

    #[tokio::test]
    async fn test_update_is_visible_in_list() {
        let repo = InMemoryTaskRepository::new();
        let created = repo.create_task(CreateTaskRequest::new("x")).await.unwrap();

        let updated = repo
            .update_task(UpdateTaskRequest::new(
                created.id.clone(),
                TaskPatch::new().with_priority(TaskPriority::Medium),
            ))
            .await
            .unwrap();

        assert_eq!(repo.list_tasks().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let repo = InMemoryTaskRepository::new();

        let result = repo
            .update_task(UpdateTaskRequest::new(
                "does-not-exist",
                TaskPatch::new().with_title("y"),
            ))
            .await;

        assert_eq!(
            result,
            Err(RepositoryError::NotFound {
                entity_type: "Task",
                id: "does-not-exist".to_string(),
            })
        );
        assert!(repo.list_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_title_is_rejected_before_write() {
        let repo = InMemoryTaskRepository::new();

        let result = repo.create_task(CreateTaskRequest::new("  ")).await;

        assert_eq!(
            result,
            Err(RepositoryError::Validation(TaskError::EmptyTitle))
        );
        assert!(repo.list_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = InMemoryTaskRepository::new();
        let other = repo.clone();

        repo.create_task(CreateTaskRequest::new("shared"))
            .await
            .unwrap();

        assert_eq!(other.list_tasks().await.unwrap().len(), 1);
    }
}
