use chrono::{DateTime, Utc};

use super::error::TaskError;
use super::requests::{CreateTaskRequest, TaskPatch, UpdateTaskRequest};
use super::types::{Task, TaskId};

/// Validates a task title.
pub fn validate_title(title: &str) -> Result<(), TaskError> {
    if title.trim().is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    Ok(())
}

/// Validates a create request before anything is written.
pub fn validate_create(request: &CreateTaskRequest) -> Result<(), TaskError> {
    validate_title(&request.title)
}

/// Validates an update request before anything is written.
pub fn validate_update(request: &UpdateTaskRequest) -> Result<(), TaskError> {
    if request.id.as_str().is_empty() {
        return Err(TaskError::EmptyId);
    }
    if let Some(title) = &request.patch.title {
        validate_title(title)?;
    }
    Ok(())
}

/// Builds a fully populated task from a create request.
///
/// `created` and `modified` share the single `now` instant. Unset status and
/// priority fall back to `todo` and `low`.
pub fn new_task(
    request: CreateTaskRequest,
    id: TaskId,
    now: DateTime<Utc>,
) -> Result<Task, TaskError> {
    validate_create(&request)?;

    Ok(Task {
        id,
        title: request.title,
        status: request.status.unwrap_or_default(),
        priority: request.priority.unwrap_or_default(),
        created: now,
        modified: now,
    })
}

/// Applies the present fields of a patch and stamps `modified`.
pub fn apply_patch(task: &mut Task, patch: &TaskPatch, modified: DateTime<Utc>) {
    if let Some(title) = &patch.title {
        task.title = title.clone();
    }
    if let Some(status) = patch.status {
        task.status = status;
    }
    if let Some(priority) = patch.priority {
        task.priority = priority;
    }
    task.modified = modified;
}
