//! API request types for task operations.
//!
//! Pure data types with no I/O, shared by every storage backend.

use serde::{Deserialize, Serialize};

use super::types::{TaskId, TaskPriority, TaskStatus};

/// Request payload for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

impl CreateTaskRequest {
    /// Create a new request with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: None,
            priority: None,
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// The editable subset of a task. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

impl TaskPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// True when no editable field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.status.is_none() && self.priority.is_none()
    }
}

/// Request payload for a sparse update of an existing task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub id: TaskId,
    #[serde(flatten)]
    pub patch: TaskPatch,
}

impl UpdateTaskRequest {
    pub fn new(id: impl Into<TaskId>, patch: TaskPatch) -> Self {
        Self {
            id: id.into(),
            patch,
        }
    }
}
